//! Binds a [`HexGrid`] to the generic search and streams its progress.

use std::collections::HashSet;

use hexgrid_channel::Channel;
use hexgrid_core::{CellKind, Coord, HexGrid, NEIGHBOR_OFFSETS};
use hexgrid_paths::{astar, AstarSpace, StateSpace};

use crate::events::{EventKind, SearchEvent};

/// The hex grid seen as a search space: walls are impassable, every edge
/// costs one step, and the heuristic is the hex distance to the nearest
/// goal cell.
struct GridSpace<'g> {
    grid: &'g HexGrid,
    goals: HashSet<Coord>,
}

impl StateSpace for GridSpace<'_> {
    type State = Coord;

    fn neighbors(&self, s: Coord, buf: &mut Vec<(Coord, i32)>) {
        for d in NEIGHBOR_OFFSETS {
            let n = s + d;
            if let Some(e) = self.grid.get(n) {
                if e.kind != CellKind::Wall {
                    buf.push((n, 1));
                }
            }
        }
    }
}

impl AstarSpace for GridSpace<'_> {
    fn heuristic(&self, s: Coord) -> i32 {
        // With no goal cells the search should simply exhaust; zero keeps
        // the estimate admissible and deterministic.
        self.goals
            .iter()
            .map(|&g| self.grid.distance(s, g))
            .min()
            .unwrap_or(0)
    }

    fn is_goal(&self, s: Coord) -> bool {
        self.goals.contains(&s)
    }
}

/// Runs one search over a grid, streaming progress into a channel.
///
/// The searcher reads cell kinds once at the start of [`run`](Self::run)
/// and never mutates the grid; consumers translate the emitted events into
/// cell flags.
pub struct GridSearcher<'g> {
    grid: &'g HexGrid,
}

impl<'g> GridSearcher<'g> {
    /// Create a searcher over `grid`.
    pub fn new(grid: &'g HexGrid) -> Self {
        Self { grid }
    }

    /// Run the search to completion.
    ///
    /// Every `Start` cell seeds the search; every `End` cell is a goal.
    /// Each finalized cell is pushed as an [`EventKind::Expand`] event, in
    /// expansion order. If a goal is reached, the discovered path is then
    /// replayed goal → start as [`EventKind::Backtrace`] events. The back
    /// of `out` is closed on exit no matter what, including when no path
    /// exists or the consumer cancelled by closing the front.
    pub fn run(&self, out: &Channel<SearchEvent>) {
        let mut starts = Vec::new();
        let mut goals = HashSet::new();
        for (c, e) in self.grid.iter() {
            match e.kind {
                CellKind::Start => starts.push(c),
                CellKind::End => {
                    goals.insert(c);
                }
                _ => {}
            }
        }
        log::debug!(
            "search starting: {} start cell(s), {} goal cell(s)",
            starts.len(),
            goals.len()
        );

        let space = GridSpace {
            grid: self.grid,
            goals,
        };
        let mut expanded = 0u32;
        let path = astar(&space, &starts, |state, _parent| {
            expanded += 1;
            out.push(SearchEvent::new(EventKind::Expand, state));
        });

        // Replay the path in reverse so the consumer sees it grow from the
        // goal back to the start.
        for &c in path.iter().rev() {
            out.push(SearchEvent::new(EventKind::Backtrace, c));
        }

        log::debug!(
            "search finished: {} cell(s) expanded, path length {}",
            expanded,
            path.len()
        );
        out.close_back();
    }
}
