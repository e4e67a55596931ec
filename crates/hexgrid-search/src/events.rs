//! Progress events crossing from the search worker to its consumer.

use hexgrid_core::{Coord, HexGrid};

/// What happened to a cell during the search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// The cell was finalized (expanded) by the search.
    Expand,
    /// The cell lies on the discovered path, replayed goal → start.
    Backtrace,
}

/// A single search progress event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchEvent {
    pub kind: EventKind,
    pub pos: Coord,
}

impl SearchEvent {
    /// Create a new event.
    #[inline]
    pub const fn new(kind: EventKind, pos: Coord) -> Self {
        Self { kind, pos }
    }

    /// Translate this event into cell flags on `grid`: `Expand` marks the
    /// cell `searched`, `Backtrace` marks it `path`, and either marks it
    /// `modified` for the renderer.
    ///
    /// # Panics
    ///
    /// Panics if the event's coordinate is not a cell of `grid`; events
    /// from a search of a same-sized grid are always in bounds.
    pub fn apply_to(&self, grid: &mut HexGrid) {
        let entry = grid.entry(self.pos);
        match self.kind {
            EventKind::Expand => entry.searched = true,
            EventKind::Backtrace => entry.path = true,
        }
        entry.modified = true;
    }
}
