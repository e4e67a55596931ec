//! Terminal search trace: paints a walled grid, runs a search, drains the
//! event stream the way an interactive consumer would, and prints the
//! result as ASCII art.

use hexgrid_channel::OverflowPolicy;
use hexgrid_core::{CellKind, Coord, HexGrid};
use hexgrid_search::{start_search_with, EventKind};

const WIDTH: i32 = 16;
const HEIGHT: i32 = 12;

fn main() {
    env_logger::init();

    let mut grid = HexGrid::new(WIDTH, HEIGHT);

    // A wall down the middle, with a single gap near the bottom.
    for y in 0..HEIGHT {
        if y != 9 {
            grid.entry(Coord::new(y / 2 + 7, y)).kind = CellKind::Wall;
        }
    }
    grid.entry(Coord::new(2, 3)).kind = CellKind::Start;
    grid.entry(Coord::new(14, 6)).kind = CellKind::End;

    grid.reset_searched();
    let handle = start_search_with(&grid, OverflowPolicy::Block, 20);
    let events = handle.events();

    let mut expanded = 0u32;
    let mut path_len = 0u32;
    while let Some(ev) = events.pop() {
        match ev.kind {
            EventKind::Expand => expanded += 1,
            EventKind::Backtrace => path_len += 1,
        }
        ev.apply_to(&mut grid);
    }
    handle.join().expect("search thread panicked");

    render(&grid);
    println!();
    println!("{expanded} cells expanded, path of {path_len} cells");
}

fn render(grid: &HexGrid) {
    for y in 0..grid.height() {
        // Half-cell indent on odd rows to suggest the hex skew.
        let mut line = String::from(if y % 2 == 1 { " " } else { "" });
        for x in y / 2..y / 2 + grid.width() {
            let e = grid.get(Coord::new(x, y)).unwrap();
            let ch = match e.kind {
                CellKind::Wall => '#',
                CellKind::Start => 'S',
                CellKind::End => 'E',
                CellKind::Open if e.path => '*',
                CellKind::Open if e.searched => 'o',
                CellKind::Open => '.',
            };
            line.push(ch);
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }
}
