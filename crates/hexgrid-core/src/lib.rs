//! **hexgrid-core** — the hexagonal grid model.
//!
//! This crate provides the foundational types for hex-grid pathfinding
//! visualization: the [`Coord`] coordinate pair, the per-cell [`CellEntry`]
//! record, and the [`HexGrid`] itself, which owns the cells and knows the
//! hex adjacency and distance rules.

pub mod cell;
pub mod coord;
pub mod grid;

pub use cell::{CellEntry, CellKind};
pub use coord::Coord;
pub use grid::{Cells, HexGrid, NEIGHBOR_OFFSETS};
