//! **hexgrid-paths** — generic best-first search.
//!
//! This crate provides a reusable multi-source [A\*](astar) implementation
//! that knows nothing about grids: it operates over any state type with
//! equality and a stable hash, through the [`StateSpace`] / [`AstarSpace`]
//! capability traits. Progress is observable through a per-expansion visit
//! hook, which is how callers stream search traces without the algorithm
//! capturing any of their state.

mod astar;
mod traits;

pub use astar::astar;
pub use traits::{AstarSpace, StateSpace};
