//! **hexgrid-search** — runs the grid search and streams its progress.
//!
//! This crate binds [`hexgrid_core::HexGrid`] to the generic search in
//! `hexgrid-paths` and streams [`SearchEvent`]s through a
//! [`hexgrid_channel::Channel`]:
//!
//! - [`GridSearcher`] performs one search synchronously, pushing an
//!   [`Expand`](EventKind::Expand) event per finalized cell and a
//!   [`Backtrace`](EventKind::Backtrace) event per path cell (goal → start),
//!   then closes the producer side of the channel.
//! - [`start_search`] snapshots a grid and runs a [`GridSearcher`] on a
//!   worker thread, returning a [`SearchHandle`] for the consumer.
//!
//! The searcher never mutates cell state; consumers translate events into
//! cell flags, typically via [`SearchEvent::apply_to`].

pub mod events;
pub mod runner;
pub mod searcher;

pub use events::{EventKind, SearchEvent};
pub use runner::{start_search, start_search_with, SearchHandle};
pub use searcher::GridSearcher;
