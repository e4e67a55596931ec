//! Worker-thread ownership of a running search.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use hexgrid_channel::{Channel, OverflowPolicy};
use hexgrid_core::HexGrid;

use crate::events::SearchEvent;
use crate::searcher::GridSearcher;

/// Capacity used by [`start_search`]; enough to keep a frame-rate consumer
/// busy while still applying backpressure to the worker.
const DEFAULT_CAPACITY: usize = 20;

/// A search running on its own worker thread.
///
/// Dropping the handle without [`join`](Self::join)ing detaches the worker;
/// it finishes on its own and closes the channel's back either way.
pub struct SearchHandle {
    channel: Arc<Channel<SearchEvent>>,
    worker: JoinHandle<()>,
}

impl SearchHandle {
    /// The consumer end of the event stream.
    pub fn events(&self) -> Arc<Channel<SearchEvent>> {
        Arc::clone(&self.channel)
    }

    /// Cancel the search by closing the front of the channel. The worker's
    /// pushes start failing immediately, so it winds down without ever
    /// blocking on the full queue again. Idempotent.
    pub fn cancel(&self) {
        self.channel.close_front();
    }

    /// Whether the worker has finished (found a path, exhausted the
    /// frontier, or wound down after cancellation).
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Wait for the worker to finish.
    pub fn join(self) -> thread::Result<()> {
        self.worker.join()
    }
}

/// Start a search over a snapshot of `grid` on a worker thread, streaming
/// events through a [`OverflowPolicy::Block`] channel of default capacity.
///
/// The grid is cloned at call time: cell kinds are read once, and edits
/// made to the caller's grid while the search runs do not affect it.
pub fn start_search(grid: &HexGrid) -> SearchHandle {
    start_search_with(grid, OverflowPolicy::Block, DEFAULT_CAPACITY)
}

/// [`start_search`] with an explicit overflow policy and capacity.
pub fn start_search_with(
    grid: &HexGrid,
    policy: OverflowPolicy,
    capacity: usize,
) -> SearchHandle {
    let channel = Arc::new(Channel::new(policy, capacity));
    let snapshot = grid.clone();
    let worker = {
        let channel = Arc::clone(&channel);
        thread::Builder::new()
            .name("grid-search".into())
            .spawn(move || GridSearcher::new(&snapshot).run(&channel))
            .expect("failed to spawn search thread")
    };
    SearchHandle { channel, worker }
}
