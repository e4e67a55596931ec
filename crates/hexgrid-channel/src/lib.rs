//! **hexgrid-channel** — a bounded FIFO channel with two closable ends.
//!
//! [`Channel`] carries items from producers to consumers across threads.
//! Unlike `std::sync::mpsc`, *both* ends can be closed independently:
//!
//! - [`close_front`](Channel::close_front) is the **consumer's** signal that
//!   nothing further will be consumed — every subsequent push fails.
//! - [`close_back`](Channel::close_back) is the **producer's** signal that
//!   nothing further will be produced — once the queue drains, pops report
//!   end of stream.
//!
//! A full channel reacts to a push according to its [`OverflowPolicy`].
//! Closure is a normal termination signal on both sides, never an error.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};

// ---------------------------------------------------------------------------
// OverflowPolicy
// ---------------------------------------------------------------------------

/// What a push does when the queue already holds `capacity` items.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Suspend the pusher until space frees up or the front closes.
    Block,
    /// Discard the incoming item. The push still reports success: the item
    /// was delivered to a full buffer and dropped by policy, not refused.
    DropNewest,
    /// Evict the oldest queued item to admit the new one.
    DropOldest,
    /// Never full; the queue grows without bound.
    #[default]
    NeverFull,
}

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

/// A thread-safe FIFO queue with independently closable ends.
///
/// Safe for concurrent pushes and pops from independent threads. Item
/// ownership transfers exactly once: a popped item leaves the queue
/// atomically with the pop, and no item is dropped silently except under
/// the [`DropNewest`](OverflowPolicy::DropNewest) /
/// [`DropOldest`](OverflowPolicy::DropOldest) policies.
#[derive(Debug)]
pub struct Channel<T> {
    queue: Mutex<VecDeque<T>>,
    /// Signaled when space frees up, or when the front closes.
    not_full: Condvar,
    /// Signaled when an item arrives, or when the back closes.
    not_empty: Condvar,
    front_closed: AtomicBool,
    back_closed: AtomicBool,
    policy: OverflowPolicy,
    capacity: usize,
}

impl<T> Channel<T> {
    /// Create a channel with the given policy and capacity.
    ///
    /// `capacity` is ignored under [`OverflowPolicy::NeverFull`].
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero under any bounded policy.
    pub fn new(policy: OverflowPolicy, capacity: usize) -> Self {
        if policy != OverflowPolicy::NeverFull {
            assert!(capacity > 0, "bounded channel needs a nonzero capacity");
        }
        Self {
            queue: Mutex::new(VecDeque::new()),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            front_closed: AtomicBool::new(false),
            back_closed: AtomicBool::new(false),
            policy,
            capacity,
        }
    }

    /// Create an unbounded channel.
    pub fn unbounded() -> Self {
        Self::new(OverflowPolicy::NeverFull, 0)
    }

    /// Whether the consumer has closed the front.
    #[inline]
    pub fn is_front_closed(&self) -> bool {
        self.front_closed.load(Ordering::Acquire)
    }

    /// Whether the producer has closed the back.
    #[inline]
    pub fn is_back_closed(&self) -> bool {
        self.back_closed.load(Ordering::Acquire)
    }

    /// Number of items currently queued.
    pub fn len(&self) -> usize {
        self.queue.lock().unwrap().len()
    }

    /// Whether the queue is currently empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Close the front (consumer side). All pushes fail from now on;
    /// pushers blocked on a full queue wake up and fail. Idempotent.
    pub fn close_front(&self) {
        let _guard = self.queue.lock().unwrap();
        self.front_closed.store(true, Ordering::Release);
        self.not_full.notify_all();
    }

    /// Close the back (producer side). Once the queue drains, pops report
    /// end of stream; poppers blocked on an empty queue wake up. Idempotent.
    pub fn close_back(&self) {
        let _guard = self.queue.lock().unwrap();
        self.back_closed.store(true, Ordering::Release);
        self.not_empty.notify_all();
    }

    /// Put an item into the channel.
    ///
    /// Returns `true` when the item was accepted — including a
    /// [`DropNewest`](OverflowPolicy::DropNewest) discard, which counts as
    /// delivery to a full buffer. Returns `false` when the front is closed
    /// (before or while waiting for space), or when the back is already
    /// closed — pushing after closing one's own end is a producer bug and
    /// fails immediately rather than silently succeeding.
    ///
    /// Under [`OverflowPolicy::Block`] this call suspends while the queue
    /// is full and the front is open.
    pub fn push(&self, item: T) -> bool {
        if self.is_back_closed() {
            return false;
        }

        let mut queue = self.queue.lock().unwrap();
        if self.is_front_closed() {
            return false;
        }

        match self.policy {
            OverflowPolicy::NeverFull => {
                queue.push_back(item);
                self.not_empty.notify_one();
            }
            OverflowPolicy::Block => {
                queue = self
                    .not_full
                    .wait_while(queue, |q| {
                        !self.is_front_closed() && q.len() >= self.capacity
                    })
                    .unwrap();
                if self.is_front_closed() {
                    return false;
                }
                queue.push_back(item);
                self.not_empty.notify_one();
            }
            OverflowPolicy::DropNewest => {
                if queue.len() < self.capacity {
                    queue.push_back(item);
                    self.not_empty.notify_one();
                }
                // else: full — the item is dropped by policy.
            }
            OverflowPolicy::DropOldest => {
                if queue.len() >= self.capacity {
                    queue.pop_front();
                }
                queue.push_back(item);
                self.not_empty.notify_one();
            }
        }
        true
    }

    /// Take the oldest item out of the channel.
    ///
    /// Returns `None` only when the queue is empty *and* the back is
    /// closed — the permanent end-of-stream signal. While the back is open
    /// this call suspends on an empty queue until an item arrives or the
    /// back closes. A successful pop wakes one blocked pusher.
    pub fn pop(&self) -> Option<T> {
        let mut queue = self.queue.lock().unwrap();
        queue = self
            .not_empty
            .wait_while(queue, |q| q.is_empty() && !self.is_back_closed())
            .unwrap();

        match queue.pop_front() {
            Some(item) => {
                self.not_full.notify_one();
                Some(item)
            }
            // Still empty after the wait: the back closed for good.
            None => None,
        }
    }
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}
