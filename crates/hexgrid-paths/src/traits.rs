use std::hash::Hash;

/// Minimal search interface — state enumeration with weighted edges.
pub trait StateSpace {
    /// The search state. Must be cheap to copy and usable as a map key.
    type State: Copy + Eq + Hash;

    /// Append the successors of `s` into `buf` as `(state, edge cost)`
    /// pairs. The caller clears `buf` before calling. Edge costs must be
    /// non-negative.
    fn neighbors(&self, s: Self::State, buf: &mut Vec<(Self::State, i32)>);
}

/// A [`StateSpace`] with the goal test and heuristic required by A*.
pub trait AstarSpace: StateSpace {
    /// Estimated remaining cost from `s` to the nearest goal. Must be
    /// non-negative and never overestimate (admissible); must additionally
    /// be consistent for the returned path to be guaranteed optimal.
    fn heuristic(&self, s: Self::State) -> i32;

    /// Whether `s` satisfies the search.
    fn is_goal(&self, s: Self::State) -> bool;
}
