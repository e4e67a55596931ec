use std::collections::{BinaryHeap, HashMap};

use crate::traits::AstarSpace;

/// Frontier entry. Ordered by `f`, then by `g`, so that the heap yields the
/// entry with the smallest `f` and — among equal `f` — the largest `g`
/// (i.e. the smallest remaining estimate). Comparisons look only at the
/// keys; the states play no part.
struct Item<S> {
    state: S,
    parent: S,
    g: i32,
    f: i32,
}

impl<S> PartialEq for Item<S> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.g == other.g
    }
}

impl<S> Eq for Item<S> {}

impl<S> PartialOrd for Item<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Item<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse on f so the max-heap pops the smallest f first; forward
        // on g so equal-f ties go to the entry closer to a goal.
        other.f.cmp(&self.f).then_with(|| self.g.cmp(&other.g))
    }
}

/// Multi-source A* over an [`AstarSpace`].
///
/// Seeds the frontier with every state in `starts` (each its own parent, at
/// cost zero) and expands best-first until a goal state is finalized or the
/// frontier empties. `visit` is invoked exactly once per finalized state,
/// as `(state, parent)`, in nondecreasing `f` order and before that state's
/// neighbors are enumerated.
///
/// Returns the states of a cheapest path from one of the starts to the
/// finalized goal, in start → goal order, or an empty vector if no goal is
/// reachable. With a consistent heuristic the returned path is optimal;
/// the first finalization of a state is taken as definitive, so states are
/// never reopened.
pub fn astar<S: AstarSpace>(
    space: &S,
    starts: &[S::State],
    mut visit: impl FnMut(S::State, S::State),
) -> Vec<S::State> {
    let mut open: BinaryHeap<Item<S::State>> = BinaryHeap::new();
    for &s in starts {
        open.push(Item {
            state: s,
            parent: s,
            g: 0,
            f: space.heuristic(s),
        });
    }

    // state → the parent it was finalized from.
    let mut closed: HashMap<S::State, S::State> = HashMap::new();
    let mut nbuf: Vec<(S::State, i32)> = Vec::new();
    let mut goal = None;

    while let Some(item) = open.pop() {
        // Duplicate frontier entries per state are allowed; only the first
        // pop of a state is honored.
        if closed.contains_key(&item.state) {
            continue;
        }
        closed.insert(item.state, item.parent);
        visit(item.state, item.parent);

        if space.is_goal(item.state) {
            goal = Some(item.state);
            break;
        }

        nbuf.clear();
        space.neighbors(item.state, &mut nbuf);
        for &(n, cost) in &nbuf {
            if closed.contains_key(&n) {
                continue;
            }
            let g = item.g + cost;
            open.push(Item {
                state: n,
                parent: item.state,
                g,
                f: g + space.heuristic(n),
            });
        }
    }

    let mut path = Vec::new();
    if let Some(goal) = goal {
        // Walk the parent chain back to a self-parented start state.
        let mut cur = goal;
        let mut parent = closed[&cur];
        path.push(cur);
        while cur != parent {
            cur = parent;
            parent = closed[&cur];
            path.push(cur);
        }
        path.reverse();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::StateSpace;

    /// Integers `[min, max]` linked in a line, unit edges, exact heuristic.
    struct Line {
        min: i32,
        max: i32,
        goal: i32,
    }

    impl StateSpace for Line {
        type State = i32;
        fn neighbors(&self, s: i32, buf: &mut Vec<(i32, i32)>) {
            for n in [s - 1, s + 1] {
                if n >= self.min && n <= self.max {
                    buf.push((n, 1));
                }
            }
        }
    }

    impl AstarSpace for Line {
        fn heuristic(&self, s: i32) -> i32 {
            (self.goal - s).abs()
        }
        fn is_goal(&self, s: i32) -> bool {
            s == self.goal
        }
    }

    /// Two routes from 'a' to 'd' with equal total cost but different
    /// intermediate g values.
    struct Diamond;

    impl StateSpace for Diamond {
        type State = char;
        fn neighbors(&self, s: char, buf: &mut Vec<(char, i32)>) {
            match s {
                'a' => buf.extend([('b', 1), ('c', 2)]),
                'b' => buf.push(('d', 2)),
                'c' => buf.push(('d', 1)),
                _ => {}
            }
        }
    }

    impl AstarSpace for Diamond {
        fn heuristic(&self, s: char) -> i32 {
            match s {
                'a' => 3,
                'b' => 2,
                'c' => 1,
                _ => 0,
            }
        }
        fn is_goal(&self, s: char) -> bool {
            s == 'd'
        }
    }

    #[test]
    fn straight_line_path() {
        let space = Line {
            min: -10,
            max: 10,
            goal: 5,
        };
        let path = astar(&space, &[0], |_, _| {});
        assert_eq!(path, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn exact_heuristic_expands_only_the_path() {
        let space = Line {
            min: -10,
            max: 10,
            goal: 4,
        };
        let mut visited = Vec::new();
        astar(&space, &[0], |s, _| visited.push(s));
        assert_eq!(visited, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn start_is_goal() {
        let space = Line {
            min: 0,
            max: 10,
            goal: 7,
        };
        let mut visits = 0;
        let path = astar(&space, &[7], |s, p| {
            visits += 1;
            assert_eq!(s, p);
        });
        assert_eq!(path, vec![7]);
        assert_eq!(visits, 1);
    }

    #[test]
    fn unreachable_goal_yields_empty_path() {
        let space = Line {
            min: 0,
            max: 3,
            goal: 9,
        };
        let mut visited = Vec::new();
        let path = astar(&space, &[0], |s, _| visited.push(s));
        assert!(path.is_empty());
        // The whole reachable component was exhausted.
        assert_eq!(visited.len(), 4);
    }

    #[test]
    fn no_starts_yields_empty_path() {
        let space = Line {
            min: 0,
            max: 3,
            goal: 2,
        };
        let path = astar(&space, &[], |_, _| {});
        assert!(path.is_empty());
    }

    #[test]
    fn multi_source_reaches_goal_from_nearest_start() {
        let space = Line {
            min: 0,
            max: 10,
            goal: 5,
        };
        let path = astar(&space, &[0, 8], |_, _| {});
        assert_eq!(path, vec![8, 7, 6, 5]);
    }

    #[test]
    fn equal_f_ties_prefer_larger_g() {
        // f('b') == f('c') == 3 after expanding 'a'; 'c' carries the larger
        // g and must be finalized first, and 'd' (g = 3) then outranks 'b'
        // (g = 1) at f == 3, so 'b' is never expanded at all.
        let mut visited = Vec::new();
        let path = astar(&Diamond, &['a'], |s, _| visited.push(s));
        assert_eq!(visited, vec!['a', 'c', 'd']);
        assert_eq!(path, vec!['a', 'c', 'd']);
    }

    #[test]
    fn visit_receives_finalized_parent() {
        let space = Line {
            min: 0,
            max: 10,
            goal: 3,
        };
        let mut pairs = Vec::new();
        astar(&space, &[0], |s, p| pairs.push((s, p)));
        assert_eq!(pairs, vec![(0, 0), (1, 0), (2, 1), (3, 2)]);
    }

    #[test]
    fn each_state_finalized_once() {
        // Zero heuristic degrades to Dijkstra and floods the line with
        // duplicate frontier entries; every state must still be visited
        // exactly once.
        struct Flat;
        impl StateSpace for Flat {
            type State = i32;
            fn neighbors(&self, s: i32, buf: &mut Vec<(i32, i32)>) {
                for n in [s - 1, s + 1] {
                    if (0..=6).contains(&n) {
                        buf.push((n, 1));
                    }
                }
            }
        }
        impl AstarSpace for Flat {
            fn heuristic(&self, _: i32) -> i32 {
                0
            }
            fn is_goal(&self, s: i32) -> bool {
                s == 6
            }
        }
        let mut counts = std::collections::HashMap::new();
        astar(&Flat, &[0, 2], |s, _| *counts.entry(s).or_insert(0) += 1);
        assert!(counts.values().all(|&n| n == 1));
    }
}
