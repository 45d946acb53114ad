/// This module implements a variant of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
/// that keeps an explicit closed set and stops as soon as the goal is generated as a successor.
/// Its node map and frontier live in a [SearchContext] so that allocations are reused between
/// queries.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;
use std::hash::Hash;

use crate::frontier::{Frontier, HeapFrontier};
use crate::NO_PREDECESSOR;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Search scratch state of one discovered node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode<C> {
    /// Index of the node the best known path arrives from, [NO_PREDECESSOR] for the start.
    pub predecessor: usize,
    pub cost_from_start: C,
    pub closed: bool,
}

fn reverse_path<N, V, F>(nodes: &FxIndexMap<N, V>, mut predecessor: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        nodes.get_index(*i).map(|(node, value)| {
            *i = predecessor(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

pub struct SearchContext<N, C, F = HeapFrontier<C>> {
    pub nodes: FxIndexMap<N, SearchNode<C>>,
    pub frontier: F,
    /// Number of nodes closed by the most recent search.
    pub expanded: usize,
}

impl<N, C, F> SearchContext<N, C, F>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    F: Frontier<C> + Default,
{
    pub fn new() -> Self {
        SearchContext {
            nodes: FxIndexMap::default(),
            frontier: F::default(),
            expanded: 0,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.frontier.clear();
        self.expanded = 0;
    }

    /// Scratch state of `node` left behind by the most recent search.
    pub fn node(&self, node: &N) -> Option<&SearchNode<C>> {
        self.nodes.get(node)
    }

    /// Best-first search from `start` until `success` holds for a node.
    ///
    /// A node satisfying `success` ends the search as soon as it is generated as a successor,
    /// before the remaining successors are relaxed. This returns an optimal path whenever
    /// `heuristic` is consistent and equals the move cost for nodes adjacent to the goal, which
    /// holds when the heuristic is the step cost metric itself.
    pub fn astar<FN, IN, FH, FS>(
        &mut self,
        start: &N,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
    ) -> Option<(Vec<N>, C)>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        self.clear();
        self.nodes.insert(
            start.clone(),
            SearchNode {
                predecessor: NO_PREDECESSOR,
                cost_from_start: Zero::zero(),
                closed: false,
            },
        );
        self.frontier.push(0, heuristic(start), Zero::zero());

        let mut found: Option<usize> = None;
        'search: while let Some((index, cost)) = self.frontier.pop() {
            let successors = {
                let (node, entry) = match self.nodes.get_index(index) {
                    Some(pair) => pair,
                    None => continue,
                };
                // A node may sit in the frontier several times after its cost was lowered, only
                // the entry matching its current cost is live.
                if entry.closed || cost > entry.cost_from_start {
                    continue;
                }
                if success(node) {
                    found = Some(index);
                    break 'search;
                }
                successors(node)
            };
            for (successor, move_cost) in successors {
                let new_cost = cost + move_cost;
                let is_goal = success(&successor);
                match self.nodes.entry(successor) {
                    Vacant(e) => {
                        let h = heuristic(e.key());
                        let n = e.index();
                        e.insert(SearchNode {
                            predecessor: index,
                            cost_from_start: new_cost,
                            closed: false,
                        });
                        if is_goal {
                            found = Some(n);
                            break 'search;
                        }
                        self.frontier.push(n, new_cost + h, new_cost);
                    }
                    Occupied(mut e) => {
                        if e.get().closed {
                            continue;
                        }
                        let n = e.index();
                        if e.get().cost_from_start > new_cost {
                            let h = heuristic(e.key());
                            let node = e.get_mut();
                            node.predecessor = index;
                            node.cost_from_start = new_cost;
                            if !is_goal {
                                self.frontier.decrease_key(n, new_cost + h, new_cost);
                            }
                        }
                        if is_goal {
                            found = Some(n);
                            break 'search;
                        }
                    }
                }
            }
            if let Some(entry) = self.nodes.get_index_mut(index).map(|(_, v)| v) {
                entry.closed = true;
            }
            self.expanded += 1;
        }

        debug!(
            "Search finished after expanding {} of {} discovered nodes",
            self.expanded,
            self.nodes.len()
        );
        let goal = found?;
        let cost = self.nodes.get_index(goal)?.1.cost_from_start;
        let path = reverse_path(&self.nodes, |node| node.predecessor, goal);
        Some((path, cost))
    }
}

impl<N, C, F> Default for SearchContext<N, C, F>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    F: Frontier<C> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}
