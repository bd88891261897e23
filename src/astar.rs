//! This module implements an arena-backed variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html).
//! Nodes live in an index map keyed by node, so a node id is its insertion index and each entry
//! stores the id of its parent together with the best cost found so far.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

const NO_PARENT: usize = usize::MAX;

struct SmallestCostHolder<K, N> {
    estimated_cost: K,
    cost: K,
    node: N,
    index: usize,
}

impl<K: Ord, N: Ord> Eq for SmallestCostHolder<K, N> {}

impl<K: Ord, N: Ord> PartialEq for SmallestCostHolder<K, N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord, N: Ord> PartialOrd for SmallestCostHolder<K, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, N: Ord> Ord for SmallestCostHolder<K, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first, then the largest cost so far (deepest node), then the
        // smallest node. The heap order never depends on insertion order.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// The nodes discovered by a successful [astar] call, with parent links leading from the goal
/// back to the start.
#[derive(Clone, Debug)]
pub struct SearchTree<N, C> {
    nodes: FxIndexMap<N, (usize, C)>,
    goal: usize,
    expanded: usize,
}

impl<N, C> SearchTree<N, C>
where
    N: Eq + Hash + Clone,
    C: Copy,
{
    /// Cost of the path to the goal.
    pub fn cost(&self) -> C {
        self.nodes.get_index(self.goal).map(|(_, &(_, c))| c).unwrap()
    }

    /// Number of nodes removed from the frontier and expanded, the goal included.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn goal(&self) -> &N {
        self.node(self.goal)
    }

    fn node(&self, index: usize) -> &N {
        self.nodes.get_index(index).map(|(n, _)| n).unwrap()
    }

    fn parent(&self, index: usize) -> Option<usize> {
        self.nodes
            .get_index(index)
            .map(|(_, &(p, _))| p)
            .filter(|&p| p != NO_PARENT)
    }

    /// The second node of the path, i.e. the one whose parent is the start. [None] if the goal
    /// is the start itself.
    pub fn first_step(&self) -> Option<&N> {
        let mut current = self.goal;
        let mut parent = self.parent(current)?;
        while let Some(grandparent) = self.parent(parent) {
            current = parent;
            parent = grandparent;
        }
        Some(self.node(current))
    }

    /// The full path from start to goal.
    pub fn path(&self) -> Vec<N> {
        let mut path: Vec<N> = std::iter::successors(Some(self.goal), |&ix| self.parent(ix))
            .map(|ix| self.node(ix).clone())
            .collect();
        path.reverse();
        path
    }
}

/// Best-first search from `start` until `success` holds for an expanded node. Successors that
/// were already expanded, or that are open with an equal or better cost, are discarded.
/// Returns [None] once the frontier is exhausted.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<SearchTree<N, C>>
where
    N: Eq + Hash + Ord + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        node: start.clone(),
        index: 0,
    });
    let mut nodes: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    nodes.insert(start.clone(), (NO_PARENT, Zero::zero()));
    let mut closed: FxHashSet<usize> = FxHashSet::default();

    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let (node, &(_, c)) = nodes.get_index(index).unwrap();
            // A node may sit in the heap several times if a cheaper route to it was found
            // later. Only its cheapest entry is expanded.
            if closed.contains(&index) || cost > c {
                continue;
            }
            closed.insert(index);
            if success(node) {
                debug!("Search reached its goal after {} expansions", closed.len());
                return Some(SearchTree {
                    nodes,
                    goal: index,
                    expanded: closed.len(),
                });
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h;
            let n;
            match nodes.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if closed.contains(&e.index()) || e.get().1 <= new_cost {
                        continue;
                    }
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                node: nodes.get_index(n).unwrap().0.clone(),
                index: n,
            });
        }
    }
    debug!("Frontier exhausted after {} expansions", closed.len());
    None
}
