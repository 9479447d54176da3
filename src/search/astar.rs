/*
 * Copyright (c) 2018, 2021 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! A* search on implicit graphs.
//!
//! The graph is given by a successor function returning the neighbours of a
//! node together with the (non-negative) cost of the step. Each node may be
//! assigned a heuristic value $h$ estimating the distance to the destination
//! node $t$. The heuristic must be consistent, i.e. $h(u) \le w(u,v) + h(v)$
//! for each step $(u,v)$, and $h(t) = 0$.
//!
//! The open list is a [`BinHeap`] ordered by $f = g + h$. Nodes with equal
//! $f$ are handled in the order in which they have been discovered. Nodes
//! that have been settled are never reopened.
//!
//! # Example
//!
//! ```
//! use rs_datastruct::search::astar;
//!
//! // a 5x5 grid graph where moving right costs 1 and moving up costs 2
//! let succ = |&(x, y): &(i32, i32)| {
//!     let mut next = vec![];
//!     if x < 4 {
//!         next.push(((x + 1, y), 1));
//!     }
//!     if y < 4 {
//!         next.push(((x, y + 1), 2));
//!     }
//!     next
//! };
//! let heur = |&(x, y): &(i32, i32)| (4 - x) + 2 * (4 - y);
//!
//! let (path, dist) = astar::find_path((0, 0), (4, 4), succ, heur).unwrap();
//! assert_eq!(dist, 12);
//! assert_eq!(path.len(), 9);
//! assert_eq!(path.first(), Some(&(0, 0)));
//! assert_eq!(path.last(), Some(&(4, 4)));
//! ```

use crate::collections::{BinHeap, ItemPriQueue};
use crate::search::{path_from_parents, PathNode};

use num_traits::Zero;

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Add;

/// The state of a node seen by the search.
enum Status {
    /// The node is in the open list.
    Open { item: usize, node: usize },
    /// The node has been settled.
    Closed { node: usize },
}

impl Status {
    fn node(&self) -> usize {
        match *self {
            Status::Open { node, .. } | Status::Closed { node } => node,
        }
    }
}

/// A* search iterator.
///
/// The iterator returns the settled nodes with their distance from the start
/// node in the order of the search. The start node is returned first.
pub struct AStar<N, D, S, H> {
    succ: S,
    heur: H,
    /// All nodes seen so far, the arena of the path tree.
    arena: Vec<PathNode<N, D>>,
    status: HashMap<N, Status>,
    /// The open list, keys are indices into `arena`.
    pqueue: BinHeap<usize, D>,
}

/// Start and return an A*-iterator.
///
/// # Parameter
/// - `src`: the node at which the search starts
/// - `succ`: returns the neighbours of a node with the costs of the steps
/// - `heur`: the heuristic estimate of the distance to the destination
pub fn start<N, D, S, I, H>(src: N, succ: S, heur: H) -> AStar<N, D, S, H>
where
    N: Clone + Eq + Hash,
    D: Copy + PartialOrd + Zero,
    S: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, D)>,
    H: Fn(&N) -> D,
{
    let mut pqueue = BinHeap::new();
    let root = PathNode::new(src.clone(), D::zero(), heur(&src), None);
    let item = pqueue.push(0, root.f);
    let mut status = HashMap::new();
    status.insert(src, Status::Open { item, node: 0 });
    AStar {
        succ,
        heur,
        arena: vec![root],
        status,
        pqueue,
    }
}

impl<N, D, S, I, H> Iterator for AStar<N, D, S, H>
where
    N: Clone + Eq + Hash,
    D: Copy + PartialOrd + Zero,
    S: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, D)>,
    H: Fn(&N) -> D,
{
    type Item = (N, D);

    fn next(&mut self) -> Option<(N, D)> {
        let (idx, _) = self.pqueue.pop_min()?;
        let (u, g) = {
            let pnode = &self.arena[idx];
            (pnode.node.clone(), pnode.g)
        };
        self.status.insert(u.clone(), Status::Closed { node: idx });

        for (v, w) in (self.succ)(&u) {
            let dist = g + w;
            match self.status.get_mut(&v) {
                Some(Status::Open { item, node }) => {
                    // node is known but unhandled
                    let vnode = &mut self.arena[*node];
                    if dist < vnode.g {
                        let h = (self.heur)(&v);
                        *vnode = PathNode::new(v, dist, h, Some(idx));
                        self.pqueue.decrease_key(item, vnode.f);
                    }
                }
                None => {
                    // node is unknown
                    let pnode = PathNode::new(v.clone(), dist, (self.heur)(&v), Some(idx));
                    let node = self.arena.len();
                    let item = self.pqueue.push(node, pnode.f);
                    self.arena.push(pnode);
                    self.status.insert(v, Status::Open { item, node });
                }
                Some(Status::Closed { .. }) => (), // node has been settled
            }
        }

        Some((u, g))
    }
}

impl<N, D, S, H> AStar<N, D, S, H>
where
    N: Clone + Eq + Hash,
{
    /// Return the path node of `u` if `u` has been seen.
    pub fn path_node(&self, u: &N) -> Option<&PathNode<N, D>> {
        self.status.get(u).map(|s| &self.arena[s.node()])
    }

    /// Return `true` if `u` has been settled.
    pub fn is_settled(&self, u: &N) -> bool {
        matches!(self.status.get(u), Some(Status::Closed { .. }))
    }

    /// Return the `n`-th ancestor of `u` on its current best path.
    ///
    /// For `n <= 1` this is the parent of `u`.
    pub fn back(&self, u: &N, n: usize) -> Option<&N> {
        let idx = self.status.get(u)?.node();
        path_from_parents(idx, |i| self.arena[i].parent)
            .nth(n.max(1))
            .map(|i| &self.arena[i].node)
    }

    /// Return the current best path from the start node to `u`.
    ///
    /// The path is final once `u` has been settled.
    pub fn path(&self, u: &N) -> Option<Vec<N>> {
        let idx = self.status.get(u)?.node();
        let mut path: Vec<N> = path_from_parents(idx, |i| self.arena[i].parent)
            .map(|i| self.arena[i].node.clone())
            .collect();
        path.reverse();
        Some(path)
    }

    /// Return the number of nodes in the open list.
    pub fn num_open(&self) -> usize
    where
        D: PartialOrd + Clone,
    {
        self.pqueue.len()
    }
}

/// Run an A*-search from `src` to `dst` and return the path.
///
/// The path contains both end nodes. The function returns the path and its
/// length or `None` if `dst` is not reachable from `src`.
pub fn find_path<N, D, S, I, H>(src: N, dst: N, succ: S, heur: H) -> Option<(Vec<N>, D)>
where
    N: Clone + Eq + Hash,
    D: Copy + PartialOrd + Zero,
    S: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, D)>,
    H: Fn(&N) -> D,
{
    let mut search = start(src, succ, heur);
    while let Some((u, d)) = search.next() {
        if u == dst {
            return search.path(&u).map(|path| (path, d));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{find_path, start};

    use std::collections::HashMap;

    fn graph() -> HashMap<char, Vec<(char, u32)>> {
        // s -1- a -1- b -1- t
        //  \               /
        //   ------ 4 -----
        // c is not reachable
        let mut g = HashMap::new();
        g.insert('s', vec![('a', 1), ('t', 4)]);
        g.insert('a', vec![('b', 1)]);
        g.insert('b', vec![('t', 1)]);
        g.insert('c', vec![('s', 1)]);
        g
    }

    #[test]
    fn test_find_path() {
        let g = graph();
        let succ = |u: &char| g.get(u).cloned().unwrap_or_default();
        let (path, dist) = find_path('s', 't', succ, |_| 0).unwrap();
        assert_eq!(path, vec!['s', 'a', 'b', 't']);
        assert_eq!(dist, 3);
    }

    #[test]
    fn test_unreachable() {
        let g = graph();
        let succ = |u: &char| g.get(u).cloned().unwrap_or_default();
        assert_eq!(find_path('s', 'c', succ, |_| 0), None);
    }

    #[test]
    fn test_trivial() {
        let succ = |_: &u8| Vec::<(u8, u32)>::new();
        assert_eq!(find_path(7, 7, succ, |_| 0), Some((vec![7], 0)));
    }

    #[test]
    fn test_decrease_key() {
        let g = graph();
        let succ = |u: &char| g.get(u).cloned().unwrap_or_default();
        let mut search = start('s', succ, |_| 0);

        assert_eq!(search.next(), Some(('s', 0)));
        // t has been reached by the direct edge
        assert_eq!(search.path(&'t'), Some(vec!['s', 't']));
        assert_eq!(search.path_node(&'t').map(|p| p.g), Some(4));
        assert_eq!(search.num_open(), 2);

        assert_eq!(search.next(), Some(('a', 1)));
        assert_eq!(search.next(), Some(('b', 2)));
        assert_eq!(search.path_node(&'t').map(|p| p.g), Some(3));
        assert!(!search.is_settled(&'t'));
        assert_eq!(search.back(&'t', 0), Some(&'b'));
        assert_eq!(search.back(&'t', 2), Some(&'a'));
        assert_eq!(search.back(&'t', 3), Some(&'s'));
        assert_eq!(search.back(&'t', 4), None);

        assert_eq!(search.next(), Some(('t', 3)));
        assert!(search.is_settled(&'t'));
        assert_eq!(search.next(), None);
    }

    #[test]
    fn test_heuristic_guides_search() {
        // a line 0 - 1 - ... - 9 where the goal is 9
        let succ = |&u: &i32| {
            let mut next = vec![];
            if u > 0 {
                next.push((u - 1, 1));
            }
            if u < 9 {
                next.push((u + 1, 1));
            }
            next
        };
        let settled: Vec<i32> = start(5, succ, |&u| 9 - u).map(|(u, _)| u).take_while(|&u| u != 9).collect();
        assert_eq!(settled, vec![5, 6, 7, 8]);
    }
}
