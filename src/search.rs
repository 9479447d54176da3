/*
 * Copyright (c) 2019 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! # Path-finding.
//!
//! This module contains two A* searches:
//!
//! - [`astar`] searches an implicit graph given by a successor function and
//!   keeps its open list in a [`BinHeap`](crate::collections::BinHeap),
//! - [`grid`] searches a grid of cells with uniform step costs.
//!
//! Success is reported by returning the path, a search that exhausts its open
//! list returns `None`.

pub mod astar;
pub mod grid;

use std::ops::Add;

/// Compute a path from the parent of each node.
///
/// # Parameters
/// - `dst`: the destination node
/// - `parent(v)`: return the predecessor of node `v` on the path (or `None`
///   if `v` is the first node)
///
/// # Return
/// An iterator over the nodes of the path starting at `dst`.
///
/// # Example
///
/// ```
/// use rs_datastruct::search::path_from_parents;
/// use std::collections::HashMap;
///
/// let parents: HashMap<_, _> = vec![('b', 'a'), ('c', 'b'), ('d', 'b')].into_iter().collect();
///
/// let path: String = path_from_parents('d', |u| parents.get(&u).cloned()).collect();
/// assert_eq!(path, "dba");
/// ```
pub fn path_from_parents<N, P>(dst: N, parents: P) -> impl Iterator<Item = N>
where
    N: Clone,
    P: Fn(N) -> Option<N>,
{
    PathIter { parents, u: Some(dst) }
}

#[doc(hidden)]
struct PathIter<N, P>
where
    P: Fn(N) -> Option<N>,
{
    parents: P,
    u: Option<N>,
}

impl<N, P> Iterator for PathIter<N, P>
where
    N: Clone,
    P: Fn(N) -> Option<N>,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let u = self.u.take()?;
        self.u = (self.parents)(u.clone());
        Some(u)
    }
}

/// A scored node of an A* search.
///
/// `g` is the length of the best known path from the start node, `f = g + h`
/// adds the heuristic estimate of the remaining distance. `parent` is the
/// index of the predecessor in the search arena.
#[derive(Clone, Debug, PartialEq)]
pub struct PathNode<N, D> {
    pub node: N,
    pub f: D,
    pub g: D,
    pub parent: Option<usize>,
}

impl<N, D> PathNode<N, D>
where
    D: Copy + Add<D, Output = D>,
{
    pub fn new(node: N, g: D, h: D, parent: Option<usize>) -> Self {
        PathNode {
            node,
            f: g + h,
            g,
            parent,
        }
    }
}

impl<N, D> PathNode<N, D>
where
    D: PartialOrd,
{
    /// Return `true` if this node is estimated to be at most as far from the
    /// destination as `other`.
    pub fn is_closer(&self, other: &Self) -> bool {
        self.f <= other.f
    }
}

#[cfg(test)]
mod tests {
    use super::{path_from_parents, PathNode};

    #[test]
    fn test_path_single() {
        let path: Vec<_> = path_from_parents(3, |_| None).collect();
        assert_eq!(path, vec![3]);
    }

    #[test]
    fn test_path_chain() {
        let path: Vec<usize> = path_from_parents(4, |u| if u > 0 { Some(u - 1) } else { None }).collect();
        assert_eq!(path, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_path_node() {
        let a = PathNode::new('a', 2, 3, None);
        let b = PathNode::new('b', 4, 1, Some(0));
        assert_eq!(a.f, 5);
        assert!(a.is_closer(&b));
        assert!(b.is_closer(&a));
        assert!(!PathNode::new('c', 5, 1, None).is_closer(&a));
    }
}
