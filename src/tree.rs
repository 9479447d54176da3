/*
 * Copyright (c) 2019, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! # Trees.
//!
//! This module contains a binary tree ([`TreeNode`]) and an N-ary tree
//! ([`NTreeNode`]). Both implement the [`Tree`] trait, which provides the
//! searches and traversals that only depend on the ordered list of children
//! of a node.
//!
//! The searches use an explicit frontier. The frontier can be any
//! [`ItemStack`] (depth-first) or [`ItemQueue`] (breadth-first), so the
//! data structures can be reused for multiple searches.
//!
//! # Example
//!
//! ```
//! use rs_datastruct::tree::{Lookup, Strategy, Tree, TreeNode};
//!
//! let tree = TreeNode::with_children(5, Some(TreeNode::new(3)), Some(TreeNode::new(8)));
//!
//! assert_eq!(tree.get_in_order(","), "3,5,8");
//! assert_eq!(tree.find(&8, Strategy::BreadthFirst), Lookup::Found { depth: 1, steps: 2 });
//! assert_eq!(tree.find(&8, Strategy::DepthFirst), Lookup::Found { depth: 1, steps: 1 });
//! assert!(!tree.dfs(&42).is_found());
//! ```

mod binary;
mod nary;

pub use self::binary::TreeNode;
pub use self::nary::NTreeNode;

use crate::collections::{ItemQueue, ItemStack};
use crate::error::Result;

use either::Either;

use std::collections::VecDeque;
use std::fmt;

/// Outcome of a tree search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// The payload has been found.
    ///
    /// `depth` is the distance of the matching node from the root, `steps`
    /// the number of nodes examined before the match.
    Found { depth: usize, steps: usize },
    /// The payload is not contained; `steps` is the number of nodes examined.
    NotFound { steps: usize },
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found { .. })
    }

    /// Return the depth of the matching node.
    pub fn depth(&self) -> Option<usize> {
        match *self {
            Lookup::Found { depth, .. } => Some(depth),
            Lookup::NotFound { .. } => None,
        }
    }

    pub fn steps(&self) -> usize {
        match *self {
            Lookup::Found { steps, .. } | Lookup::NotFound { steps } => steps,
        }
    }
}

/// The order in which [`Tree::find`] visits the nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::DepthFirst
    }
}

/// A rooted tree with ordered children.
pub trait Tree {
    type Payload;

    /// Return the payload of this node.
    fn payload(&self) -> &Self::Payload;

    /// Return the children of this node from left to right.
    fn children(&self) -> Vec<&Self>;

    /// Return `true` if this node has no children.
    fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Return the number of nodes in the subtree.
    fn len(&self) -> usize {
        let mut n = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            n += 1;
            stack.extend(node.children());
        }
        n
    }

    /// Return the number of edges in the subtree.
    fn nb_of_branches(&self) -> usize {
        self.len() - 1
    }

    /// Depth-first search for `target` with a user defined stack.
    ///
    /// The children of a node are pushed from left to right, hence the
    /// rightmost child is examined first. The stack is cleared before the
    /// search starts.
    ///
    /// An error is only returned if the stack overflows.
    fn dfs_with_data<'a, S>(&'a self, target: &Self::Payload, mut stack: S) -> Result<Lookup>
    where
        S: ItemStack<(&'a Self, usize)>,
        Self::Payload: PartialEq,
    {
        stack.clear();
        stack.push((self, 0))?;
        let mut steps = 0;
        while !stack.is_empty() {
            let (node, depth) = stack.pop()?;
            if node.payload() == target {
                return Ok(Lookup::Found { depth, steps });
            }
            steps += 1;
            for child in node.children() {
                stack.push((child, depth + 1))?;
            }
        }
        Ok(Lookup::NotFound { steps })
    }

    /// Breadth-first search for `target` with a user defined queue.
    ///
    /// The children of a node are enqueued from left to right. The queue is
    /// cleared before the search starts.
    ///
    /// An error is only returned if the queue overflows.
    fn bfs_with_data<'a, Q>(&'a self, target: &Self::Payload, mut queue: Q) -> Result<Lookup>
    where
        Q: ItemQueue<(&'a Self, usize)>,
        Self::Payload: PartialEq,
    {
        queue.clear();
        queue.enqueue((self, 0))?;
        let mut steps = 0;
        while !queue.is_empty() {
            let (node, depth) = queue.dequeue()?;
            if node.payload() == target {
                return Ok(Lookup::Found { depth, steps });
            }
            steps += 1;
            for child in node.children() {
                queue.enqueue((child, depth + 1))?;
            }
        }
        Ok(Lookup::NotFound { steps })
    }

    /// Depth-first search for `target`.
    fn dfs(&self, target: &Self::Payload) -> Lookup
    where
        Self::Payload: PartialEq,
    {
        self.dfs_with_data(target, Vec::<(&Self, usize)>::new())
            .unwrap_or_else(|_| unreachable!("unbounded stack"))
    }

    /// Breadth-first search for `target`.
    fn bfs(&self, target: &Self::Payload) -> Lookup
    where
        Self::Payload: PartialEq,
    {
        self.bfs_with_data(target, VecDeque::<(&Self, usize)>::new())
            .unwrap_or_else(|_| unreachable!("unbounded queue"))
    }

    /// Search for `target` with the given strategy.
    fn find(&self, target: &Self::Payload, strategy: Strategy) -> Lookup
    where
        Self::Payload: PartialEq,
    {
        match strategy {
            Strategy::DepthFirst => self.dfs(target),
            Strategy::BreadthFirst => self.bfs(target),
        }
    }

    /// Return the payloads in pre-order (node before its children).
    fn pre_order(&self) -> Vec<&Self::Payload> {
        let mut order = vec![];
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            order.push(node.payload());
            stack.extend(node.children().into_iter().rev());
        }
        order
    }

    /// Return the payloads in post-order (children before their node).
    fn post_order(&self) -> Vec<&Self::Payload> {
        // node, then children right to left; reversed at the end
        let mut order = vec![];
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            order.push(node.payload());
            stack.extend(node.children());
        }
        order.reverse();
        order
    }

    /// Return the payloads level by level, each level from left to right.
    fn bfs_order(&self) -> Vec<&Self::Payload> {
        let mut order = vec![];
        let mut queue = VecDeque::new();
        queue.push_back(self);
        while let Some(node) = queue.pop_front() {
            order.push(node.payload());
            queue.extend(node.children());
        }
        order
    }

    fn get_pre_order(&self, sep: &str) -> String
    where
        Self::Payload: fmt::Display,
    {
        join(self.pre_order(), sep)
    }

    fn get_post_order(&self, sep: &str) -> String
    where
        Self::Payload: fmt::Display,
    {
        join(self.post_order(), sep)
    }

    fn get_bfs_order(&self, sep: &str) -> String
    where
        Self::Payload: fmt::Display,
    {
        join(self.bfs_order(), sep)
    }
}

/// Join the payloads with a separator.
pub(crate) fn join<'a, T, I>(items: I, sep: &str) -> String
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(|x| x.to_string()).collect::<Vec<_>>().join(sep)
}

/// Nested array representation of a tree.
///
/// Each entry is either a payload or the array of a subtree.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeArray<T>(pub Vec<Either<T, TreeArray<T>>>);

impl<T> TreeArray<T> {
    /// Return all payloads in the order of appearance.
    pub fn flatten(&self) -> Vec<&T> {
        let mut flat = vec![];
        for entry in &self.0 {
            match entry {
                Either::Left(x) => flat.push(x),
                Either::Right(sub) => flat.extend(sub.flatten()),
            }
        }
        flat
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> fmt::Display for TreeArray<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            match entry {
                Either::Left(x) => write!(f, "{}", x)?,
                Either::Right(sub) => write!(f, "{}", sub)?,
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::{Lookup, Strategy, Tree, TreeNode};
    use crate::collections::{QueueArray, StackArray};
    use crate::error::{Container, Error};

    fn sample() -> TreeNode<i32> {
        //        1
        //      /   \
        //     2     3
        //    / \     \
        //   4   5     6
        TreeNode::with_children(
            1,
            Some(TreeNode::with_children(2, Some(TreeNode::new(4)), Some(TreeNode::new(5)))),
            Some(TreeNode::with_children(3, None, Some(TreeNode::new(6)))),
        )
    }

    #[test]
    fn test_depths() {
        let tree = sample();
        for &(x, depth) in &[(1, 0), (2, 1), (3, 1), (4, 2), (5, 2), (6, 2)] {
            assert_eq!(tree.dfs(&x).depth(), Some(depth));
            assert_eq!(tree.bfs(&x).depth(), Some(depth));
        }
    }

    #[test]
    fn test_steps() {
        let tree = sample();
        // dfs visits 1 3 6 2 5 4
        assert_eq!(tree.dfs(&6), Lookup::Found { depth: 2, steps: 2 });
        assert_eq!(tree.dfs(&4), Lookup::Found { depth: 2, steps: 5 });
        // bfs visits 1 2 3 4 5 6
        assert_eq!(tree.bfs(&4), Lookup::Found { depth: 2, steps: 3 });
        assert_eq!(tree.find(&6, Strategy::BreadthFirst).steps(), 5);
    }

    #[test]
    fn test_not_found() {
        let tree = sample();
        assert_eq!(tree.dfs(&7), Lookup::NotFound { steps: 6 });
        assert_eq!(tree.bfs(&7), Lookup::NotFound { steps: 6 });
        assert!(!tree.find(&0, Strategy::default()).is_found());
        assert_eq!(TreeNode::new(1).dfs(&2), Lookup::NotFound { steps: 1 });
    }

    #[test]
    fn test_bounded_frontier() {
        let tree = sample();
        let mut stack = StackArray::new(3).unwrap();
        assert_eq!(tree.dfs_with_data(&4, &mut stack).unwrap().depth(), Some(2));

        let queue = QueueArray::new(2).unwrap();
        assert_eq!(
            tree.bfs_with_data(&6, queue),
            Err(Error::Overflow {
                container: Container::QueueArray,
                capacity: 2,
            })
        );
    }

    #[test]
    fn test_counts() {
        let tree = sample();
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.nb_of_branches(), 5);
        assert!(!tree.is_leaf());
        assert!(TreeNode::new(0).is_leaf());
        assert_eq!(TreeNode::new(0).nb_of_branches(), 0);
    }

    #[test]
    fn test_orders() {
        let tree = sample();
        assert_eq!(tree.get_pre_order(","), "1,2,4,5,3,6");
        assert_eq!(tree.get_post_order(","), "4,5,2,6,3,1");
        assert_eq!(tree.get_bfs_order("->"), "1->2->3->4->5->6");
    }
}
