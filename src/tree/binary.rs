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

//! Binary trees.

use super::{join, Tree, TreeArray};

use either::Either;
use num_traits::ToPrimitive;

use std::fmt;
use std::ops::Add;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A node of a binary tree.
///
/// The node owns its subtrees, so a node can never be its own ancestor.
///
/// Dropping, the traversals and the aggregates work without recursion and
/// handle arbitrarily deep trees. `Clone`, `PartialEq`, `Display`,
/// [`to_array`](TreeNode::to_array) and (de)serialization recurse once per
/// level, so their depth is limited by the stack size.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct TreeNode<T> {
    pub payload: T,
    pub left: Option<Box<TreeNode<T>>>,
    pub right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    /// Create a leaf.
    pub fn new(payload: T) -> Self {
        TreeNode {
            payload,
            left: None,
            right: None,
        }
    }

    pub fn with_children(payload: T, left: Option<TreeNode<T>>, right: Option<TreeNode<T>>) -> Self {
        TreeNode {
            payload,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Replace both children.
    pub fn add(&mut self, left: Option<TreeNode<T>>, right: Option<TreeNode<T>>) {
        self.left = left.map(Box::new);
        self.right = right.map(Box::new);
    }

    /// Hang a chain of nodes down the left spine.
    ///
    /// The first node becomes the left child of `self`, each following node
    /// becomes the left child of its predecessor. The left subtree of the last
    /// node is kept.
    pub fn add_left<I>(&mut self, chain: I)
    where
        I: IntoIterator<Item = TreeNode<T>>,
    {
        if let Some(sub) = Self::chain(chain, |node, sub| node.left = sub) {
            self.left = Some(sub);
        }
    }

    /// Hang a chain of nodes down the right spine.
    ///
    /// See [`TreeNode::add_left`].
    pub fn add_right<I>(&mut self, chain: I)
    where
        I: IntoIterator<Item = TreeNode<T>>,
    {
        if let Some(sub) = Self::chain(chain, |node, sub| node.right = sub) {
            self.right = Some(sub);
        }
    }

    fn chain<I, F>(chain: I, link: F) -> Option<Box<TreeNode<T>>>
    where
        I: IntoIterator<Item = TreeNode<T>>,
        F: Fn(&mut TreeNode<T>, Option<Box<TreeNode<T>>>),
    {
        let mut nodes: Vec<_> = chain.into_iter().collect();
        let mut sub = Box::new(nodes.pop()?);
        while let Some(mut node) = nodes.pop() {
            link(&mut node, Some(sub));
            sub = Box::new(node);
        }
        Some(sub)
    }

    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }

    /// Return the payloads in in-order (left subtree, node, right subtree).
    pub fn in_order(&self) -> Vec<&T> {
        let mut order = vec![];
        let mut stack = vec![];
        let mut cur = Some(self);
        loop {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left();
            }
            match stack.pop() {
                Some(node) => {
                    order.push(&node.payload);
                    cur = node.right();
                }
                None => return order,
            }
        }
    }

    /// Return the in-order payloads joined by `sep`, e.g. `"3,5,8"`.
    pub fn get_in_order(&self, sep: &str) -> String
    where
        T: fmt::Display,
    {
        join(self.in_order(), sep)
    }

    /// Return the sum of all payloads in the subtree.
    pub fn sum(&self) -> T
    where
        T: Copy + Add<Output = T>,
    {
        self.pre_order().into_iter().skip(1).fold(self.payload, |s, &x| s + x)
    }

    /// Return the smallest payload in the subtree.
    pub fn min(&self) -> &T
    where
        T: PartialOrd,
    {
        self.fold(|a, b| if b < a { b } else { a })
    }

    /// Return the largest payload in the subtree.
    pub fn max(&self) -> &T
    where
        T: PartialOrd,
    {
        self.fold(|a, b| if b > a { b } else { a })
    }

    fn fold<'a, F>(&'a self, pick: F) -> &'a T
    where
        F: Fn(&'a T, &'a T) -> &'a T,
    {
        self.pre_order().into_iter().skip(1).fold(&self.payload, pick)
    }

    /// Return the sum of the payloads divided by the number of branches.
    ///
    /// Returns `None` for a leaf (there is no branch) or if the sum is not
    /// representable as `f64`.
    pub fn avg(&self) -> Option<f64>
    where
        T: Copy + Add<Output = T> + ToPrimitive,
    {
        match self.nb_of_branches() {
            0 => None,
            n => Some(self.sum().to_f64()? / n as f64),
        }
    }

    /// Return the nested array `[left, payload, right]`.
    ///
    /// Missing children are omitted.
    pub fn to_array(&self) -> TreeArray<T>
    where
        T: Clone,
    {
        let mut arr = vec![];
        if let Some(left) = self.left() {
            arr.push(Either::Right(left.to_array()));
        }
        arr.push(Either::Left(self.payload.clone()));
        if let Some(right) = self.right() {
            arr.push(Either::Right(right.to_array()));
        }
        TreeArray(arr)
    }

    /// Return the payloads in the order of the nested array, i.e. in-order.
    pub fn to_flat_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.in_order().into_iter().cloned().collect()
    }
}

impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode<T>>> = self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Tree for TreeNode<T> {
    type Payload = T;

    fn payload(&self) -> &T {
        &self.payload
    }

    fn children(&self) -> Vec<&Self> {
        self.left().into_iter().chain(self.right()).collect()
    }
}

impl<T> fmt::Display for TreeNode<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TreeNode(payload = {}", self.payload)?;
        if let Some(left) = self.left() {
            write!(f, ", left = {}", left)?;
        }
        if let Some(right) = self.right() {
            write!(f, ", right = {}", right)?;
        }
        write!(f, ")")
    }
}
