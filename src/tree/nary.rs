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

//! N-ary trees.

use super::{join, Tree, TreeArray};

use either::Either;
use num_traits::ToPrimitive;

use std::fmt;
use std::iter::once;
use std::ops::Add;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A node of a tree with an arbitrary number of ordered children.
///
/// Note that the aggregates [`sum`](NTreeNode::sum),
/// [`min`](NTreeNode::min) and [`max`](NTreeNode::max) only consider the
/// node and its immediate children, whereas the traversals and searches
/// cover the whole subtree.
///
/// Dropping and the traversals do not recurse. `Clone`, `PartialEq`,
/// `Display`, [`to_array`](NTreeNode::to_array) and (de)serialization
/// recurse once per level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct NTreeNode<T> {
    pub payload: T,
    pub children: Vec<NTreeNode<T>>,
}

impl<T> NTreeNode<T> {
    pub fn new(payload: T) -> Self {
        NTreeNode {
            payload,
            children: vec![],
        }
    }

    pub fn with_children<I>(payload: T, children: I) -> Self
    where
        I: IntoIterator<Item = NTreeNode<T>>,
    {
        NTreeNode {
            payload,
            children: children.into_iter().collect(),
        }
    }

    /// Append a child.
    pub fn add(&mut self, child: NTreeNode<T>) {
        self.children.push(child);
    }

    /// Return the payload followed by the payloads of the immediate
    /// children, joined by `sep`.
    pub fn get_order(&self, sep: &str) -> String
    where
        T: fmt::Display,
    {
        join(once(&self.payload).chain(self.children.iter().map(|c| &c.payload)), sep)
    }

    /// Sum of the payload and the payloads of the immediate children.
    pub fn sum(&self) -> T
    where
        T: Copy + Add<Output = T>,
    {
        self.children.iter().fold(self.payload, |s, c| s + c.payload)
    }

    /// Smallest of the payload and the payloads of the immediate children.
    pub fn min(&self) -> &T
    where
        T: PartialOrd,
    {
        self.shallow().fold(&self.payload, |m, x| if x < m { x } else { m })
    }

    /// Largest of the payload and the payloads of the immediate children.
    pub fn max(&self) -> &T
    where
        T: PartialOrd,
    {
        self.shallow().fold(&self.payload, |m, x| if x > m { x } else { m })
    }

    fn shallow(&self) -> impl Iterator<Item = &T> {
        self.children.iter().map(|c| &c.payload)
    }

    /// Return [`sum`](NTreeNode::sum) divided by the number of branches of
    /// the whole subtree.
    ///
    /// Returns `None` for a leaf.
    pub fn avg(&self) -> Option<f64>
    where
        T: Copy + Add<Output = T> + ToPrimitive,
    {
        match self.nb_of_branches() {
            0 => None,
            n => Some(self.sum().to_f64()? / n as f64),
        }
    }

    /// Return the nested array `[payload, child_1, ..., child_k]`.
    pub fn to_array(&self) -> TreeArray<T>
    where
        T: Clone,
    {
        TreeArray(
            once(Either::Left(self.payload.clone()))
                .chain(self.children.iter().map(|c| Either::Right(c.to_array())))
                .collect(),
        )
    }
}

impl<T> Drop for NTreeNode<T> {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl<T> Tree for NTreeNode<T> {
    type Payload = T;

    fn payload(&self) -> &T {
        &self.payload
    }

    fn children(&self) -> Vec<&Self> {
        self.children.iter().collect()
    }
}

impl<T> fmt::Display for NTreeNode<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NTreeNode(payload = {}", self.payload)?;
        if !self.children.is_empty() {
            write!(f, ", children = [")?;
            for (i, c) in self.children.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", c)?;
            }
            write!(f, "]")?;
        }
        write!(f, ")")
    }
}
