/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! A doubly linked list of nodes.
//!
//! The nodes are stored in an array (Vec) and are identified by indices,
//! the links `next` and `prev` of each node are indices, too. Slots of
//! removed nodes are kept in a free list and reused by later insertions,
//! so a [`NodeId`] becomes invalid once its node has been removed.
//!
//! For every node `u` with successor `v` the list guarantees
//! `prev(v) == u` and `next(u) == v`.
//!
//! # Example
//!
//! ```
//! use rs_datastruct::NodeList;
//!
//! let mut list = NodeList::new();
//! let a = list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//!
//! assert_eq!(list.iter().cloned().collect::<Vec<_>>(), vec![0, 1, 2]);
//! assert_eq!(list.find(&2), Some(2));
//!
//! list.remove(a);
//! list.reverse();
//! assert_eq!(list.iter().cloned().collect::<Vec<_>>(), vec![2, 0]);
//! ```

use std::fmt;

/// Handle of a node in a [`NodeList`].
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Return the slot index of this node.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node of the list.
///
/// A slot without payload is free and `next` links it to the next free slot.
#[derive(Clone, Debug)]
struct Node<T> {
    payload: Option<T>,
    next: Option<usize>,
    prev: Option<usize>,
}

/// Doubly linked list with index links.
#[derive(Clone, Debug)]
pub struct NodeList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    /// First free slot.
    free: Option<usize>,
    len: usize,
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        NodeList {
            nodes: vec![],
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }
}

impl<T> NodeList<T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all nodes.
    ///
    /// All handles become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.len = 0;
    }

    fn is_live(&self, id: NodeId) -> bool {
        self.nodes.get(id.0).map_or(false, |node| node.payload.is_some())
    }

    pub fn front_id(&self) -> Option<NodeId> {
        self.head.map(NodeId)
    }

    pub fn back_id(&self) -> Option<NodeId> {
        self.tail.map(NodeId)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|i| self.nodes[i].payload.as_ref())
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|i| self.nodes[i].payload.as_ref())
    }

    /// Return the payload of node `id` or `None` if the handle is invalid.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0).and_then(|node| node.payload.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0).and_then(|node| node.payload.as_mut())
    }

    /// Return the successor of node `id`.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        if self.is_live(id) {
            self.nodes[id.0].next.map(NodeId)
        } else {
            None
        }
    }

    /// Return the predecessor of node `id`.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        if self.is_live(id) {
            self.nodes[id.0].prev.map(NodeId)
        } else {
            None
        }
    }

    /// Return the handle of the node at position `index` from the front.
    pub fn nth_id(&self, index: usize) -> Option<NodeId> {
        let mut cur = self.head;
        for _ in 0..index {
            cur = self.nodes[cur?].next;
        }
        cur.map(NodeId)
    }

    fn alloc(&mut self, payload: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let node = Node {
            payload: Some(payload),
            next,
            prev,
        };
        self.len += 1;
        if let Some(idx) = self.free {
            self.free = self.nodes[idx].next;
            self.nodes[idx] = node;
            idx
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    /// Append a node at the end of the list.
    pub fn push_back(&mut self, payload: T) -> NodeId {
        let idx = self.alloc(payload, self.tail, None);
        match self.tail {
            Some(t) => self.nodes[t].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        NodeId(idx)
    }

    /// Prepend a node at the beginning of the list.
    pub fn push_front(&mut self, payload: T) -> NodeId {
        let idx = self.alloc(payload, None, self.head);
        match self.head {
            Some(h) => self.nodes[h].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        NodeId(idx)
    }

    /// Insert a new node directly before node `id`.
    ///
    /// Returns `None` (and inserts nothing) if `id` is invalid.
    pub fn insert_before(&mut self, id: NodeId, payload: T) -> Option<NodeId> {
        if !self.is_live(id) {
            return None;
        }
        let prev = self.nodes[id.0].prev;
        let idx = self.alloc(payload, prev, Some(id.0));
        match prev {
            Some(p) => self.nodes[p].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.nodes[id.0].prev = Some(idx);
        Some(NodeId(idx))
    }

    /// Insert a new node directly after node `id`.
    ///
    /// Returns `None` (and inserts nothing) if `id` is invalid.
    pub fn insert_after(&mut self, id: NodeId, payload: T) -> Option<NodeId> {
        if !self.is_live(id) {
            return None;
        }
        let next = self.nodes[id.0].next;
        let idx = self.alloc(payload, Some(id.0), next);
        match next {
            Some(n) => self.nodes[n].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.nodes[id.0].next = Some(idx);
        Some(NodeId(idx))
    }

    // Unlink a live node and put its slot into the free list.
    fn unlink(&mut self, idx: usize) -> Option<T> {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
        let node = &mut self.nodes[idx];
        let payload = node.payload.take();
        node.prev = None;
        node.next = self.free;
        self.free = Some(idx);
        self.len -= 1;
        payload
    }

    /// Remove node `id` from the list and return its payload.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        if self.is_live(id) {
            self.unlink(id.0)
        } else {
            None
        }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let idx = self.head?;
        self.unlink(idx)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let idx = self.tail?;
        self.unlink(idx)
    }

    /// Return the handle of the first node with the given payload.
    pub fn find_id(&self, payload: &T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        let mut cur = self.head;
        while let Some(idx) = cur {
            if self.nodes[idx].payload.as_ref() == Some(payload) {
                return Some(NodeId(idx));
            }
            cur = self.nodes[idx].next;
        }
        None
    }

    /// Return the position (counted from the front) of the first node with
    /// the given payload.
    pub fn find(&self, payload: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == payload)
    }

    /// Reverse the order of the nodes.
    ///
    /// Handles stay valid.
    pub fn reverse(&mut self) {
        let mut cur = self.head;
        while let Some(idx) = cur {
            let node = &mut self.nodes[idx];
            std::mem::swap(&mut node.next, &mut node.prev);
            // the former successor
            cur = node.prev;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Return an iterator over the payloads from front to back.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            list: self,
            cur: self.head,
            remaining: self.len,
        }
    }
}

/// Iterator over the payloads of a [`NodeList`].
pub struct Iter<'a, T> {
    list: &'a NodeList<T>,
    cur: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let idx = self.cur?;
        let node = &self.list.nodes[idx];
        self.cur = node.next;
        self.remaining -= 1;
        node.payload.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> std::iter::FromIterator<T> for NodeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = NodeList::new();
        for x in iter {
            list.push_back(x);
        }
        list
    }
}

impl<T> fmt::Display for NodeList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeList(")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "<->")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, ")")
    }
}
