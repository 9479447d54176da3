// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

#![forbid(unsafe_code)]

//! A library of basic in-memory data structures.
//!
//! - generic containers: sets, stacks, queues, a multimap and a priority
//!   queue ([`collections`]),
//! - linked lists ([`NodeList`], [`LinkedList`]),
//! - binary and N-ary trees with searches and traversals ([`tree`]),
//! - A* path-finding on implicit graphs and on grids ([`search`]),
//! - an undo/redo history ([`VirtualHistory`]).
//!
//! Bounded containers report misuse by returning an [`Error`], searches
//! report a missing target by their return value.

pub mod error;
pub use self::error::{Error, Result};

// # Data structures

pub mod collections;
pub use self::collections::{Map, Queue, QueueArray, QueueList, Set, SortedSet, Stack, StackArray, StackList};

pub mod nodelist;
pub use self::nodelist::{NodeId, NodeList};

pub mod linkedlist;
pub use self::linkedlist::LinkedList;

pub mod tree;
pub use self::tree::{NTreeNode, Tree, TreeNode};

pub mod history;
pub use self::history::VirtualHistory;

// # Algorithms

pub mod search;
pub use self::search::PathNode;
