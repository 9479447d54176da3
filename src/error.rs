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

//! Errors reported by the bounded containers.

use std::fmt;
use thiserror::Error;

/// The kind of container an error originates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Container {
    Stack,
    StackArray,
    StackList,
    Queue,
    QueueArray,
    QueueList,
    Set,
    SortedSet,
    Map,
    History,
}

impl fmt::Display for Container {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        use self::Container::*;
        let name = match self {
            Stack => "Stack",
            StackArray => "StackArray",
            StackList => "StackList",
            Queue => "Queue",
            QueueArray => "QueueArray",
            QueueList => "QueueList",
            Set => "Set",
            SortedSet => "SortedSet",
            Map => "Map",
            History => "VirtualHistory",
        };
        write!(fmt, "{}", name)
    }
}

/// Error of a container operation.
///
/// A failed operation never modifies the container.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An element has been added to a container that is already full.
    #[error("{container} overflow (capacity {capacity})")]
    Overflow { container: Container, capacity: usize },
    /// An element has been removed from an empty container.
    #[error("{container} underflow")]
    Underflow { container: Container },
    /// A position outside of the container has been accessed.
    #[error("{container}: index {index} out of bounds (length {len})")]
    IndexOutOfBounds {
        container: Container,
        index: usize,
        len: usize,
    },
    /// A fixed-size container has been created without any slots.
    #[error("{container} requires a positive capacity")]
    ZeroCapacity { container: Container },
    /// The value is already contained at another position.
    #[error("{container}: value at index {index} is already contained")]
    Duplicate { container: Container, index: usize },
    /// The value at `index` is not larger than its predecessor.
    #[error("{container}: value at index {index} is out of order")]
    Unsorted { container: Container, index: usize },
    /// Two parallel sequences of a container differ in length.
    #[error("{container}: {found} entries for {expected} keys")]
    LengthMismatch {
        container: Container,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
