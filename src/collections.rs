/*
 * Copyright (c) 2018, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Generic containers.
//!
//! Stacks and queues come in three flavours each (growable array, fixed
//! array, linked nodes). All flavours of one kind implement the same trait,
//! [`ItemStack`] resp. [`ItemQueue`], so algorithms (and tests) can be
//! written once for all of them.

mod map;
mod priqueue;
mod queue;
mod set;
mod stack;

pub use self::map::{occurrence_list, occurrence_sort, Map};
pub use self::priqueue::{BinHeap, ItemPriQueue};
pub use self::queue::{ItemQueue, Queue, QueueArray, QueueList};
pub use self::set::{ItemSet, Set, SortedSet};
pub use self::stack::{ItemStack, Stack, StackArray, StackList};

use std::fmt;

/// Write the items as `Name(a,b,c)`.
pub(crate) fn write_items<'a, T, It>(f: &mut fmt::Formatter, name: &str, items: It) -> fmt::Result
where
    T: fmt::Display + 'a,
    It: IntoIterator<Item = &'a T>,
{
    write!(f, "{}(", name)?;
    for (i, x) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", x)?;
    }
    write!(f, ")")
}
