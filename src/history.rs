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

//! Undo/redo over a list of distinct states.

use crate::collections::{ItemSet, Set};
use crate::error::{Container, Error, Result};

use std::fmt;

/// A history of states with undo and redo.
///
/// The states are kept in a [`Set`], the first one is the default state.
/// Adding a state while some states have been undone drops those states.
///
/// # Example
///
/// ```
/// use rs_datastruct::VirtualHistory;
///
/// let mut history = VirtualHistory::new("draft");
/// history.add("v1");
/// history.add("v2");
///
/// assert_eq!(history.undo(), Ok(&"v1"));
/// assert_eq!(history.redo(), Ok(&"v2"));
/// assert!(history.redo().is_err());
///
/// history.reset();
/// assert!(history.is_state_default());
/// assert_eq!(history.to_string(), "VirtualHistory(draft,v1,v2)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualHistory<T> {
    states: Set<T>,
    state: usize,
}

impl<T> VirtualHistory<T>
where
    T: PartialEq,
{
    /// Create a history containing only the default state.
    pub fn new(default: T) -> Self {
        let mut states = Set::new();
        states.insert(default);
        VirtualHistory { states, state: 0 }
    }

    /// Make `state` the current state.
    ///
    /// All states after the current one are dropped. If `state` is already
    /// contained, the history moves back to it.
    pub fn add(&mut self, state: T) {
        self.states.truncate(self.state + 1);
        match self.states.index_of(&state) {
            Some(i) => self.state = i,
            None => {
                self.states.insert(state);
                self.state = self.states.len() - 1;
            }
        }
    }

    /// Add all states in order.
    pub fn add_all<I>(&mut self, states: I)
    where
        I: IntoIterator<Item = T>,
    {
        for state in states {
            self.add(state);
        }
    }

    /// Add `state` if it differs from the current state.
    ///
    /// Returns `true` if the state has been added.
    pub fn update(&mut self, state: T) -> bool {
        if *self.current() != state {
            self.add(state);
            true
        } else {
            false
        }
    }

    /// Go back to the previous state.
    ///
    /// Fails with [`Error::Underflow`] at the default state.
    pub fn undo(&mut self) -> Result<&T> {
        if self.state == 0 {
            return Err(Error::Underflow {
                container: Container::History,
            });
        }
        self.state -= 1;
        Ok(self.current())
    }

    /// Go forward to the next state.
    ///
    /// Fails with [`Error::Overflow`] at the newest state.
    pub fn redo(&mut self) -> Result<&T> {
        if self.state + 1 >= self.states.len() {
            return Err(Error::Overflow {
                container: Container::History,
                capacity: self.states.len(),
            });
        }
        self.state += 1;
        Ok(self.current())
    }

    /// Go back to the default state.
    ///
    /// The states are kept, so they can be restored with `redo`.
    pub fn reset(&mut self) {
        self.state = 0;
    }

    pub fn current(&self) -> &T {
        &self.states.value()[self.state]
    }

    /// Return the `i`-th state.
    pub fn get(&self, i: usize) -> Option<&T> {
        self.states.get(i)
    }

    pub fn states(&self) -> &Set<T> {
        &self.states
    }

    /// Return the position of the current state.
    pub fn position(&self) -> usize {
        self.state
    }

    pub fn is_state_default(&self) -> bool {
        self.state == 0
    }
}

impl<T> fmt::Display for VirtualHistory<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "VirtualHistory(")?;
        for (i, state) in self.states.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", state)?;
        }
        write!(f, ")")
    }
}
