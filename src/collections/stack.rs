/*
 * Copyright (c) 2018, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use super::write_items;
use crate::error::{Container, Error, Result};
use crate::nodelist::NodeList;

use std::fmt;

/// A LIFO container.
///
/// `push` fails with [`Error::Overflow`] if the stack is bounded and full,
/// `pop` fails with [`Error::Underflow`] if the stack is empty. A failing
/// operation does not modify the stack.
pub trait ItemStack<I> {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize;

    /// Return the maximal number of elements or `None` if unbounded.
    fn capacity(&self) -> Option<usize> {
        None
    }

    fn is_full(&self) -> bool {
        self.capacity().map_or(false, |cap| self.len() >= cap)
    }

    /// The kind of this stack, used in error reports.
    fn container(&self) -> Container {
        Container::Stack
    }

    fn clear(&mut self);

    fn push(&mut self, u: I) -> Result<()>;

    /// Push all elements of a sequence in order.
    ///
    /// If the elements do not fit, nothing is pushed.
    fn push_all<It>(&mut self, items: It) -> Result<()>
    where
        It: IntoIterator<Item = I>,
        Self: Sized,
    {
        let items: Vec<I> = items.into_iter().collect();
        if let Some(capacity) = self.capacity() {
            if self.len() + items.len() > capacity {
                return Err(Error::Overflow {
                    container: self.container(),
                    capacity,
                });
            }
        }
        for u in items {
            self.push(u)?;
        }
        Ok(())
    }

    fn pop(&mut self) -> Result<I>;

    /// Return the top element.
    fn peek(&self) -> Option<&I>;

    /// Return the bottom element.
    fn ground(&self) -> Option<&I>;
}

impl<'a, I, D> ItemStack<I> for &'a mut D
where
    D: ItemStack<I>,
{
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn capacity(&self) -> Option<usize> {
        (**self).capacity()
    }

    fn is_full(&self) -> bool {
        (**self).is_full()
    }

    fn container(&self) -> Container {
        (**self).container()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn push(&mut self, u: I) -> Result<()> {
        (**self).push(u)
    }

    fn pop(&mut self) -> Result<I> {
        (**self).pop()
    }

    fn peek(&self) -> Option<&I> {
        (**self).peek()
    }

    fn ground(&self) -> Option<&I> {
        (**self).ground()
    }
}

impl<I> ItemStack<I> for Vec<I> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn push(&mut self, u: I) -> Result<()> {
        Vec::push(self, u);
        Ok(())
    }

    fn pop(&mut self) -> Result<I> {
        Vec::pop(self).ok_or(Error::Underflow {
            container: Container::Stack,
        })
    }

    fn peek(&self) -> Option<&I> {
        self.as_slice().last()
    }

    fn ground(&self) -> Option<&I> {
        self.as_slice().first()
    }
}

/// A growable array stack with an optional limit.
#[derive(Clone, Debug)]
pub struct Stack<I> {
    value: Vec<I>,
    limit: Option<usize>,
}

impl<I> Default for Stack<I> {
    fn default() -> Self {
        Stack {
            value: vec![],
            limit: None,
        }
    }
}

impl<I> Stack<I> {
    /// Create an unbounded stack.
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a stack holding at most `limit` elements.
    pub fn with_limit(limit: usize) -> Self {
        Stack {
            value: Vec::with_capacity(limit),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<I> {
        self.value.iter()
    }
}

impl<I> ItemStack<I> for Stack<I> {
    fn len(&self) -> usize {
        self.value.len()
    }

    fn capacity(&self) -> Option<usize> {
        self.limit
    }

    fn clear(&mut self) {
        self.value.clear()
    }

    fn push(&mut self, u: I) -> Result<()> {
        if self.is_full() {
            return Err(Error::Overflow {
                container: Container::Stack,
                capacity: self.limit.unwrap_or(0),
            });
        }
        self.value.push(u);
        Ok(())
    }

    fn pop(&mut self) -> Result<I> {
        self.value.pop().ok_or(Error::Underflow {
            container: Container::Stack,
        })
    }

    fn peek(&self) -> Option<&I> {
        self.value.last()
    }

    fn ground(&self) -> Option<&I> {
        self.value.first()
    }
}

impl<I> std::iter::FromIterator<I> for Stack<I> {
    fn from_iter<It: IntoIterator<Item = I>>(iter: It) -> Self {
        Stack {
            value: iter.into_iter().collect(),
            limit: None,
        }
    }
}

impl<I> fmt::Display for Stack<I>
where
    I: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_items(f, "Stack", &self.value)
    }
}

/// A stack in a fixed-size array.
///
/// `top` is the number of occupied slots, the top element is stored in slot
/// `top - 1`.
#[derive(Clone, Debug)]
pub struct StackArray<I> {
    value: Vec<Option<I>>,
    top: usize,
}

impl<I> StackArray<I> {
    /// Create a stack with `capacity` slots.
    ///
    /// Fails with [`Error::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity {
                container: Container::StackArray,
            });
        }
        let mut value = Vec::with_capacity(capacity);
        value.resize_with(capacity, || None);
        Ok(StackArray { value, top: 0 })
    }
}

impl<I> ItemStack<I> for StackArray<I> {
    fn len(&self) -> usize {
        self.top
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.value.len())
    }

    fn container(&self) -> Container {
        Container::StackArray
    }

    fn clear(&mut self) {
        for slot in &mut self.value[..self.top] {
            *slot = None;
        }
        self.top = 0;
    }

    fn push(&mut self, u: I) -> Result<()> {
        if self.top >= self.value.len() {
            return Err(Error::Overflow {
                container: Container::StackArray,
                capacity: self.value.len(),
            });
        }
        self.value[self.top] = Some(u);
        self.top += 1;
        Ok(())
    }

    fn pop(&mut self) -> Result<I> {
        let underflow = Error::Underflow {
            container: Container::StackArray,
        };
        if self.top == 0 {
            return Err(underflow);
        }
        let u = self.value[self.top - 1].take().ok_or(underflow)?;
        self.top -= 1;
        Ok(u)
    }

    fn peek(&self) -> Option<&I> {
        self.top.checked_sub(1).and_then(|t| self.value[t].as_ref())
    }

    fn ground(&self) -> Option<&I> {
        if self.top > 0 {
            self.value[0].as_ref()
        } else {
            None
        }
    }
}

impl<I> fmt::Display for StackArray<I>
where
    I: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_items(f, "StackArray", self.value[..self.top].iter().flatten())
    }
}

/// A stack of linked nodes.
///
/// The top of the stack is the front of the node list.
#[derive(Clone, Debug)]
pub struct StackList<I> {
    nodes: NodeList<I>,
}

impl<I> Default for StackList<I> {
    fn default() -> Self {
        StackList { nodes: NodeList::new() }
    }
}

impl<I> StackList<I> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> crate::nodelist::Iter<I> {
        self.nodes.iter()
    }
}

impl<I> ItemStack<I> for StackList<I> {
    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn container(&self) -> Container {
        Container::StackList
    }

    fn clear(&mut self) {
        self.nodes.clear()
    }

    fn push(&mut self, u: I) -> Result<()> {
        self.nodes.push_front(u);
        Ok(())
    }

    fn pop(&mut self) -> Result<I> {
        self.nodes.pop_front().ok_or(Error::Underflow {
            container: Container::StackList,
        })
    }

    fn peek(&self) -> Option<&I> {
        self.nodes.front()
    }

    fn ground(&self) -> Option<&I> {
        self.nodes.back()
    }
}

impl<I> std::iter::FromIterator<I> for StackList<I> {
    fn from_iter<It: IntoIterator<Item = I>>(iter: It) -> Self {
        let mut stack = StackList::new();
        for u in iter {
            stack.nodes.push_front(u);
        }
        stack
    }
}

impl<I> fmt::Display for StackList<I>
where
    I: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // bottom to top, like `Stack`
        let items: Vec<&I> = self.nodes.iter().collect();
        write_items(f, "StackList", items.into_iter().rev())
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemStack, Stack, StackArray, StackList};
    use crate::error::{Container, Error};

    fn check_lifo<S: ItemStack<u32>>(mut stack: S) {
        assert!(stack.is_empty());
        stack.push(1).unwrap();
        stack.push_all(vec![2, 3]).unwrap();
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.ground(), Some(&1));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
        assert!(matches!(stack.pop(), Err(Error::Underflow { .. })));
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.ground(), None);
    }

    #[test]
    fn test_lifo() {
        check_lifo(Vec::new());
        check_lifo(Stack::new());
        check_lifo(Stack::with_limit(3));
        check_lifo(StackArray::new(4).unwrap());
        check_lifo(StackList::new());
    }

    #[test]
    fn test_overflow() {
        let mut stack = Stack::with_limit(2);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert!(stack.is_full());
        assert_eq!(
            stack.push(3),
            Err(Error::Overflow {
                container: Container::Stack,
                capacity: 2
            })
        );
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.to_string(), "Stack(1,2)");
    }

    #[test]
    fn test_display() {
        let mut array = StackArray::new(4).unwrap();
        array.push_all(vec![1, 2, 3]).unwrap();
        array.pop().unwrap();
        assert_eq!(array.to_string(), "StackArray(1,2)");

        let list: StackList<u8> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(list.peek(), Some(&3));
        assert_eq!(list.to_string(), "StackList(1,2,3)");
        assert_eq!(StackList::<u8>::new().to_string(), "StackList()");
    }

    #[test]
    fn test_push_all_is_atomic() {
        let mut stack = StackArray::new(3).unwrap();
        stack.push(1).unwrap();
        assert!(stack.push_all(vec![2, 3, 4]).is_err());
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Some(&1));
        stack.push_all(vec![2, 3]).unwrap();
        assert!(stack.is_full());
    }

    #[test]
    fn test_zero_capacity() {
        assert_eq!(
            StackArray::<u8>::new(0).unwrap_err(),
            Error::ZeroCapacity {
                container: Container::StackArray
            }
        );
    }

    #[test]
    fn test_stack_list_order() {
        let stack: StackList<char> = "abc".chars().collect();
        assert_eq!(stack.iter().collect::<String>(), "cba");
        assert_eq!(stack.peek(), Some(&'c'));
        assert_eq!(stack.ground(), Some(&'a'));
        assert!(!stack.is_full());
    }
}
