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

use std::collections::VecDeque;
use std::fmt;

/// A FIFO container.
///
/// The *head* is the element that will be dequeued next, the *tail* is the
/// most recently enqueued element.
pub trait ItemQueue<I> {
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

    fn container(&self) -> Container {
        Container::Queue
    }

    fn clear(&mut self);

    fn enqueue(&mut self, u: I) -> Result<()>;

    /// Enqueue all elements of a sequence in order.
    ///
    /// If the elements do not fit, nothing is enqueued.
    fn enqueue_all<It>(&mut self, items: It) -> Result<()>
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
            self.enqueue(u)?;
        }
        Ok(())
    }

    fn dequeue(&mut self) -> Result<I>;

    fn head(&self) -> Option<&I>;

    fn tail(&self) -> Option<&I>;
}

impl<'a, I, D> ItemQueue<I> for &'a mut D
where
    D: ItemQueue<I>,
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

    fn enqueue(&mut self, u: I) -> Result<()> {
        (**self).enqueue(u)
    }

    fn dequeue(&mut self) -> Result<I> {
        (**self).dequeue()
    }

    fn head(&self) -> Option<&I> {
        (**self).head()
    }

    fn tail(&self) -> Option<&I> {
        (**self).tail()
    }
}

impl<I> ItemQueue<I> for VecDeque<I> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self)
    }

    fn enqueue(&mut self, u: I) -> Result<()> {
        VecDeque::push_back(self, u);
        Ok(())
    }

    fn dequeue(&mut self) -> Result<I> {
        VecDeque::pop_front(self).ok_or(Error::Underflow {
            container: Container::Queue,
        })
    }

    fn head(&self) -> Option<&I> {
        VecDeque::front(self)
    }

    fn tail(&self) -> Option<&I> {
        VecDeque::back(self)
    }
}

/// A growable queue with an optional limit.
#[derive(Clone, Debug)]
pub struct Queue<I> {
    value: VecDeque<I>,
    limit: Option<usize>,
}

impl<I> Default for Queue<I> {
    fn default() -> Self {
        Queue {
            value: VecDeque::new(),
            limit: None,
        }
    }
}

impl<I> Queue<I> {
    /// Create an unbounded queue.
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a queue holding at most `limit` elements.
    pub fn with_limit(limit: usize) -> Self {
        Queue {
            value: VecDeque::with_capacity(limit),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<I> {
        self.value.iter()
    }
}

impl<I> ItemQueue<I> for Queue<I> {
    fn len(&self) -> usize {
        self.value.len()
    }

    fn capacity(&self) -> Option<usize> {
        self.limit
    }

    fn clear(&mut self) {
        self.value.clear()
    }

    fn enqueue(&mut self, u: I) -> Result<()> {
        if self.is_full() {
            return Err(Error::Overflow {
                container: Container::Queue,
                capacity: self.limit.unwrap_or(0),
            });
        }
        self.value.push_back(u);
        Ok(())
    }

    fn dequeue(&mut self) -> Result<I> {
        self.value.pop_front().ok_or(Error::Underflow {
            container: Container::Queue,
        })
    }

    fn head(&self) -> Option<&I> {
        self.value.front()
    }

    fn tail(&self) -> Option<&I> {
        self.value.back()
    }
}

impl<I> std::iter::FromIterator<I> for Queue<I> {
    fn from_iter<It: IntoIterator<Item = I>>(iter: It) -> Self {
        Queue {
            value: iter.into_iter().collect(),
            limit: None,
        }
    }
}

impl<I> fmt::Display for Queue<I>
where
    I: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_items(f, "Queue", &self.value)
    }
}

/// A queue in a circular buffer.
///
/// The head is stored in slot `front`, the following `count - 1` elements in
/// the next slots (modulo the capacity). The buffer is full iff `count` equals
/// the number of slots, so no slot is wasted to distinguish "full" from
/// "empty".
#[derive(Clone, Debug)]
pub struct QueueArray<I> {
    value: Vec<Option<I>>,
    front: usize,
    count: usize,
}

impl<I> QueueArray<I> {
    /// Create a queue with `capacity` slots.
    ///
    /// Fails with [`Error::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity {
                container: Container::QueueArray,
            });
        }
        let mut value = Vec::with_capacity(capacity);
        value.resize_with(capacity, || None);
        Ok(QueueArray {
            value,
            front: 0,
            count: 0,
        })
    }

    /// Slot of the tail element, only meaningful if the queue is not empty.
    fn back(&self) -> usize {
        (self.front + self.count + self.value.len() - 1) % self.value.len()
    }
}

impl<I> ItemQueue<I> for QueueArray<I> {
    fn len(&self) -> usize {
        self.count
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.value.len())
    }

    fn container(&self) -> Container {
        Container::QueueArray
    }

    fn clear(&mut self) {
        for slot in &mut self.value {
            *slot = None;
        }
        self.front = 0;
        self.count = 0;
    }

    fn enqueue(&mut self, u: I) -> Result<()> {
        let n = self.value.len();
        if self.count == n {
            return Err(Error::Overflow {
                container: Container::QueueArray,
                capacity: n,
            });
        }
        self.value[(self.front + self.count) % n] = Some(u);
        self.count += 1;
        Ok(())
    }

    fn dequeue(&mut self) -> Result<I> {
        let underflow = Error::Underflow {
            container: Container::QueueArray,
        };
        if self.count == 0 {
            return Err(underflow);
        }
        let u = self.value[self.front].take().ok_or(underflow)?;
        self.front = (self.front + 1) % self.value.len();
        self.count -= 1;
        Ok(u)
    }

    fn head(&self) -> Option<&I> {
        if self.count > 0 {
            self.value[self.front].as_ref()
        } else {
            None
        }
    }

    fn tail(&self) -> Option<&I> {
        if self.count > 0 {
            self.value[self.back()].as_ref()
        } else {
            None
        }
    }
}

impl<I> fmt::Display for QueueArray<I>
where
    I: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.value.len();
        let items = (0..self.count).filter_map(|i| self.value[(self.front + i) % n].as_ref());
        write_items(f, "QueueArray", items)
    }
}

/// A queue of linked nodes.
#[derive(Clone, Debug)]
pub struct QueueList<I> {
    nodes: NodeList<I>,
}

impl<I> Default for QueueList<I> {
    fn default() -> Self {
        QueueList { nodes: NodeList::new() }
    }
}

impl<I> QueueList<I> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> crate::nodelist::Iter<I> {
        self.nodes.iter()
    }

    /// Remove the first element equal to `u`.
    ///
    /// Returns `true` if an element has been removed.
    pub fn remove(&mut self, u: &I) -> bool
    where
        I: PartialEq,
    {
        match self.nodes.find_id(u) {
            Some(id) => self.nodes.remove(id).is_some(),
            None => false,
        }
    }

    /// Insert `u` so that it becomes the element at position `index`
    /// (counted from the head).
    ///
    /// `index == len()` enqueues the element, larger indices are an error.
    pub fn insert_at(&mut self, index: usize, u: I) -> Result<()> {
        let len = self.nodes.len();
        let out_of_bounds = Error::IndexOutOfBounds {
            container: Container::QueueList,
            index,
            len,
        };
        if index == len {
            self.nodes.push_back(u);
            return Ok(());
        }
        let id = self.nodes.nth_id(index).ok_or(out_of_bounds)?;
        self.nodes.insert_before(id, u).map(|_| ()).ok_or(out_of_bounds)
    }
}

impl<I> ItemQueue<I> for QueueList<I> {
    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn container(&self) -> Container {
        Container::QueueList
    }

    fn clear(&mut self) {
        self.nodes.clear()
    }

    fn enqueue(&mut self, u: I) -> Result<()> {
        self.nodes.push_back(u);
        Ok(())
    }

    fn dequeue(&mut self) -> Result<I> {
        self.nodes.pop_front().ok_or(Error::Underflow {
            container: Container::QueueList,
        })
    }

    fn head(&self) -> Option<&I> {
        self.nodes.front()
    }

    fn tail(&self) -> Option<&I> {
        self.nodes.back()
    }
}

impl<I> std::iter::FromIterator<I> for QueueList<I> {
    fn from_iter<It: IntoIterator<Item = I>>(iter: It) -> Self {
        QueueList {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<I> fmt::Display for QueueList<I>
where
    I: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_items(f, "QueueList", self.nodes.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemQueue, Queue, QueueArray, QueueList};
    use crate::error::{Container, Error};
    use std::collections::VecDeque;

    fn check_fifo<Q: ItemQueue<u32>>(mut queue: Q) {
        assert!(queue.is_empty());
        queue.enqueue(1).unwrap();
        queue.enqueue_all(vec![2, 3]).unwrap();
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.head(), Some(&1));
        assert_eq!(queue.tail(), Some(&3));
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        queue.enqueue(4).unwrap();
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.dequeue(), Ok(4));
        assert!(queue.is_empty());
        assert!(matches!(queue.dequeue(), Err(Error::Underflow { .. })));
        assert_eq!(queue.head(), None);
        assert_eq!(queue.tail(), None);
    }

    #[test]
    fn test_fifo() {
        check_fifo(VecDeque::new());
        check_fifo(Queue::new());
        check_fifo(Queue::with_limit(3));
        check_fifo(QueueArray::new(3).unwrap());
        check_fifo(QueueList::new());
    }

    #[test]
    fn test_circular_wrap() {
        let mut queue = QueueArray::new(3).unwrap();
        for round in 0..10 {
            queue.enqueue(round).unwrap();
            queue.enqueue(round + 100).unwrap();
            assert_eq!(queue.head(), Some(&round));
            assert_eq!(queue.tail(), Some(&(round + 100)));
            assert_eq!(queue.dequeue(), Ok(round));
            assert_eq!(queue.dequeue(), Ok(round + 100));
            assert!(queue.is_empty());
        }
    }

    #[test]
    fn test_circular_full() {
        let mut queue = QueueArray::new(2).unwrap();
        queue.enqueue('a').unwrap();
        queue.enqueue('b').unwrap();
        assert!(queue.is_full());
        assert_eq!(
            queue.enqueue('c'),
            Err(Error::Overflow {
                container: Container::QueueArray,
                capacity: 2
            })
        );
        assert_eq!(queue.dequeue(), Ok('a'));
        assert!(!queue.is_full());
        queue.enqueue('c').unwrap();
        assert!(queue.is_full());
        assert_eq!(queue.head(), Some(&'b'));
        assert_eq!(queue.tail(), Some(&'c'));
    }

    #[test]
    fn test_limit() {
        let mut queue = Queue::with_limit(2);
        assert!(queue.enqueue_all(vec![1, 2, 3]).is_err());
        assert!(queue.is_empty());
        queue.enqueue_all(vec![1, 2]).unwrap();
        assert!(queue.enqueue(3).is_err());
        assert_eq!(queue.to_string(), "Queue(1,2)");
    }

    #[test]
    fn test_array_display() {
        let mut queue = QueueArray::new(3).unwrap();
        queue.enqueue_all(vec![1, 2, 3]).unwrap();
        queue.dequeue().unwrap();
        queue.enqueue(4).unwrap();
        assert_eq!(queue.to_string(), "QueueArray(2,3,4)");
    }

    #[test]
    fn test_queue_list_edit() {
        let mut queue: QueueList<i32> = vec![1, 2, 4].into_iter().collect();
        queue.insert_at(2, 3).unwrap();
        queue.insert_at(0, 0).unwrap();
        queue.insert_at(5, 5).unwrap();
        assert_eq!(
            queue.insert_at(9, 9),
            Err(Error::IndexOutOfBounds {
                container: Container::QueueList,
                index: 9,
                len: 6
            })
        );
        assert_eq!(queue.iter().cloned().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);

        assert!(queue.remove(&3));
        assert!(!queue.remove(&3));
        assert_eq!(queue.to_string(), "QueueList(0,1,2,4,5)");
        assert_eq!(queue.dequeue(), Ok(0));
        assert_eq!(queue.len(), 4);
    }
}
