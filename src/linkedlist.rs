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

//! A minimal singly linked list.

use std::fmt;

/// A singly linked list.
///
/// Each element owns its successor. The name of the list is stored in the
/// first element. Dropping a list does not recurse, the derived `Clone`,
/// `PartialEq` and `Debug` recurse once per element.
///
/// # Example
///
/// ```
/// use rs_datastruct::LinkedList;
///
/// let mut list = LinkedList::named("l", 1);
/// list.append(2);
/// list.append(3);
/// assert_eq!(list.show(), "l:1->2->3");
/// assert_eq!(list.last(), &3);
///
/// let list = list.reverse();
/// assert_eq!(list.to_string(), "LinkedList(l:3->2->1)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LinkedList<T> {
    name: String,
    payload: T,
    next: Option<Box<LinkedList<T>>>,
}

impl<T> LinkedList<T> {
    /// Create a list with a single element.
    pub fn new(payload: T) -> Self {
        LinkedList::named("", payload)
    }

    /// Create a named list with a single element.
    pub fn named<S: Into<String>>(name: S, payload: T) -> Self {
        LinkedList {
            name: name.into(),
            payload,
            next: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn next(&self) -> Option<&LinkedList<T>> {
        self.next.as_deref()
    }

    /// Append an element at the end of the list.
    pub fn append(&mut self, payload: T) {
        self.append_all(Some(payload))
    }

    /// Append all elements of `items` at the end of the list.
    ///
    /// The list is only walked once.
    pub fn append_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut cur = &mut self.next;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        for payload in items {
            cur = &mut cur.insert(Box::new(LinkedList::new(payload))).next;
        }
    }

    /// Return the payload of the last element.
    pub fn last(&self) -> &T {
        let mut cur = self;
        while let Some(next) = cur.next.as_deref() {
            cur = next;
        }
        &cur.payload
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Return the position of the first element with the given payload.
    pub fn find(&self, payload: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == payload)
    }

    pub fn iter(&self) -> Iter<T> {
        Iter { cur: Some(self) }
    }

    /// Reverse the list.
    ///
    /// The name moves to the new first element.
    pub fn reverse(mut self) -> Self {
        let name = std::mem::take(&mut self.name);
        let mut rest = self.next.take();
        let mut head = self;
        while let Some(mut node) = rest {
            rest = node.next.take();
            node.next = Some(Box::new(head));
            head = *node;
        }
        head.name = name;
        head
    }

    /// Return the elements as `name:a->b->c`.
    pub fn show(&self) -> String
    where
        T: fmt::Display,
    {
        let items: Vec<String> = self.iter().map(|x| x.to_string()).collect();
        format!("{}:{}", self.name, items.join("->"))
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    cur: Option<&'a LinkedList<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.cur?;
        self.cur = node.next.as_deref();
        Some(&node.payload)
    }
}

impl<T> fmt::Display for LinkedList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LinkedList({})", self.show())
    }
}

#[cfg(test)]
mod tests {
    use super::LinkedList;

    #[test]
    fn test_append_find() {
        let mut list = LinkedList::new('a');
        list.append('b');
        list.append('c');
        assert_eq!(list.len(), 3);
        assert_eq!(list.find(&'c'), Some(2));
        assert_eq!(list.find(&'z'), None);
        assert_eq!(list.next().map(|n| *n.payload()), Some('b'));
        assert_eq!(list.last(), &'c');
    }

    #[test]
    fn test_reverse() {
        let mut list = LinkedList::named("xs", 1);
        for i in 2..=5 {
            list.append(i);
        }
        let list = list.reverse();
        assert_eq!(list.name(), "xs");
        assert_eq!(list.iter().cloned().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
        assert_eq!(list.show(), "xs:5->4->3->2->1");

        let single = LinkedList::new(0).reverse();
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_long_list() {
        let mut list = LinkedList::new(0u32);
        for i in 1..20_000 {
            list.append(i);
        }
        list.append_all(20_000..100_000);
        assert_eq!(list.len(), 100_000);
        assert_eq!(list.last(), &99_999);
        assert_eq!(list.find(&50_000), Some(50_000));
        let list = list.reverse();
        assert_eq!(list.payload(), &99_999);
        drop(list);
    }
}
