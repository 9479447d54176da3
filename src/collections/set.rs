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

use num_traits::Num;

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A (finite) set of items.
pub trait ItemSet<I> {
    /// Return `true` if this set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of items in this set.
    fn len(&self) -> usize;

    /// Remove all items from the set.
    fn clear(&mut self);

    /// Add one item to the set.
    ///
    /// Return `true` iff `u` had not been contained in this set before.
    fn insert(&mut self, u: I) -> bool;

    /// Add all items of a sequence.
    ///
    /// Return the number of items that had not been contained before.
    fn insert_all<It>(&mut self, items: It) -> usize
    where
        It: IntoIterator<Item = I>,
        Self: Sized,
    {
        let mut n = 0;
        for u in items {
            if self.insert(u) {
                n += 1;
            }
        }
        n
    }

    /// Remove one item from the set.
    ///
    /// Returns `true` if the item had been contained in the set, otherwise
    /// false.
    fn remove(&mut self, u: &I) -> bool;

    /// Remove all items of a sequence and return how many have been removed.
    fn remove_all<'a, It>(&mut self, items: It) -> usize
    where
        It: IntoIterator<Item = &'a I>,
        I: 'a,
        Self: Sized,
    {
        items.into_iter().filter(|u| self.remove(u)).count()
    }

    /// Return `true` iff item `u` is contained in this set.
    fn contains(&self, u: &I) -> bool;

    /// Return `true` iff all items of the sequence are contained in this set.
    fn contains_all<'a, It>(&self, items: It) -> bool
    where
        It: IntoIterator<Item = &'a I>,
        I: 'a,
        Self: Sized,
    {
        items.into_iter().all(|u| self.contains(u))
    }
}

impl<'a, N, S> ItemSet<N> for &'a mut S
where
    S: ItemSet<N>,
{
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn insert(&mut self, u: N) -> bool {
        (**self).insert(u)
    }

    fn remove(&mut self, u: &N) -> bool {
        (**self).remove(u)
    }

    fn contains(&self, u: &N) -> bool {
        (**self).contains(u)
    }
}

/// A set of items in insertion order.
///
/// Membership is decided by `PartialEq`, so items need neither be hashable
/// nor ordered. Two sets are equal (`==`) if they contain the same items in
/// the same order, see [`Set::is_same`] for order-independent comparison.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct Set<T> {
    value: Vec<T>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Set { value: vec![] }
    }
}

impl<T> Set<T> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Return the items as a slice.
    pub fn value(&self) -> &[T] {
        &self.value
    }

    pub fn into_vec(self) -> Vec<T> {
        self.value
    }

    pub fn iter(&self) -> std::slice::Iter<T> {
        self.value.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.value.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.value.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.value.last()
    }

    /// Return the items at positions `start..=end`.
    ///
    /// `end` is clamped to the last position, an empty range returns an
    /// empty slice.
    pub fn subset(&self, start: usize, end: usize) -> &[T] {
        let end = end.saturating_add(1).min(self.value.len());
        if start >= end {
            &[]
        } else {
            &self.value[start..end]
        }
    }

    /// Remove the item at position `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index < self.value.len() {
            Ok(self.value.remove(index))
        } else {
            Err(Error::IndexOutOfBounds {
                container: Container::Set,
                index,
                len: self.value.len(),
            })
        }
    }

    /// Keep only the first `len` items.
    pub fn truncate(&mut self, len: usize) {
        self.value.truncate(len)
    }

    pub fn index_of(&self, u: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.value.iter().position(|x| x == u)
    }

    /// Create a set from distinct items, keeping their order.
    ///
    /// Fails with [`Error::Duplicate`] at the first repeated item.
    pub fn from_vec(value: Vec<T>) -> Result<Self>
    where
        T: PartialEq,
    {
        for (i, u) in value.iter().enumerate() {
            if value[..i].contains(u) {
                return Err(Error::Duplicate {
                    container: Container::Set,
                    index: i,
                });
            }
        }
        Ok(Set { value })
    }

    /// Replace the item at position `index`.
    ///
    /// Fails if the position does not exist or if `u` is already contained at
    /// another position.
    pub fn set(&mut self, index: usize, u: T) -> Result<()>
    where
        T: PartialEq,
    {
        if index >= self.value.len() {
            return Err(Error::IndexOutOfBounds {
                container: Container::Set,
                index,
                len: self.value.len(),
            });
        }
        match self.index_of(&u) {
            Some(i) if i != index => Err(Error::Duplicate {
                container: Container::Set,
                index: i,
            }),
            _ => {
                self.value[index] = u;
                Ok(())
            }
        }
    }

    /// Return `true` if both sets contain the same items, in any order.
    pub fn is_same(&self, other: &Set<T>) -> bool
    where
        T: PartialEq,
    {
        self.value.len() == other.value.len() && other.value.iter().all(|u| self.contains(u))
    }

    /// Return the smallest item.
    pub fn min(&self) -> Option<&T>
    where
        T: PartialOrd,
    {
        self.value.iter().fold(None, |m, x| match m {
            Some(m) if m <= x => Some(m),
            _ => Some(x),
        })
    }

    /// Return the largest item.
    pub fn max(&self) -> Option<&T>
    where
        T: PartialOrd,
    {
        self.value.iter().fold(None, |m, x| match m {
            Some(m) if m >= x => Some(m),
            _ => Some(x),
        })
    }

    /// Return the median of the items.
    ///
    /// For an even number of items this is the mean of the two middle items.
    pub fn median(&self) -> Option<T>
    where
        T: Num + PartialOrd + Copy,
    {
        let mut sorted = self.value.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        median_of_sorted(&sorted)
    }
}

fn median_of_sorted<T>(sorted: &[T]) -> Option<T>
where
    T: Num + Copy,
{
    let n = sorted.len();
    if n == 0 {
        None
    } else if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / (T::one() + T::one()))
    }
}

impl<T> ItemSet<T> for Set<T>
where
    T: PartialEq,
{
    fn len(&self) -> usize {
        self.value.len()
    }

    fn clear(&mut self) {
        self.value.clear()
    }

    fn insert(&mut self, u: T) -> bool {
        if self.contains(&u) {
            false
        } else {
            self.value.push(u);
            true
        }
    }

    fn remove(&mut self, u: &T) -> bool {
        match self.index_of(u) {
            Some(i) => {
                self.value.remove(i);
                true
            }
            None => false,
        }
    }

    fn contains(&self, u: &T) -> bool {
        self.value.contains(u)
    }
}

impl<T> std::iter::FromIterator<T> for Set<T>
where
    T: PartialEq,
{
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut set = Set::new();
        set.insert_all(iter);
        set
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.iter()
    }
}

impl<T> fmt::Display for Set<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_items(f, "Set", &self.value)
    }
}

/// A set of items kept in ascending order.
///
/// The items are stored in a [`Set`], each new item is placed at its sorted
/// position (found by binary search), so the order holds after every
/// mutation.
///
/// # Example
///
/// ```
/// use rs_datastruct::collections::{ItemSet, SortedSet};
///
/// let mut set: SortedSet<i32> = vec![5, 1, 3].into_iter().collect();
/// set.insert(4);
/// set.insert_all(vec![2, 3, 0]);
/// assert_eq!(set.value(), &[0, 1, 2, 3, 4, 5]);
/// assert_eq!(set.to_string(), "SortedSet(0,1,2,3,4,5)");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct SortedSet<T> {
    set: Set<T>,
}

impl<T> Default for SortedSet<T> {
    fn default() -> Self {
        SortedSet { set: Set::new() }
    }
}

impl<T> SortedSet<T> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Return the underlying set.
    pub fn as_set(&self) -> &Set<T> {
        &self.set
    }

    pub fn value(&self) -> &[T] {
        self.set.value()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.set.into_vec()
    }

    pub fn iter(&self) -> std::slice::Iter<T> {
        self.set.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.set.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.set.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.set.last()
    }

    /// Return the smallest item.
    pub fn min(&self) -> Option<&T> {
        self.set.first()
    }

    /// Return the largest item.
    pub fn max(&self) -> Option<&T> {
        self.set.last()
    }

    pub fn subset(&self, start: usize, end: usize) -> &[T] {
        self.set.subset(start, end)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.set.remove_at(index)
    }

    pub fn median(&self) -> Option<T>
    where
        T: Num + Copy,
    {
        median_of_sorted(self.set.value())
    }
}

impl<T> SortedSet<T>
where
    T: PartialOrd,
{
    /// Create a set from strictly increasing items.
    pub fn from_vec(value: Vec<T>) -> Result<Self> {
        match value
            .windows(2)
            .position(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Less))
        {
            Some(i) => Err(Error::Unsorted {
                container: Container::SortedSet,
                index: i + 1,
            }),
            None => Ok(SortedSet { set: Set { value } }),
        }
    }

    /// Search for an item.
    ///
    /// Returns `Ok(index)` if the item is contained at `index`, otherwise
    /// `Err(index)` with the position at which it would have to be inserted.
    pub fn locate(&self, u: &T) -> std::result::Result<usize, usize> {
        let value = self.set.value();
        let pos = value.partition_point(|x| x < u);
        if pos < value.len() && value[pos] == *u {
            Ok(pos)
        } else {
            Err(pos)
        }
    }

    pub fn index_of(&self, u: &T) -> Option<usize> {
        self.locate(u).ok()
    }

    /// Insert an item and return its position.
    ///
    /// The flag is `true` iff the item had not been contained before.
    pub fn insert_full(&mut self, u: T) -> (usize, bool) {
        match self.locate(&u) {
            Ok(pos) => (pos, false),
            Err(pos) => {
                self.set.value.insert(pos, u);
                (pos, true)
            }
        }
    }
}

impl<T> ItemSet<T> for SortedSet<T>
where
    T: PartialOrd,
{
    fn len(&self) -> usize {
        self.set.value.len()
    }

    fn clear(&mut self) {
        self.set.value.clear()
    }

    fn insert(&mut self, u: T) -> bool {
        self.insert_full(u).1
    }

    fn remove(&mut self, u: &T) -> bool {
        match self.locate(u) {
            Ok(pos) => {
                self.set.value.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    fn contains(&self, u: &T) -> bool {
        self.locate(u).is_ok()
    }
}

impl<T> std::iter::FromIterator<T> for SortedSet<T>
where
    T: PartialOrd,
{
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut set = SortedSet::new();
        set.insert_all(iter);
        set
    }
}

impl<T> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.iter()
    }
}

impl<T> fmt::Display for SortedSet<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_items(f, "SortedSet", self.set.value())
    }
}

#[cfg(feature = "serialize")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Data<U> {
            value: Vec<U>,
        }
        let data: Data<T> = serde::Deserialize::deserialize(deserializer)?;
        Set::from_vec(data.value).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serialize")]
impl<'de, T> serde::Deserialize<'de> for SortedSet<T>
where
    T: serde::Deserialize<'de> + PartialOrd,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(bound(deserialize = "U: serde::Deserialize<'de> + PartialEq"))]
        struct Data<U> {
            set: Set<U>,
        }
        let data: Data<T> = serde::Deserialize::deserialize(deserializer)?;
        SortedSet::from_vec(data.set.into_vec()).map_err(serde::de::Error::custom)
    }
}
