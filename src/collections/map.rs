/*
 * Copyright (c) 2018, 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use crate::collections::{ItemSet, Set, SortedSet};
use crate::error::{Container, Error, Result};

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A map from keys to lists of values (a multimap).
///
/// The keys are kept in a [`SortedSet`], the value list of the key at
/// position `i` is stored at position `i` of `values`. Every key has a
/// (possibly empty) value list.
///
/// # Example
///
/// ```
/// use rs_datastruct::Map;
///
/// let mut map = Map::new();
/// map.add("k", 1);
/// map.add("k", 2);
/// map.add("a", 3);
///
/// assert_eq!(map.get(&"k"), Some(&[1, 2][..]));
/// assert_eq!(map.keys().cloned().collect::<Vec<_>>(), vec!["a", "k"]);
/// assert_eq!(map.to_string(), "Map(a=[3], k=[1,2])");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct Map<K, V> {
    keys: SortedSet<K>,
    values: Vec<Vec<V>>,
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Map {
            keys: SortedSet::new(),
            values: vec![],
        }
    }
}

impl<K, V> Map<K, V> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a map from its keys and the value list of each key.
    ///
    /// Fails unless there is exactly one value list per key.
    pub fn from_parts(keys: SortedSet<K>, values: Vec<Vec<V>>) -> Result<Self> {
        if keys.value().len() != values.len() {
            return Err(Error::LengthMismatch {
                container: Container::Map,
                expected: keys.value().len(),
                found: values.len(),
            });
        }
        Ok(Map { keys, values })
    }

    /// Return the number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove all keys and values.
    pub fn clear(&mut self) {
        self.keys = SortedSet::new();
        self.values.clear();
    }

    /// Return the keys in ascending order.
    pub fn keys(&self) -> std::slice::Iter<K> {
        self.keys.iter()
    }

    /// Return the number of values of each key (in key order).
    pub fn sizes(&self) -> Vec<usize> {
        self.values.iter().map(Vec::len).collect()
    }

    /// Iterate over all keys with their values.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.keys.iter().zip(self.values.iter().map(Vec::as_slice))
    }

    /// Return `true` if some key has value `value`.
    pub fn has_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values.iter().any(|vs| vs.contains(value))
    }

    /// Replace every occurrence of `old` under any key by `new`.
    ///
    /// Returns the number of replaced values.
    pub fn replace_all(&mut self, old: &V, new: V) -> usize
    where
        V: PartialEq + Clone,
    {
        let mut n = 0;
        for v in self.values.iter_mut().flatten() {
            if v == old {
                *v = new.clone();
                n += 1;
            }
        }
        n
    }
}

impl<K, V> Map<K, V>
where
    K: PartialOrd,
{
    /// Create a map with the given keys, each without any value.
    pub fn with_keys<It>(keys: It) -> Self
    where
        It: IntoIterator<Item = K>,
    {
        let keys: SortedSet<K> = keys.into_iter().collect();
        let values = keys.iter().map(|_| vec![]).collect();
        Map { keys, values }
    }

    // Return the position of `key`, inserting it (with an empty list) if necessary.
    fn entry(&mut self, key: K) -> usize {
        let (pos, new) = self.keys.insert_full(key);
        if new {
            self.values.insert(pos, vec![]);
        }
        pos
    }

    /// Append `value` to the values of `key`.
    ///
    /// The key is inserted if it is not contained, yet.
    pub fn add(&mut self, key: K, value: V) {
        let pos = self.entry(key);
        self.values[pos].push(value);
    }

    /// Append `value` to the values of each key.
    pub fn add_all<It>(&mut self, keys: It, value: V)
    where
        It: IntoIterator<Item = K>,
        V: Clone,
    {
        for key in keys {
            self.add(key, value.clone());
        }
    }

    /// Return the values of `key`.
    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.keys.locate(key).ok().map(|pos| self.values[pos].as_slice())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut Vec<V>> {
        match self.keys.locate(key) {
            Ok(pos) => Some(&mut self.values[pos]),
            Err(_) => None,
        }
    }

    pub fn has_key(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Remove `key` and return its values.
    pub fn remove(&mut self, key: &K) -> Option<Vec<V>> {
        let pos = self.keys.locate(key).ok()?;
        self.keys.remove_at(pos).ok()?;
        Some(self.values.remove(pos))
    }

    /// Remove the first occurrence of `value` from the values of `key`.
    ///
    /// The key stays in the map even if its list becomes empty.
    pub fn remove_value(&mut self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        match self.get_mut(key) {
            Some(vs) => match vs.iter().position(|v| v == value) {
                Some(i) => {
                    vs.remove(i);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Remove all values of `key` but keep the key.
    pub fn clear_key(&mut self, key: &K) -> bool {
        match self.get_mut(key) {
            Some(vs) => {
                vs.clear();
                true
            }
            None => false,
        }
    }

    /// Replace the first occurrence of `old` in the values of `key` by `new`.
    pub fn replace(&mut self, key: &K, old: &V, new: V) -> bool
    where
        V: PartialEq,
    {
        match self.get_mut(key).and_then(|vs| vs.iter_mut().find(|v| *v == old)) {
            Some(v) => {
                *v = new;
                true
            }
            None => false,
        }
    }

    /// Add all keys and values of `other` to this map.
    ///
    /// Values of keys contained in both maps are appended in the order of
    /// `other`.
    pub fn merge(&mut self, other: Map<K, V>) {
        for (key, values) in other.keys.into_iter().zip(other.values) {
            let pos = self.entry(key);
            self.values[pos].extend(values);
        }
    }
}

impl<K, V> std::iter::FromIterator<(K, V)> for Map<K, V>
where
    K: PartialOrd,
{
    fn from_iter<It: IntoIterator<Item = (K, V)>>(iter: It) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for Map<K, V>
where
    K: PartialOrd,
{
    fn extend<It: IntoIterator<Item = (K, V)>>(&mut self, iter: It) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<K>, std::vec::IntoIter<Vec<V>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_vec().into_iter().zip(self.values)
    }
}

/// Count how often each distinct item occurs.
///
/// The items are returned in the order of their first occurrence.
pub fn occurrence_list<T, I>(items: I) -> Vec<(T, usize)>
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut distinct = Set::new();
    let mut counts = vec![];
    for u in items {
        match distinct.index_of(&u) {
            Some(i) => counts[i] += 1,
            None => {
                distinct.insert(u);
                counts.push(1);
            }
        }
    }
    distinct.into_vec().into_iter().zip(counts).collect()
}

/// Return the distinct items from the most to the least frequent one.
///
/// Items occurring equally often keep the order of their first occurrence.
pub fn occurrence_sort<T, I>(items: I) -> Vec<T>
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut by_count = Map::new();
    for (u, n) in occurrence_list(items) {
        by_count.add(n, u);
    }
    by_count.into_iter().rev().flat_map(|(_, us)| us).collect()
}

impl<K, V> fmt::Display for Map<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Map(")?;
        for (i, (key, values)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            write!(f, "{}=[{}]", key, values.join(","))?;
        }
        write!(f, ")")
    }
}

#[cfg(feature = "serialize")]
impl<'de, K, V> serde::Deserialize<'de> for Map<K, V>
where
    K: serde::Deserialize<'de> + PartialOrd,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(bound(deserialize = "L: serde::Deserialize<'de> + PartialOrd, W: serde::Deserialize<'de>"))]
        struct Data<L, W> {
            keys: SortedSet<L>,
            values: Vec<Vec<W>>,
        }
        let data: Data<K, V> = serde::Deserialize::deserialize(deserializer)?;
        Map::from_parts(data.keys, data.values).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::{occurrence_list, occurrence_sort, Map};
    use crate::collections::SortedSet;
    use crate::error::{Container, Error};

    #[test]
    fn test_from_parts() {
        let keys: SortedSet<u32> = vec![2, 1].into_iter().collect();
        let map = Map::from_parts(keys.clone(), vec![vec!['a'], vec![]]).unwrap();
        assert_eq!(map.get(&1), Some(&['a'][..]));
        assert_eq!(map.get(&2), Some(&[][..]));
        assert_eq!(
            Map::from_parts(keys, vec![vec!['a']]),
            Err(Error::LengthMismatch {
                container: Container::Map,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_multimap_append() {
        let mut map = Map::new();
        map.add("k", 1);
        map.add("k", 2);
        assert_eq!(map.get(&"k"), Some(&[1, 2][..]));
        assert_eq!(map.get(&"x"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_sorted_keys() {
        let map: Map<i32, char> = vec![(3, 'c'), (1, 'a'), (2, 'b'), (1, 'z')].into_iter().collect();
        assert_eq!(map.keys().cloned().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(map.sizes(), vec![2, 1, 1]);
        assert!(map.has_key(&2));
        assert!(map.has_value(&'z'));
        assert!(!map.has_value(&'q'));
    }

    #[test]
    fn test_remove() {
        let mut map = Map::with_keys(vec!["b", "a"]);
        assert_eq!(map.get(&"a"), Some(&[][..]));
        map.add_all(vec!["a", "b"], 0);
        map.add("a", 1);
        assert!(map.remove_value(&"a", &0));
        assert!(!map.remove_value(&"a", &0));
        assert_eq!(map.get(&"a"), Some(&[1][..]));

        assert_eq!(map.remove(&"b"), Some(vec![0]));
        assert_eq!(map.remove(&"b"), None);
        assert_eq!(map.keys().count(), 1);

        assert!(map.clear_key(&"a"));
        assert_eq!(map.get(&"a"), Some(&[][..]));
        assert!(!map.is_empty());
        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn test_merge() {
        let mut a: Map<&str, i32> = vec![("x", 1), ("y", 2)].into_iter().collect();
        let b: Map<&str, i32> = vec![("y", 3), ("z", 4), ("y", 5)].into_iter().collect();
        a.merge(b);
        assert_eq!(a.get(&"x"), Some(&[1][..]));
        assert_eq!(a.get(&"y"), Some(&[2, 3, 5][..]));
        assert_eq!(a.get(&"z"), Some(&[4][..]));
        assert_eq!(a.to_string(), "Map(x=[1], y=[2,3,5], z=[4])");
    }

    #[test]
    fn test_replace() {
        let mut map: Map<u8, i32> = vec![(1, 7), (1, 7), (2, 7), (2, 8)].into_iter().collect();
        assert!(map.replace(&1, &7, 0));
        assert_eq!(map.get(&1), Some(&[0, 7][..]));
        assert!(!map.replace(&3, &7, 0));
        assert_eq!(map.replace_all(&7, 9), 2);
        assert_eq!(map.get(&2), Some(&[9, 8][..]));
    }

    #[test]
    fn test_occurrences() {
        assert_eq!(
            occurrence_list("abracadabra".chars()),
            vec![('a', 5), ('b', 2), ('r', 2), ('c', 1), ('d', 1)]
        );
        assert_eq!(occurrence_sort("abracadabra".chars()), vec!['a', 'b', 'r', 'c', 'd']);
        assert_eq!(occurrence_sort(vec![3, 1, 1, 2, 2, 2]), vec![2, 1, 3]);
        assert!(occurrence_sort(Vec::<u8>::new()).is_empty());
    }
}
