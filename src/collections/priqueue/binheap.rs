// Copyright (c) 2016, 2017, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Binary heap implementation

use crate::collections::ItemPriQueue;

/// Heap item information.
struct BinHeapItem<K, V> {
    /// The key associated with this item.
    key: K,
    /// The value (priority) of the item.
    value: V,
    /// Insertion stamp, breaks ties between equal values.
    seq: u64,
    /// Position of this element on the heap.
    pos: usize,
}

/// Binary heap with stable ties.
///
/// Among elements with equal values the one pushed first is popped first.
/// Decreasing the value of an element keeps its original insertion stamp.
pub struct BinHeap<K, V> {
    /// The heap elements (indices into `data`).
    heap: Vec<usize>,
    /// The data of each element, including removed ones.
    data: Vec<BinHeapItem<K, V>>,
    /// Slots in `data` that may be reused.
    free: Vec<usize>,
    /// Next insertion stamp.
    seq: u64,
}

impl<K, V> BinHeap<K, V> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<K, V> Default for BinHeap<K, V> {
    fn default() -> Self {
        BinHeap {
            heap: vec![],
            data: vec![],
            free: vec![],
            seq: 0,
        }
    }
}

impl<K, V> ItemPriQueue<K, V> for BinHeap<K, V>
where
    K: Clone,
    V: PartialOrd + Clone,
{
    type Item = usize;

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.data.clear();
        self.free.clear();
        self.seq = 0;
    }

    fn value(&self, item: &usize) -> &V {
        &self.data[*item].value
    }

    fn push(&mut self, key: K, value: V) -> usize {
        let data = BinHeapItem {
            key,
            value,
            seq: self.seq,
            pos: self.heap.len(),
        };
        self.seq += 1;
        let item = if let Some(item) = self.free.pop() {
            self.data[item] = data;
            item
        } else {
            self.data.push(data);
            self.data.len() - 1
        };
        self.heap.push(item);
        self.upheap(item);
        item
    }

    fn decrease_key(&mut self, item: &mut usize, value: V) -> bool {
        if value < self.data[*item].value {
            self.data[*item].value = value;
            self.upheap(*item);
            true
        } else {
            false
        }
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }

        let min_item = self.heap.swap_remove(0);
        self.free.push(min_item);
        if let Some(&item) = self.heap.first() {
            self.data[item].pos = 0;
            self.downheap(item);
        }
        let data = &self.data[min_item];
        Some((data.key.clone(), data.value.clone()))
    }
}

impl<K, V> BinHeap<K, V>
where
    V: PartialOrd,
{
    /// Return `true` if item `a` must be popped before item `b`.
    fn precedes(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.data[a], &self.data[b]);
        a.value < b.value || (!(b.value < a.value) && a.seq < b.seq)
    }

    // Store `item` at heap position `pos`.
    fn place(&mut self, item: usize, pos: usize) {
        self.heap[pos] = item;
        self.data[item].pos = pos;
    }

    /// Move the element `item` up in the heap until its parent precedes it or
    /// the root node is reached.
    fn upheap(&mut self, item: usize) {
        let mut cur_pos = self.data[item].pos;
        while cur_pos > 0 {
            let parent_pos = (cur_pos - 1) / 2;
            let parent = self.heap[parent_pos];
            if !self.precedes(item, parent) {
                break;
            }
            self.place(parent, cur_pos);
            cur_pos = parent_pos;
        }
        self.place(item, cur_pos);
    }

    /// Move the element `item` down in the heap until it precedes all its
    /// children.
    fn downheap(&mut self, item: usize) {
        let n = self.heap.len();
        let mut cur_pos = self.data[item].pos;
        loop {
            let left_pos = 2 * cur_pos + 1;
            if left_pos >= n {
                break;
            }
            let right_pos = left_pos + 1;
            let next_pos = if right_pos < n && self.precedes(self.heap[right_pos], self.heap[left_pos]) {
                right_pos
            } else {
                left_pos
            };
            let next = self.heap[next_pos];
            if !self.precedes(next, item) {
                break;
            }
            self.place(next, cur_pos);
            cur_pos = next_pos;
        }
        self.place(item, cur_pos);
    }
}
