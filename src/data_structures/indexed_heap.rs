use std::fmt::Debug;

use crate::{Error, Result};

/// Binary min-heap over `(key, node)` pairs with decrease-key support.
///
/// Node ids are dense in `0..capacity`. A position index maps every node
/// currently in the heap to its slot, so updating a node's key is O(log n)
/// without searching the array.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K>
where
    K: Ord + Copy + Debug,
{
    /// Heap-ordered entries
    entries: Vec<(K, usize)>,

    /// node -> slot in `entries`, `None` while the node is absent
    positions: Vec<Option<usize>>,
}

impl<K> IndexedMinHeap<K>
where
    K: Ord + Copy + Debug,
{
    /// Creates an empty heap able to hold nodes `0..capacity`
    pub fn new(capacity: usize) -> Self {
        IndexedMinHeap {
            entries: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if `node` currently has an entry
    pub fn contains(&self, node: usize) -> bool {
        self.slot_of(node).is_some()
    }

    /// Current key of `node`, if present
    pub fn key_of(&self, node: usize) -> Option<K> {
        self.slot_of(node).map(|slot| self.entries[slot].0)
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<(K, usize)> {
        self.entries.first().copied()
    }

    /// Adds `node` with `key`.
    ///
    /// Fails with `HeapCapacity` when the heap is full and with
    /// `InvalidVertex` when the node id is out of range or already present.
    pub fn insert(&mut self, key: K, node: usize) -> Result<()> {
        if self.entries.len() >= self.capacity() {
            return Err(Error::HeapCapacity(self.capacity()));
        }
        if node >= self.capacity() || self.contains(node) {
            return Err(Error::InvalidVertex(node));
        }

        let slot = self.entries.len();
        self.entries.push((key, node));
        self.positions[node] = Some(slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Overwrites the key of a node already in the heap and restores order.
    ///
    /// Works for both decreases and increases: the entry is sifted up, then
    /// down from wherever it settled.
    pub fn update(&mut self, key: K, node: usize) -> Result<()> {
        let slot = self.slot_of(node).ok_or(Error::HeapEntryMissing(node))?;
        self.entries[slot].0 = key;
        let slot = self.sift_up(slot);
        self.sift_down(slot);
        Ok(())
    }

    /// Removes and returns the entry with the smallest key
    pub fn extract_min(&mut self) -> Option<(K, usize)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let (key, node) = self.entries.pop()?;
        self.positions[node] = None;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((key, node))
    }

    /// Checks the heap property and the position index. Intended for tests.
    pub fn is_consistent(&self) -> bool {
        let ordered = (1..self.entries.len())
            .all(|slot| self.entries[(slot - 1) / 2].0 <= self.entries[slot].0);
        let indexed = self
            .entries
            .iter()
            .enumerate()
            .all(|(slot, &(_, node))| self.positions[node] == Some(slot));
        let tracked = self.positions.iter().filter(|p| p.is_some()).count() == self.entries.len();
        ordered && indexed && tracked
    }

    fn slot_of(&self, node: usize) -> Option<usize> {
        self.positions.get(node).copied().flatten()
    }

    /// Moves the entry at `slot` towards the root; returns its final slot
    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].0 >= self.entries[parent].0 {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            // Pick the smaller child before comparing against the parent
            let right = left + 1;
            let child = if right < len && self.entries[right].0 < self.entries[left].0 {
                right
            } else {
                left
            };
            if self.entries[child].0 >= self.entries[slot].0 {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions[self.entries[a].1] = Some(a);
        self.positions[self.entries[b].1] = Some(b);
    }
}
