//! A binary min-heap keyed by an integer priority.
//!
//! Equal priorities are broken by insertion order: the entry inserted most
//! recently comes out first. Tree shape depends on this, so it must not change.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapErr {
    #[error("extract from an empty heap")]
    HeapUnderflow,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    priority: usize,
    seq: u64,
    value: T,
}

impl<T> Entry<T> {
    // lower priority first, then newest first
    fn precedes(&self, other: &Self) -> bool {
        self.priority < other.priority || (self.priority == other.priority && self.seq > other.seq)
    }
}

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap {
            elements: vec![],
            next_seq: 0,
        }
    }

    pub fn heap_size(&self) -> usize {
        self.elements.len()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }

    pub fn insert(&mut self, value: T, priority: usize) {
        let entry = Entry {
            priority,
            seq: self.next_seq,
            value,
        };
        self.next_seq += 1;
        self.elements.push(entry);

        let mut i = self.elements.len() - 1;
        while i > 0 {
            let p = Self::parent(i);
            if !self.elements[i].precedes(&self.elements[p]) {
                break;
            }
            self.elements.swap(i, p);
            i = p;
        }
    }

    /// Removes the front entry, returning its value and priority.
    pub fn extract_min(&mut self) -> Result<(T, usize), HeapErr> {
        if self.elements.is_empty() {
            return Err(HeapErr::HeapUnderflow);
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let entry = self.elements.pop().ok_or(HeapErr::HeapUnderflow)?;
        self.min_heapify(0);
        Ok((entry.value, entry.priority))
    }

    fn min_heapify(&mut self, mut i: usize) {
        let n = self.heap_size();
        loop {
            let l = Self::left(i);
            let r = Self::right(i);
            let mut smallest = i;

            if l < n && self.elements[l].precedes(&self.elements[smallest]) {
                smallest = l;
            }
            if r < n && self.elements[r].precedes(&self.elements[smallest]) {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    #[cfg(test)]
    fn valid_min_heap(&self) -> bool {
        (1..self.heap_size())
            .all(|i| !self.elements[i].precedes(&self.elements[Self::parent(i)]))
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
