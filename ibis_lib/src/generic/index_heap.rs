//! A max-heap over a fixed range of keys, with a companion vector tracking the position of each key in the heap.
//!
//! Every key owns a value for the whole life of the heap, whether or not the key is currently on the heap.
//! So, a key may be removed when it becomes uninteresting and later activated again with whatever value it has accumulated in the meantime.
//!
//! The position vector is updated on every swap, push, and pop, and supports:
//! - Removal of an arbitrary key by swapping with the last element and repairing at the swap position.
//! - Revaluing a key, with a repair if the key is on the heap.

use std::cmp::Ordering;

#[derive(Debug)]
pub struct IndexHeap<V> {
    values: Vec<V>,
    heap: Vec<usize>,
    position: Vec<Option<usize>>,
}

impl<V: Copy + PartialOrd + Default> IndexHeap<V> {
    /// A heap over keys [0, keys), every key off the heap with a default value.
    pub fn with_capacity(keys: usize) -> Self {
        Self {
            values: vec![V::default(); keys],
            heap: Vec::with_capacity(keys),
            position: vec![None; keys],
        }
    }

    pub fn value_of(&self, key: usize) -> V {
        self.values[key]
    }

    /// Sets the value of a key, repairing the heap if the key is active.
    pub fn revalue(&mut self, key: usize, value: V) {
        self.values[key] = value;
        if let Some(index) = self.position[key] {
            let index = self.sift_up(index);
            self.sift_down(index);
        }
    }

    /// Places a key on the heap with its stored value.
    /// Returns false if the key was already on the heap.
    pub fn activate(&mut self, key: usize) -> bool {
        match self.position[key] {
            Some(_) => false,
            None => {
                self.heap.push(key);
                self.position[key] = Some(self.heap.len() - 1);
                self.sift_up(self.heap.len() - 1);
                true
            }
        }
    }

    /// Takes a key off the heap, keeping its value.
    /// Returns false if the key was not on the heap.
    pub fn remove(&mut self, key: usize) -> bool {
        let Some(index) = self.position[key] else {
            return false;
        };

        let last = self.heap.len() - 1;
        if index == last {
            self.heap.pop();
        } else {
            self.heap.swap(index, last);
            self.position[self.heap[index]] = Some(index);
            self.heap.pop();
            let index = self.sift_up(index);
            self.sift_down(index);
        }
        self.position[key] = None;
        true
    }

    pub fn peek_max(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    pub fn pop_max(&mut self) -> Option<usize> {
        let key = self.peek_max()?;
        self.remove(key);
        Some(key)
    }

    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in &mut self.values {
            *value = f(value)
        }
    }

    /// Restores the heap property after values have changed wholesale.
    pub fn reheap(&mut self) {
        for index in (0..self.heap.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    pub fn active_count(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<V: Copy + PartialOrd + Default> IndexHeap<V> {
    fn swap_positions(&mut self, a: usize, b: usize) {
        self.position[self.heap[a]] = Some(b);
        self.position[self.heap[b]] = Some(a);
        self.heap.swap(a, b);
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index != 0 {
            let parent = (index - 1) / 2;
            match self.values[self.heap[index]].partial_cmp(&self.values[self.heap[parent]]) {
                Some(Ordering::Greater) => {
                    self.swap_positions(index, parent);
                    index = parent;
                }
                _ => break,
            }
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) -> usize {
        loop {
            let left = (2 * index) + 1;
            if left >= self.heap.len() {
                break;
            }
            let mut largest = index;
            if let Some(Ordering::Greater) =
                self.values[self.heap[left]].partial_cmp(&self.values[self.heap[largest]])
            {
                largest = left;
            }
            let right = left + 1;
            if right < self.heap.len() {
                if let Some(Ordering::Greater) =
                    self.values[self.heap[right]].partial_cmp(&self.values[self.heap[largest]])
                {
                    largest = right;
                }
            }
            if largest == index {
                break;
            }
            self.swap_positions(index, largest);
            index = largest;
        }
        index
    }
}
