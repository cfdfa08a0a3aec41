//! Array-backed binary min-heap priority queue
//!
//! [`BinaryHeapQueue`] keeps its entries in one contiguous buffer laid out as
//! a complete binary tree: the children of position `i` sit at `2i + 1` and
//! `2i + 2`, its parent at `(i - 1) / 2`. Every entry weighs at least as much
//! as its parent, so the root always holds a minimum.
//!
//! The buffer has an explicit logical capacity governed by a
//! [`ResizePolicy`]: it grows geometrically when an enqueue finds it full and
//! shrinks by the same factor when a dequeue leaves it sparsely filled.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity          |
//! |------------|---------------------|
//! | `enqueue`  | O(log n) amortized  |
//! | `dequeue`  | O(log n) amortized  |
//! | `peek`     | O(1)                |
//! | `len`      | O(1)                |
//!
//! # Example
//!
//! ```rust
//! use heap_pqueue::{BinaryHeapQueue, Entry, QueueError};
//!
//! let mut queue = BinaryHeapQueue::new();
//! queue.enqueue(Entry::new("three", 3));
//! queue.enqueue(Entry::new("one", 1));
//! queue.enqueue(Entry::new("two", 2));
//!
//! assert_eq!(queue.peek(), Ok(&Entry::new("one", 1)));
//! assert_eq!(queue.dequeue(), Ok(Entry::new("one", 1)));
//! assert_eq!(queue.dequeue(), Ok(Entry::new("two", 2)));
//! assert_eq!(queue.dequeue(), Ok(Entry::new("three", 3)));
//! assert_eq!(queue.dequeue(), Err(QueueError::Empty { op: "dequeue" }));
//! ```

use std::fmt;
use std::iter::FusedIterator;

use log::{debug, trace};

use crate::entry::Entry;
use crate::error::QueueError;
use crate::policy::ResizePolicy;

/// A binary min-heap of [`Entry`] values with managed capacity
///
/// Entries with equal weights come out in no particular order.
#[derive(Debug)]
pub struct BinaryHeapQueue<L, W> {
    /// Heap-ordered entries; `data.len()` is the queue length
    data: Vec<Entry<L, W>>,
    /// Logical capacity, always `>= data.len()`
    capacity: usize,
    policy: ResizePolicy,
}

impl<L, W: PartialOrd> BinaryHeapQueue<L, W> {
    /// Creates an empty queue with the default [`ResizePolicy`]
    pub fn new() -> Self {
        Self::with_policy(ResizePolicy::default())
    }

    /// Creates an empty queue whose buffer follows `policy`
    pub fn with_policy(policy: ResizePolicy) -> Self {
        if policy != ResizePolicy::default() {
            debug!(
                "heap queue policy: initial capacity {}, grow factor {}, shrink threshold {}",
                policy.initial_capacity(),
                policy.grow_factor(),
                policy.shrink_threshold()
            );
        }
        let capacity = policy.initial_capacity();
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            policy,
        }
    }

    /// Returns the number of entries in the queue
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the queue holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of slots currently allocated for entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the policy driving growth and shrinking
    pub fn policy(&self) -> &ResizePolicy {
        &self.policy
    }

    /// Inserts an entry
    ///
    /// Grows the buffer first when it is full. Never fails.
    pub fn enqueue(&mut self, entry: Entry<L, W>) {
        if self.data.len() == self.capacity {
            self.resize(self.policy.grown(self.capacity));
        }
        self.data.push(entry);
        self.bubble_up(self.data.len() - 1);
    }

    /// Removes and returns a minimum-weight entry
    ///
    /// May shrink the buffer afterwards if it has become sparsely filled.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<Entry<L, W>, QueueError> {
        if self.data.is_empty() {
            return Err(QueueError::Empty { op: "dequeue" });
        }

        // Moves the last entry into the root slot
        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.bubble_down(0);
        }

        if let Some(target) = self.policy.shrink_target(self.data.len(), self.capacity) {
            self.resize(target);
        }
        Ok(root)
    }

    /// Returns a minimum-weight entry without removing it
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue is empty.
    pub fn peek(&self) -> Result<&Entry<L, W>, QueueError> {
        self.data.first().ok_or(QueueError::Empty { op: "peek" })
    }

    /// Dequeues every entry, lightest first
    ///
    /// Entries not consumed by the iterator stay in the queue.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, L, W> {
        DrainSorted { queue: self }
    }

    /// Consumes the queue and returns its entries in non-decreasing weight order
    pub fn into_sorted_vec(mut self) -> Vec<Entry<L, W>> {
        self.drain_sorted().collect()
    }

    /// Returns a level-by-level rendering of the heap buffer for debugging
    ///
    /// The layout is a diagnostic aid only and may change between versions.
    pub fn tree_view(&self) -> TreeView<'_, L, W> {
        TreeView { data: &self.data }
    }

    /// Reallocates the buffer to hold exactly `new_capacity` entries
    fn resize(&mut self, new_capacity: usize) {
        assert!(
            new_capacity >= self.data.len(),
            "resize to {} would drop entries (len {})",
            new_capacity,
            self.data.len()
        );
        trace!(
            "heap queue resize: {} -> {} (len {})",
            self.capacity,
            new_capacity,
            self.data.len()
        );
        if new_capacity > self.data.capacity() {
            self.data.reserve_exact(new_capacity - self.data.len());
        } else {
            self.data.shrink_to(new_capacity);
        }
        self.capacity = new_capacity;
    }

    /// Move entry at index up while it is lighter than its parent
    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].weight < self.data[parent].weight {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move entry at index down while a child is lighter
    fn bubble_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left].weight < self.data[smallest].weight {
                smallest = left;
            }
            if right < len && self.data[right].weight < self.data[smallest].weight {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<L: Clone, W: Clone> Clone for BinaryHeapQueue<L, W> {
    /// Clones entries into a buffer reserved for the full logical capacity
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
            policy: self.policy,
        }
    }
}

impl<L, W: PartialOrd> Default for BinaryHeapQueue<L, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, W: PartialOrd> Extend<Entry<L, W>> for BinaryHeapQueue<L, W> {
    fn extend<I: IntoIterator<Item = Entry<L, W>>>(&mut self, iter: I) {
        for entry in iter {
            self.enqueue(entry);
        }
    }
}

impl<L, W: PartialOrd> FromIterator<Entry<L, W>> for BinaryHeapQueue<L, W> {
    fn from_iter<I: IntoIterator<Item = Entry<L, W>>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Iterator returned by [`BinaryHeapQueue::drain_sorted`]
#[derive(Debug)]
pub struct DrainSorted<'a, L, W> {
    queue: &'a mut BinaryHeapQueue<L, W>,
}

impl<L, W: PartialOrd> Iterator for DrainSorted<'_, L, W> {
    type Item = Entry<L, W>;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<L, W: PartialOrd> ExactSizeIterator for DrainSorted<'_, L, W> {}

impl<L, W: PartialOrd> FusedIterator for DrainSorted<'_, L, W> {}

/// Diagnostic view returned by [`BinaryHeapQueue::tree_view`]
///
/// Displays one heap level per line.
#[derive(Debug)]
pub struct TreeView<'a, L, W> {
    data: &'a [Entry<L, W>],
}

impl<'a, L, W> TreeView<'a, L, W> {
    /// Returns the heap levels, root first
    ///
    /// Level `d` covers buffer positions `2^d - 1 .. 2^(d+1) - 1`; the last
    /// level may be partial.
    pub fn levels(&self) -> impl Iterator<Item = &'a [Entry<L, W>]> + 'a {
        let data = self.data;
        let mut start = 0;
        let mut width = 1;
        std::iter::from_fn(move || {
            if start >= data.len() {
                return None;
            }
            let end = (start + width).min(data.len());
            let level = &data[start..end];
            start = end;
            width *= 2;
            Some(level)
        })
    }
}

impl<L: fmt::Display, W: fmt::Display> fmt::Display for TreeView<'_, L, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Heap contents (tree view):")?;
        for level in self.levels() {
            let mut first = true;
            for entry in level {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}", entry)?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
