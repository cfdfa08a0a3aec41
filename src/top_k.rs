//! Streaming top-K selection on top of [`BinaryHeapQueue`]
//!
//! A [`TopKSelector`] keeps the `k` heaviest entries seen so far in a min-heap
//! of at most `k` entries: each new entry is enqueued, and whenever the queue
//! holds `k + 1` entries the lightest one is dequeued. Memory stays O(k) and
//! each offer costs O(log k).
//!
//! For the `k` lightest entries, [`smallest_k`] runs the same selection over
//! reversed weights.
//!
//! # Example
//!
//! ```rust
//! use heap_pqueue::{top_k, smallest_k, Entry};
//!
//! let peaks = vec![
//!     Entry::new("Denali", 6190),
//!     Entry::new("Whitney", 4421),
//!     Entry::new("Rainier", 4392),
//!     Entry::new("Elbert", 4401),
//! ];
//!
//! let highest = top_k(peaks.clone(), 2);
//! assert_eq!(highest, vec![Entry::new("Denali", 6190), Entry::new("Whitney", 4421)]);
//!
//! let lowest = smallest_k(peaks, 1);
//! assert_eq!(lowest, vec![Entry::new("Rainier", 4392)]);
//! ```

use std::cmp::Reverse;

use crate::binary_heap_queue::BinaryHeapQueue;
use crate::entry::Entry;
use crate::policy::ResizePolicy;

/// Bounded selector retaining the `k` heaviest entries of a stream
#[derive(Debug, Clone)]
pub struct TopKSelector<L, W> {
    k: usize,
    queue: BinaryHeapQueue<L, W>,
}

impl<L, W: PartialOrd> TopKSelector<L, W> {
    /// Creates a selector that retains at most `k` entries
    ///
    /// The queue never holds more than `k + 1` entries, so its buffer starts
    /// at that size, capped at the default initial capacity for large `k`.
    pub fn new(k: usize) -> Self {
        let initial = k
            .saturating_add(1)
            .min(ResizePolicy::DEFAULT_INITIAL_CAPACITY);
        let policy = ResizePolicy::new(
            initial,
            ResizePolicy::DEFAULT_GROW_FACTOR,
            ResizePolicy::DEFAULT_SHRINK_THRESHOLD,
        )
        .unwrap_or_default();
        Self {
            k,
            queue: BinaryHeapQueue::with_policy(policy),
        }
    }

    /// Number of entries the selector retains at most
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of entries currently retained
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if nothing has been retained yet
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the lightest retained entry, the one the next heavier offer evicts
    pub fn threshold(&self) -> Option<&Entry<L, W>> {
        self.queue.peek().ok()
    }

    /// Offers an entry, evicting the lightest retained one if over capacity
    pub fn offer(&mut self, entry: Entry<L, W>) {
        if self.k == 0 {
            return;
        }
        self.queue.enqueue(entry);
        if self.queue.len() > self.k {
            let _evicted = self.queue.dequeue();
        }
    }

    /// Consumes the selector and returns the retained entries, heaviest first
    pub fn into_sorted_vec(self) -> Vec<Entry<L, W>> {
        let mut entries = self.queue.into_sorted_vec();
        entries.reverse();
        entries
    }
}

impl<L, W: PartialOrd> Extend<Entry<L, W>> for TopKSelector<L, W> {
    fn extend<I: IntoIterator<Item = Entry<L, W>>>(&mut self, iter: I) {
        for entry in iter {
            self.offer(entry);
        }
    }
}

/// Returns the `k` heaviest entries, heaviest first
///
/// Fewer than `k` entries come back when the input is shorter. Among equal
/// weights, which entries survive is unspecified.
pub fn top_k<L, W, I>(entries: I, k: usize) -> Vec<Entry<L, W>>
where
    W: PartialOrd,
    I: IntoIterator<Item = Entry<L, W>>,
{
    let mut selector = TopKSelector::new(k);
    selector.extend(entries);
    selector.into_sorted_vec()
}

/// Returns the `k` lightest entries, lightest first
pub fn smallest_k<L, W, I>(entries: I, k: usize) -> Vec<Entry<L, W>>
where
    W: PartialOrd,
    I: IntoIterator<Item = Entry<L, W>>,
{
    top_k(entries.into_iter().map(|entry| entry.map_weight(Reverse)), k)
        .into_iter()
        .map(|entry| entry.map_weight(|Reverse(weight)| weight))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_case() {
        let stream = vec![
            Entry::new("A", 1),
            Entry::new("B", 2),
            Entry::new("C", 3),
            Entry::new("D", 4),
        ];
        assert_eq!(
            top_k(stream, 3),
            vec![Entry::new("D", 4), Entry::new("C", 3), Entry::new("B", 2)]
        );
    }

    #[test]
    fn test_zero_k_retains_nothing() {
        let mut selector = TopKSelector::new(0);
        selector.offer(Entry::new("A", 1));
        assert!(selector.is_empty());
        assert_eq!(selector.threshold(), None);
        assert_eq!(selector.into_sorted_vec(), vec![]);
    }

    #[test]
    fn test_threshold_tracks_lightest_retained() {
        let mut selector = TopKSelector::new(2);
        assert_eq!(selector.k(), 2);
        selector.offer(Entry::new("a", 5));
        assert_eq!(selector.threshold(), Some(&Entry::new("a", 5)));
        selector.offer(Entry::new("b", 9));
        selector.offer(Entry::new("c", 7));
        assert_eq!(selector.len(), 2);
        assert_eq!(selector.threshold(), Some(&Entry::new("c", 7)));
    }

    #[test]
    fn test_buffer_sized_from_k() {
        let mut small: TopKSelector<&str, i32> = TopKSelector::new(2);
        assert_eq!(small.queue.capacity(), 3);
        small.extend((0..50).map(|w| Entry::new("", w)));
        // k + 1 slots are enough for the whole stream
        assert_eq!(small.queue.capacity(), 3);
        assert_eq!(small.into_sorted_vec(), vec![Entry::new("", 49), Entry::new("", 48)]);

        let empty: TopKSelector<(), i32> = TopKSelector::new(0);
        assert_eq!(empty.queue.capacity(), 1);

        let large: TopKSelector<(), i32> = TopKSelector::new(100_000);
        assert_eq!(large.queue.capacity(), ResizePolicy::DEFAULT_INITIAL_CAPACITY);
    }

    #[test]
    fn test_smallest_k_ascending() {
        let stream = [3, -1, 4, 1, -5, 9, 2, 6].map(|w| Entry::new((), w));
        let weights: Vec<i32> = smallest_k(stream, 4).into_iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![-5, -1, 1, 2]);
    }
}
