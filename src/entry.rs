//! Labelled, weighted records stored in the queue
//!
//! An [`Entry`] pairs an opaque label with a weight. Only the weight takes
//! part in ordering; labels are carried along untouched and need not be
//! unique.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A `(label, weight)` pair
///
/// Weights only need `PartialOrd`: the queue compares them with `<` and
/// nothing else, so both integers and floats work.
///
/// # Example
///
/// ```rust
/// use heap_pqueue::Entry;
///
/// let entry = Entry::new("Mount Whitney", 4421);
/// assert_eq!(entry.label, "Mount Whitney");
/// assert_eq!(entry.weight, 4421);
/// assert_eq!(entry.to_string(), "Mount Whitney (4421)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry<L, W> {
    /// Identifying key, opaque to the queue
    pub label: L,
    /// Ordering key
    pub weight: W,
}

impl<L, W> Entry<L, W> {
    /// Creates a new entry
    pub fn new(label: L, weight: W) -> Self {
        Self { label, weight }
    }

    /// Splits the entry back into its parts
    pub fn into_parts(self) -> (L, W) {
        (self.label, self.weight)
    }

    /// Replaces the weight while keeping the label
    pub fn map_weight<V>(self, f: impl FnOnce(W) -> V) -> Entry<L, V> {
        Entry {
            label: self.label,
            weight: f(self.weight),
        }
    }
}

impl<L, W> From<(L, W)> for Entry<L, W> {
    fn from((label, weight): (L, W)) -> Self {
        Self::new(label, weight)
    }
}

impl<L: fmt::Display, W: fmt::Display> fmt::Display for Entry<L, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.weight)
    }
}
