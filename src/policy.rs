//! Capacity management policy
//!
//! A [`ResizePolicy`] decides when the queue's backing buffer grows and when
//! it shrinks. Growth is geometric so that copying is amortised O(1) per
//! insertion; shrinking divides by the same factor once the queue falls below
//! a fraction of its capacity.
//!
//! | Parameter          | Default | Constraint                    |
//! |--------------------|---------|-------------------------------|
//! | `initial_capacity` | 100     | `>= 1`                        |
//! | `grow_factor`      | 2.0     | finite, `> 1`                 |
//! | `shrink_threshold` | 0.25    | finite, `0 <= t < 1 / grow`   |
//!
//! The last constraint keeps a single enqueue and a single dequeue from
//! flipping the capacity back and forth. Shrink targets are additionally
//! floored at `len + 1`, so a shrink always leaves a free slot.
//!
//! # Example
//!
//! ```rust
//! use heap_pqueue::policy::ResizePolicy;
//!
//! let policy = ResizePolicy::new(16, 1.5, 0.3).unwrap();
//! assert_eq!(policy.grown(16), 24);
//! assert_eq!(policy.shrink_target(3, 24), Some(16));
//!
//! // 0.5 >= 1 / 2.0: growth and shrink would undo each other
//! assert!(ResizePolicy::new(16, 2.0, 0.5).is_err());
//! ```

use crate::error::PolicyError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Growth and shrink parameters for a [`BinaryHeapQueue`](crate::BinaryHeapQueue)
///
/// Always valid once constructed: the only ways to obtain one are
/// [`ResizePolicy::new`], [`Default`], and (with the `serde` feature)
/// deserialisation, which runs the same checks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawResizePolicy"))]
pub struct ResizePolicy {
    initial_capacity: usize,
    grow_factor: f64,
    shrink_threshold: f64,
}

impl ResizePolicy {
    /// Default starting capacity
    pub const DEFAULT_INITIAL_CAPACITY: usize = 100;
    /// Default multiplier applied on overflow
    pub const DEFAULT_GROW_FACTOR: f64 = 2.0;
    /// Default fill fraction below which the buffer shrinks
    pub const DEFAULT_SHRINK_THRESHOLD: f64 = 0.25;

    /// Validates and builds a policy
    ///
    /// # Errors
    ///
    /// - [`PolicyError::ZeroInitialCapacity`] if `initial_capacity` is 0
    /// - [`PolicyError::GrowFactor`] unless `grow_factor` is finite and `> 1`
    /// - [`PolicyError::ShrinkThreshold`] unless `shrink_threshold` is finite and `>= 0`
    /// - [`PolicyError::Thrashing`] if `shrink_threshold >= 1 / grow_factor`
    pub fn new(
        initial_capacity: usize,
        grow_factor: f64,
        shrink_threshold: f64,
    ) -> Result<Self, PolicyError> {
        if initial_capacity == 0 {
            return Err(PolicyError::ZeroInitialCapacity);
        }
        if !grow_factor.is_finite() || grow_factor <= 1.0 {
            return Err(PolicyError::GrowFactor(grow_factor));
        }
        if !shrink_threshold.is_finite() || shrink_threshold < 0.0 {
            return Err(PolicyError::ShrinkThreshold(shrink_threshold));
        }
        let limit = grow_factor.recip();
        if shrink_threshold >= limit {
            return Err(PolicyError::Thrashing {
                threshold: shrink_threshold,
                limit,
            });
        }
        Ok(Self {
            initial_capacity,
            grow_factor,
            shrink_threshold,
        })
    }

    /// Capacity of a freshly created queue, and the floor for shrinking
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Multiplier applied to the capacity on overflow
    pub fn grow_factor(&self) -> f64 {
        self.grow_factor
    }

    /// Fill fraction below which a dequeue shrinks the buffer
    pub fn shrink_threshold(&self) -> f64 {
        self.shrink_threshold
    }

    /// Capacity to grow to when a queue of `capacity` entries is full
    ///
    /// Always strictly larger than `capacity`, even when the factor is close
    /// to 1 and the capacity is small.
    pub fn grown(&self, capacity: usize) -> usize {
        let scaled = (capacity as f64 * self.grow_factor) as usize;
        scaled.max(capacity.saturating_add(1))
    }

    /// Capacity to shrink to after a dequeue left `len` entries, if any
    ///
    /// Returns `None` when the fill level is at or above the threshold, or
    /// when the floors (`initial_capacity` and `len + 1`) leave nothing to
    /// reclaim.
    pub fn shrink_target(&self, len: usize, capacity: usize) -> Option<usize> {
        if (len as f64) >= self.shrink_threshold * capacity as f64 {
            return None;
        }
        let target = ((capacity as f64 / self.grow_factor) as usize)
            .max(self.initial_capacity)
            .max(len + 1);
        (target < capacity).then_some(target)
    }
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            grow_factor: Self::DEFAULT_GROW_FACTOR,
            shrink_threshold: Self::DEFAULT_SHRINK_THRESHOLD,
        }
    }
}

/// Unvalidated mirror of [`ResizePolicy`] used as the deserialisation source
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawResizePolicy {
    initial_capacity: usize,
    grow_factor: f64,
    shrink_threshold: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawResizePolicy> for ResizePolicy {
    type Error = PolicyError;

    fn try_from(raw: RawResizePolicy) -> Result<Self, Self::Error> {
        Self::new(raw.initial_capacity, raw.grow_factor, raw.shrink_threshold)
    }
}
