//! Error types for queue operations and policy construction

use thiserror::Error;

/// Error returned by queue operations that need at least one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `dequeue` or `peek` was called on an empty queue
    #[error("cannot {op} from an empty queue")]
    Empty {
        /// Name of the rejected operation
        op: &'static str,
    },
}

/// Error returned when a [`ResizePolicy`](crate::policy::ResizePolicy) is rejected
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PolicyError {
    /// The initial capacity must hold at least one entry
    #[error("initial capacity must be at least 1")]
    ZeroInitialCapacity,
    /// The grow factor must be a finite number greater than 1
    #[error("grow factor must be finite and greater than 1, got {0}")]
    GrowFactor(f64),
    /// The shrink threshold must be a finite, non-negative fraction
    #[error("shrink threshold must be finite and non-negative, got {0}")]
    ShrinkThreshold(f64),
    /// A threshold at or above `1 / grow_factor` lets grow and shrink undo each other
    #[error("shrink threshold {threshold} must be below 1 / grow factor ({limit})")]
    Thrashing {
        /// Requested shrink threshold
        threshold: f64,
        /// Exclusive upper bound, `1 / grow_factor`
        limit: f64,
    },
}
