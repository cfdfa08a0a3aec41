//! Array-backed binary min-heap priority queue with top-K selection
//!
//! This crate provides a single priority queue, [`BinaryHeapQueue`], that
//! stores `(label, weight)` [`Entry`] values in one contiguous buffer and
//! always yields a minimum-weight entry first. Its buffer grows and shrinks
//! geometrically under a validated [`ResizePolicy`], so storage follows the
//! queue's size without thrashing between the two.
//!
//! On top of it, [`TopKSelector`] keeps the `k` heaviest entries of a stream
//! in O(k) memory.
//!
//! # Features
//!
//! - **Binary heap queue**: O(log n) amortized enqueue and dequeue, O(1) peek
//! - **Managed capacity**: geometric growth and shrink with a no-thrash guarantee
//! - **Typed errors**: dequeue and peek on an empty queue return [`QueueError`]
//! - **Top-K selection**: [`top_k`] and [`smallest_k`] over any entry stream
//! - **`serde`** (optional feature): serialisation for [`Entry`] and [`ResizePolicy`]
//!
//! # Example
//!
//! ```rust
//! use heap_pqueue::{BinaryHeapQueue, Entry};
//!
//! let mut queue = BinaryHeapQueue::new();
//! queue.enqueue(Entry::new("item1", 5));
//! queue.enqueue(Entry::new("item2", 3));
//! assert_eq!(queue.peek().map(|e| e.label), Ok("item2"));
//! assert_eq!(queue.dequeue().map(|e| e.weight), Ok(3));
//! ```
//!
//! The queue is not synchronised; share it across threads behind a lock.

pub mod binary_heap_queue;
pub mod entry;
pub mod error;
pub mod policy;
pub mod top_k;

// Re-export the main types for convenience
pub use binary_heap_queue::BinaryHeapQueue;
pub use entry::Entry;
pub use error::{PolicyError, QueueError};
pub use policy::ResizePolicy;
pub use top_k::{smallest_k, top_k, TopKSelector};
