//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the queue invariants are always maintained.

use heap_pqueue::{smallest_k, top_k, BinaryHeapQueue, Entry, ResizePolicy};
use proptest::prelude::*;

/// Test that every peek matches the minimum of a reference multiset
fn test_push_pop_invariant(
    policy: ResizePolicy,
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut queue = BinaryHeapQueue::with_policy(policy);
    let mut inserted = Vec::new();

    for (should_pop, value) in ops {
        if should_pop && !queue.is_empty() {
            let popped = queue.dequeue().map(|e| e.weight);
            prop_assert_eq!(popped, Ok(*inserted.iter().min().unwrap()));
            let pos = inserted.iter().position(|&w| Ok(w) == popped).unwrap();
            inserted.swap_remove(pos);
        } else {
            queue.enqueue(Entry::new(value, value));
            inserted.push(value);
        }

        prop_assert_eq!(queue.len(), inserted.len());
        prop_assert_eq!(queue.is_empty(), inserted.is_empty());
        prop_assert!(queue.capacity() >= queue.len());
        prop_assert_eq!(
            queue.peek().ok().map(|e| e.weight),
            inserted.iter().min().copied()
        );
    }

    Ok(())
}

/// Test that draining returns the inserted multiset in non-decreasing order
fn test_drain_order_invariant(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut queue = BinaryHeapQueue::new();
    for (i, val) in values.iter().enumerate() {
        queue.enqueue(Entry::new(i, *val));
    }

    let drained = queue.into_sorted_vec();
    prop_assert_eq!(drained.len(), values.len());

    for pair in drained.windows(2) {
        prop_assert!(pair[0].weight <= pair[1].weight);
    }

    // Every label comes back exactly once, still paired with its weight
    let mut labels: Vec<usize> = drained.iter().map(|e| e.label).collect();
    labels.sort_unstable();
    prop_assert_eq!(labels, (0..values.len()).collect::<Vec<_>>());
    for entry in &drained {
        prop_assert_eq!(entry.weight, values[entry.label]);
    }

    Ok(())
}

/// Test that a grow never undoes a shrink, or vice versa, on adjacent operations
fn test_no_thrash_invariant(
    policy: ResizePolicy,
    fill: usize,
    drain: usize,
) -> Result<(), TestCaseError> {
    let mut queue = BinaryHeapQueue::with_policy(policy);
    for i in 0..fill {
        queue.enqueue(Entry::new((), i));
    }
    for _ in 0..drain.min(fill) {
        let before = queue.capacity();
        queue.dequeue().unwrap();
        let after_dequeue = queue.capacity();
        if after_dequeue < before {
            // Just shrank: the next enqueue must fit without growing
            queue.enqueue(Entry::new((), 0));
            prop_assert_eq!(queue.capacity(), after_dequeue);
            queue.dequeue().unwrap();
        }
    }

    let before = queue.capacity();
    while queue.len() < before {
        queue.enqueue(Entry::new((), 1));
    }
    queue.enqueue(Entry::new((), 1));
    let grown = queue.capacity();
    prop_assert!(grown > before);
    // Just grew: the next dequeue must not shrink
    queue.dequeue().unwrap();
    prop_assert_eq!(queue.capacity(), grown);

    Ok(())
}

fn policy_strategy() -> impl Strategy<Value = ResizePolicy> {
    (1usize..64, 1.05f64..4.0, 0.0f64..0.99).prop_map(|(initial, grow, fraction)| {
        // Scale the threshold into the valid range below 1 / grow
        ResizePolicy::new(initial, grow, fraction / grow).unwrap()
    })
}

proptest! {
    #[test]
    fn test_default_policy_push_pop_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..400)) {
        test_push_pop_invariant(ResizePolicy::default(), ops)?;
    }

    #[test]
    fn test_random_policy_push_pop_invariant(
        policy in policy_strategy(),
        ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..400)
    ) {
        test_push_pop_invariant(policy, ops)?;
    }

    #[test]
    fn test_drain_order(values in prop::collection::vec(-1000i32..1000, 0..500)) {
        test_drain_order_invariant(values)?;
    }

    #[test]
    fn test_no_thrash(policy in policy_strategy(), fill in 0usize..600, drain in 0usize..600) {
        test_no_thrash_invariant(policy, fill, drain)?;
    }

    #[test]
    fn test_top_k_matches_sort(values in prop::collection::vec(-100i32..100, 0..200), k in 0usize..50) {
        let entries: Vec<_> = values.iter().map(|&w| Entry::new((), w)).collect();

        let mut descending = values.clone();
        descending.sort_unstable_by(|a, b| b.cmp(a));
        descending.truncate(k);
        let top: Vec<i32> = top_k(entries.clone(), k).into_iter().map(|e| e.weight).collect();
        prop_assert_eq!(top, descending);

        let mut ascending = values.clone();
        ascending.sort_unstable();
        ascending.truncate(k);
        let bottom: Vec<i32> = smallest_k(entries, k).into_iter().map(|e| e.weight).collect();
        prop_assert_eq!(bottom, ascending);
    }
}
