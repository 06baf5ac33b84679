//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the layout invariants are always maintained.

use proptest::prelude::*;
use rust_implicit_heaps::geometry::{block_edges, children_of, level_of, parents_of};
use rust_implicit_heaps::heap::{Beap, ImplicitHeap, UniparentalHeap};
use rust_implicit_heaps::{dispatch, Layout, PriorityQueue, Variant};

/// Test that push and pop keep the minimum and the ordering correct
fn test_push_pop_invariant<L: Layout>(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = ImplicitHeap::<i32, L>::new();
    let mut inserted = Vec::new();

    for (should_pop, value) in ops {
        if should_pop && !heap.is_empty() {
            let expected = inserted.iter().min().copied();
            let popped = heap.pop();
            prop_assert_eq!(popped, expected);
            if let Some(pos) = inserted.iter().position(|&k| Some(k) == popped) {
                inserted.remove(pos);
            }
        } else {
            heap.push(value);
            inserted.push(value);
        }

        prop_assert!(heap.is_valid());
        prop_assert_eq!(heap.len(), inserted.len());
        prop_assert_eq!(heap.peek().copied(), inserted.iter().min().copied());
        prop_assert_eq!(heap.peek_max().copied(), inserted.iter().max().copied());
    }

    Ok(())
}

/// Test that all popped keys are in non-decreasing order
fn test_pop_order_invariant<H: PriorityQueue<i32>>(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap = H::new();

    for val in &values {
        heap.push(*val);
    }

    let mut sorted = values.clone();
    sorted.sort();

    let mut popped = Vec::new();
    while let Some(key) = heap.pop() {
        popped.push(key);
    }
    prop_assert_eq!(popped, sorted);

    Ok(())
}

/// Test that search finds a key exactly when it is present
fn test_search_invariant(variant: Variant, values: Vec<i32>, probes: Vec<i32>) -> Result<(), TestCaseError> {
    let mut keys = Vec::new();
    for val in &values {
        dispatch::insert(&mut keys, *val, variant);
    }

    for probe in values.iter().chain(&probes) {
        match dispatch::search(&keys, probe, variant) {
            Some(index) => prop_assert_eq!(keys[index], *probe),
            None => prop_assert!(!keys.contains(probe)),
        }
    }

    Ok(())
}

proptest! {
    #[test]
    fn test_uniparental_push_pop_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_push_pop_invariant::<rust_implicit_heaps::Uniparental>(ops)?;
    }

    #[test]
    fn test_biparental_push_pop_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_push_pop_invariant::<rust_implicit_heaps::Biparental>(ops)?;
    }

    #[test]
    fn test_uniparental_pop_order_invariant(values in prop::collection::vec(-1000i32..1000, 0..300)) {
        test_pop_order_invariant::<UniparentalHeap<i32>>(values)?;
    }

    #[test]
    fn test_biparental_pop_order_invariant(values in prop::collection::vec(-1000i32..1000, 0..300)) {
        test_pop_order_invariant::<Beap<i32>>(values)?;
    }

    #[test]
    fn test_uniparental_search_invariant(
        values in prop::collection::vec(-50i32..50, 0..150),
        probes in prop::collection::vec(-60i32..60, 0..40)
    ) {
        test_search_invariant(Variant::Uniparental, values, probes)?;
    }

    #[test]
    fn test_biparental_search_invariant(
        values in prop::collection::vec(-50i32..50, 0..150),
        probes in prop::collection::vec(-60i32..60, 0..40)
    ) {
        test_search_invariant(Variant::Biparental, values, probes)?;
    }

    #[test]
    fn test_try_from_agrees_with_is_valid(values in prop::collection::vec(0i32..10, 0..20)) {
        let valid = dispatch::is_valid(&values, Variant::Biparental);
        prop_assert_eq!(Beap::try_from(values.clone()).is_ok(), valid);
        let valid = dispatch::is_valid(&values, Variant::Uniparental);
        prop_assert_eq!(UniparentalHeap::try_from(values).is_ok(), valid);
    }

    #[test]
    fn test_geometry_is_consistent(index in 0usize..100_000, extra in 0usize..1000) {
        let len = index + 1 + extra;
        let level = level_of(index);
        let (first, end) = block_edges(level);
        prop_assert!(first <= index && index < end);
        prop_assert_eq!(end - first, level + 1);

        for child in children_of(index, len).iter() {
            prop_assert!(child < len);
            prop_assert_eq!(level_of(child), level + 1);
            prop_assert!(parents_of(child).contains(index));
        }
        for parent in parents_of(index).iter() {
            prop_assert_eq!(level_of(parent) + 1, level);
            prop_assert!(children_of(parent, len).contains(index));
        }
    }
}
