//! Extreme stress tests that really push the heaps to their limits
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use rust_implicit_heaps::heap::{Beap, UniparentalHeap};
use rust_implicit_heaps::PriorityQueue;

/// Test massive numbers of inserts and pops
fn test_massive_operations<H: PriorityQueue<i32>>() {
    let mut heap = H::new();

    for i in 0..10_000 {
        heap.push(i);
    }

    assert_eq!(heap.len(), 10_000);
    assert_eq!(heap.peek(), Some(&0));

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Some(i));
    }

    assert!(heap.is_empty());
}

/// Test alternating insert and pop
fn test_alternating_ops<H: PriorityQueue<i32>>() {
    let mut heap = H::new();

    for i in 0..2000 {
        heap.push(i * 2);
        heap.push(i * 2 + 1);

        let popped = heap.pop();
        assert!(popped.is_some());
    }

    assert_eq!(heap.len(), 2000);

    let mut last = i32::MIN;
    while let Some(key) = heap.pop() {
        assert!(key >= last);
        last = key;
    }
}

/// Test a sawtooth pattern of interleaved high and low keys
fn test_sawtooth<H: PriorityQueue<i64>>() {
    let mut heap = H::new();

    for i in 0..3000i64 {
        let key = if i % 2 == 0 { i } else { -i };
        heap.push(key);
        if i % 7 == 0 {
            heap.pop();
        }
    }

    let mut last = i64::MIN;
    while let Some(key) = heap.pop() {
        assert!(key >= last);
        last = key;
    }
}

/// Test many duplicate keys
fn test_many_duplicates<H: PriorityQueue<u8>>() {
    let mut heap = H::new();

    for i in 0..5000u32 {
        heap.push((i % 4) as u8);
    }

    for expected in 0..4u8 {
        for _ in 0..1250 {
            assert_eq!(heap.pop(), Some(expected));
        }
    }
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_uniparental_stress() {
    test_massive_operations::<UniparentalHeap<i32>>();
    test_alternating_ops::<UniparentalHeap<i32>>();
    test_sawtooth::<UniparentalHeap<i64>>();
    test_many_duplicates::<UniparentalHeap<u8>>();
}

#[test]
fn test_biparental_stress() {
    test_massive_operations::<Beap<i32>>();
    test_alternating_ops::<Beap<i32>>();
    test_sawtooth::<Beap<i64>>();
    test_many_duplicates::<Beap<u8>>();
}

#[test]
fn test_beap_search_after_churn() {
    let mut beap = Beap::new();
    for i in 0..4000 {
        beap.push((i * 7919) % 4001);
        if i % 3 == 0 {
            beap.pop();
        }
    }
    assert!(beap.is_valid());

    let keys = beap.as_slice().to_vec();
    for key in &keys {
        let index = beap.position(key).expect("present key must be found");
        assert_eq!(keys[index], *key);
    }
    assert_eq!(beap.position(&-1), None);
    assert_eq!(beap.position(&5000), None);
}
