//! Common traits for implicit heap data structures
//!
//! This module provides the two seams shared by every layout in the crate:
//!
//! - [`Layout`]: the operation family for one way of reading a flat `Vec<K>`
//!   as a heap. Layouts are zero-sized strategy types; the keys stay owned by
//!   the caller.
//! - [`PriorityQueue`]: a simple owned-container API similar to Rust's
//!   `BinaryHeap`, implemented by [`ImplicitHeap`](crate::heap::ImplicitHeap).
//!
//! Errors for the whole crate live in [`HeapError`].

use std::fmt;

use crate::trace::Trace;
use crate::variant::Variant;

/// Error type for heap operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// A parent count other than 1 or 2 was supplied as configuration
    UnsupportedParents(u8),
    /// A variant name that is not recognised
    UnknownVariant(String),
    /// A negative index was passed to the beap geometry
    NegativeIndex(isize),
    /// A sequence does not satisfy the ordering invariant of the layout
    InvalidLayout {
        /// The layout the sequence was checked against
        variant: Variant,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::UnsupportedParents(parents) => write!(
                f,
                "only heaps in which nodes have one or two parents are supported (got {parents})"
            ),
            HeapError::UnknownVariant(name) => {
                write!(f, "unknown heap variant {name:?}")
            }
            HeapError::NegativeIndex(index) => {
                write!(f, "cannot get the level of negative index {index}")
            }
            HeapError::InvalidLayout { variant } => {
                write!(f, "sequence violates the {variant} heap ordering")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// One way of interpreting a flat key sequence as a min-heap.
///
/// Implementors supply the layout-specific walks; insertion and extraction
/// are shared because both layouts append at the end and extract by swapping
/// the root with the last key.
///
/// Every `_traced` operation reports a [`Trace`] alongside its result. The
/// trace never influences the result.
pub trait Layout {
    /// The configuration value naming this layout
    const VARIANT: Variant;

    /// Returns the maximum key along with the number of steps taken
    fn max_traced<K: Ord>(keys: &[K]) -> (Option<&K>, Trace);

    /// Restores the ordering after the key at `index` may have become too small
    fn sift_up<K: Ord>(keys: &mut [K], index: usize) -> Trace;

    /// Restores the ordering after the key at `index` may have become too large
    fn sift_down<K: Ord>(keys: &mut [K], index: usize) -> Trace;

    /// Locates some index holding `key`
    fn search_traced<K: Ord>(keys: &[K], key: &K) -> (Option<usize>, Trace);

    /// Returns true if every parent is no greater than each of its children
    fn is_valid<K: Ord>(keys: &[K]) -> bool;

    /// Returns the minimum key
    ///
    /// # Time Complexity
    /// O(1) for every layout
    fn min<K>(keys: &[K]) -> Option<&K> {
        keys.first()
    }

    /// Returns the maximum key
    fn max<K: Ord>(keys: &[K]) -> Option<&K> {
        Self::max_traced(keys).0
    }

    /// Appends `key` and sifts it up into place
    fn insert_traced<K: Ord>(keys: &mut Vec<K>, key: K) -> Trace {
        keys.push(key);
        let last = keys.len() - 1;
        Self::sift_up(keys, last)
    }

    /// Appends `key` and sifts it up into place
    fn insert<K: Ord>(keys: &mut Vec<K>, key: K) {
        Self::insert_traced(keys, key);
    }

    /// Removes and returns the minimum key
    ///
    /// The last key is swapped into the root and sifted down. The trace
    /// covers the sift-down only.
    fn extract_min_traced<K: Ord>(keys: &mut Vec<K>) -> (Option<K>, Trace) {
        if keys.len() <= 1 {
            return (keys.pop(), Trace::new());
        }

        let last = keys.len() - 1;
        keys.swap(0, last);
        let root = keys.pop();
        let trace = Self::sift_down(keys, 0);
        (root, trace)
    }

    /// Removes and returns the minimum key
    fn extract_min<K: Ord>(keys: &mut Vec<K>) -> Option<K> {
        Self::extract_min_traced(keys).0
    }

    /// Locates some index holding `key`
    fn search<K: Ord>(keys: &[K], key: &K) -> Option<usize> {
        Self::search_traced(keys, key).0
    }
}

/// Base trait for owned priority queues
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts a key (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap`, which is a max-heap, implementors are min-heaps.
///
/// # Example
///
/// ```rust
/// use rust_implicit_heaps::PriorityQueue;
/// use rust_implicit_heaps::heap::Beap;
///
/// let mut beap = Beap::new();
/// beap.push(3);
/// beap.push(1);
/// beap.push(2);
///
/// assert_eq!(beap.peek(), Some(&1));
/// assert_eq!(beap.pop(), Some(1));
/// ```
pub trait PriorityQueue<K: Ord> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of keys in the queue
    fn len(&self) -> usize;

    /// Inserts a key
    fn push(&mut self, key: K);

    /// Returns the minimum key without removing it
    ///
    /// # Time Complexity
    /// O(1) for all implementations
    fn peek(&self) -> Option<&K>;

    /// Removes and returns the minimum key
    fn pop(&mut self) -> Option<K>;
}
