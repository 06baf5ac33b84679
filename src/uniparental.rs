//! Uniparental (classical binary) heap layout
//!
//! The key at index `i` has children at `2i + 1` and `2i + 2` and its parent
//! at `(i - 1) / 2`. No geometry beyond these closed forms is needed.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `min`         | O(1)       |
//! | `max`         | O(n)       |
//! | `insert`      | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `search`      | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_implicit_heaps::{Layout, Uniparental};
//!
//! let mut keys = vec![1, 3, 2, 4];
//! assert!(Uniparental::is_valid(&keys));
//!
//! Uniparental::insert(&mut keys, 0);
//! assert_eq!(keys.len(), 5);
//! assert_eq!(Uniparental::min(&keys), Some(&0));
//! assert_eq!(Uniparental::extract_min(&mut keys), Some(0));
//! ```

use log::trace;

use crate::trace::Trace;
use crate::traits::Layout;
use crate::variant::Variant;

/// The binary min-heap layout, one parent per non-root key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Uniparental;

impl Uniparental {
    fn parent(index: usize) -> usize {
        (index - 1) / 2
    }

    fn children(index: usize) -> (usize, usize) {
        (2 * index + 1, 2 * index + 2)
    }
}

impl Layout for Uniparental {
    const VARIANT: Variant = Variant::Uniparental;

    fn max_traced<K: Ord>(keys: &[K]) -> (Option<&K>, Trace) {
        let mut trace = Trace::new();
        let mut iter = keys.iter();
        let Some(mut max) = iter.next() else {
            return (None, trace);
        };

        for key in iter {
            trace.tick();
            if key > max {
                max = key;
            }
        }

        (Some(max), trace)
    }

    /// Move key at index up to maintain heap property
    fn sift_up<K: Ord>(keys: &mut [K], mut index: usize) -> Trace {
        let mut trace = Trace::new();
        while index > 0 {
            trace.tick();
            let parent = Self::parent(index);
            if keys[parent] > keys[index] {
                trace!("sift up: {} -> {}", index, parent);
                keys.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        trace
    }

    /// Move key at index down to maintain heap property
    ///
    /// Descends into the smaller child; equal children resolve to the right.
    fn sift_down<K: Ord>(keys: &mut [K], mut index: usize) -> Trace {
        let mut trace = Trace::new();
        let len = keys.len();
        loop {
            let (left, right) = Self::children(index);
            if left >= len {
                break;
            }
            trace.tick();

            let smallest = if right >= len || keys[right] > keys[left] {
                left
            } else {
                right
            };

            if keys[index] > keys[smallest] {
                trace!("sift down: {} -> {}", index, smallest);
                keys.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
        trace
    }

    fn search_traced<K: Ord>(keys: &[K], key: &K) -> (Option<usize>, Trace) {
        let mut trace = Trace::new();
        for (index, candidate) in keys.iter().enumerate() {
            trace.tick();
            if candidate == key {
                return (Some(index), trace);
            }
        }
        (None, trace)
    }

    fn is_valid<K: Ord>(keys: &[K]) -> bool {
        (0..keys.len()).all(|index| {
            let (left, right) = Self::children(index);
            [left, right]
                .into_iter()
                .filter(|&child| child < keys.len())
                .all(|child| keys[child] >= keys[index])
        })
    }
}
