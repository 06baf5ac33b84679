//! Biparental heap (beap) layout
//!
//! A beap, introduced by Munro and Suwanda in "Implicit Data Structures for
//! Fast Search and Update" (1980), lays its keys out as an upper-left
//! triangular matrix in which every key is no smaller than both of its
//! parents. See [`geometry`](crate::geometry) for the index arithmetic.
//!
//! Reading level `l`, column `c` as matrix cell `(c, l - c)`, rows and
//! columns are both sorted, which is what makes the O(sqrt n) search work.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity  |
//! |---------------|-------------|
//! | `min`         | O(1)        |
//! | `max`         | O(sqrt n)   |
//! | `insert`      | O(sqrt n)   |
//! | `extract_min` | O(sqrt n)   |
//! | `search`      | O(sqrt n)   |
//!
//! # Example
//!
//! ```rust
//! use rust_implicit_heaps::{Biparental, Layout};
//!
//! let mut keys = vec![1, 5, 2, 8, 6, 3, 10, 9, 7, 4];
//! assert!(Biparental::is_valid(&keys));
//!
//! assert_eq!(Biparental::max(&keys), Some(&10));
//! assert_eq!(Biparental::search(&keys, &6), Some(4));
//! assert_eq!(Biparental::extract_min(&mut keys), Some(1));
//! assert!(Biparental::is_valid(&keys));
//! ```

use std::cmp::Ordering;

use log::trace;

use crate::geometry::{self, above_left, below, children_of, column_of, level_of, parents_of};
use crate::trace::Trace;
use crate::traits::Layout;
use crate::variant::Variant;

/// The beap layout, up to two parents per key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Biparental;

impl Biparental {
    /// Number of trailing keys that must contain the maximum
    ///
    /// The maximum is a key without children. Those keys form a suffix of
    /// `l` or `l + 1` keys when the last level is `l`, and `floor(sqrt(2n))`
    /// is never shorter than that suffix.
    pub fn max_window(len: usize) -> usize {
        geometry::isqrt(2 * len).min(len)
    }

    /// Index the search starts from: the rightmost key of the last level if
    /// that level is full, otherwise the rightmost key of the level above
    fn top_right_corner(len: usize) -> usize {
        let last = len - 1;
        let level = level_of(last);
        if geometry::last_index(level) == last {
            last
        } else {
            geometry::last_index(level - 1)
        }
    }
}

impl Layout for Biparental {
    const VARIANT: Variant = Variant::Biparental;

    fn max_traced<K: Ord>(keys: &[K]) -> (Option<&K>, Trace) {
        let mut trace = Trace::new();
        let window = Self::max_window(keys.len());
        let mut iter = keys[keys.len() - window..].iter();
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

    /// Swaps the key at `index` with its larger parent while it is smaller
    ///
    /// Equal parents resolve to the left one.
    fn sift_up<K: Ord>(keys: &mut [K], mut index: usize) -> Trace {
        let mut trace = Trace::new();
        loop {
            let parent = match parents_of(index) {
                geometry::Pair {
                    left: Some(left),
                    right: Some(right),
                } => {
                    if keys[left] < keys[right] {
                        right
                    } else {
                        left
                    }
                }
                geometry::Pair {
                    left: Some(only), ..
                }
                | geometry::Pair {
                    right: Some(only), ..
                } => only,
                _ => break,
            };
            trace.tick();

            if keys[index] < keys[parent] {
                trace!("sift up: {} -> {}", index, parent);
                keys.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        trace
    }

    /// Swaps the key at `index` with its smaller child while it is larger
    ///
    /// Equal children resolve to the right one.
    fn sift_down<K: Ord>(keys: &mut [K], mut index: usize) -> Trace {
        let mut trace = Trace::new();
        loop {
            let child = match children_of(index, keys.len()) {
                geometry::Pair {
                    left: Some(left),
                    right: Some(right),
                } => {
                    if keys[left] < keys[right] {
                        left
                    } else {
                        right
                    }
                }
                geometry::Pair {
                    left: Some(only), ..
                }
                | geometry::Pair {
                    right: Some(only), ..
                } => only,
                _ => break,
            };
            trace.tick();

            if keys[index] > keys[child] {
                trace!("sift down: {} -> {}", index, child);
                keys.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
        trace
    }

    /// Walks the matrix from its top-right corner
    ///
    /// A smaller target moves up-left, ruling out the rest of the current
    /// row. A larger target moves down the column, or left along the level
    /// when the column has no more keys.
    fn search_traced<K: Ord>(keys: &[K], key: &K) -> (Option<usize>, Trace) {
        let mut trace = Trace::new();
        if keys.is_empty() {
            return (None, trace);
        }

        let mut index = Self::top_right_corner(keys.len());
        loop {
            let next = match key.cmp(&keys[index]) {
                Ordering::Equal => return (Some(index), trace),
                Ordering::Less => above_left(index),
                Ordering::Greater => below(index, keys.len())
                    .or_else(|| (column_of(index) > 0).then(|| index - 1)),
            };
            trace.tick();

            match next {
                Some(next) => {
                    trace!("search: {} -> {}", index, next);
                    index = next;
                }
                None => return (None, trace),
            }
        }
    }

    fn is_valid<K: Ord>(keys: &[K]) -> bool {
        (0..keys.len()).all(|index| {
            children_of(index, keys.len())
                .iter()
                .all(|child| keys[child] >= keys[index])
        })
    }
}
