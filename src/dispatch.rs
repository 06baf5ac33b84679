//! Entry points over caller-owned key sequences
//!
//! Each function takes the sequence and a [`Variant`] and delegates to the
//! matching [`Layout`](crate::Layout). Insertion and extraction mutate the
//! vector in place; everything else only reads it.
//!
//! Configuration errors surface when the [`Variant`] is built, so every
//! function here is total.
//!
//! ```rust
//! use rust_implicit_heaps::dispatch;
//! use rust_implicit_heaps::Variant;
//!
//! let variant: Variant = "biparental".parse().unwrap();
//! let mut keys = Vec::new();
//! for key in [5, 3, 8, 1] {
//!     dispatch::insert(&mut keys, key, variant);
//! }
//!
//! assert_eq!(dispatch::min(&keys), Some(&1));
//! assert_eq!(dispatch::max(&keys, variant), Some(&8));
//! assert!(dispatch::search(&keys, &3, variant).is_some());
//! assert_eq!(dispatch::extract_min(&mut keys, variant), Some(1));
//! assert!(dispatch::is_valid(&keys, variant));
//! ```

use crate::trace::Trace;
use crate::variant::Variant;

/// Returns the minimum key; the root in either layout
pub fn min<K>(keys: &[K]) -> Option<&K> {
    keys.first()
}

/// Returns the maximum key
pub fn max<K: Ord>(keys: &[K], variant: Variant) -> Option<&K> {
    variant.max_traced(keys).0
}

/// Returns the maximum key and the steps taken to find it
pub fn max_traced<K: Ord>(keys: &[K], variant: Variant) -> (Option<&K>, Trace) {
    variant.max_traced(keys)
}

/// Inserts `key`, restoring the layout's ordering
pub fn insert<K: Ord>(keys: &mut Vec<K>, key: K, variant: Variant) {
    variant.insert_traced(keys, key);
}

/// Inserts `key` and returns the steps the sift-up took
pub fn insert_traced<K: Ord>(keys: &mut Vec<K>, key: K, variant: Variant) -> Trace {
    variant.insert_traced(keys, key)
}

/// Removes and returns the minimum key
pub fn extract_min<K: Ord>(keys: &mut Vec<K>, variant: Variant) -> Option<K> {
    variant.extract_min_traced(keys).0
}

/// Removes the minimum key and returns it with the steps the sift-down took
pub fn extract_min_traced<K: Ord>(keys: &mut Vec<K>, variant: Variant) -> (Option<K>, Trace) {
    variant.extract_min_traced(keys)
}

/// Returns an index holding `key`, if any
pub fn search<K: Ord>(keys: &[K], key: &K, variant: Variant) -> Option<usize> {
    variant.search_traced(keys, key).0
}

/// Returns an index holding `key`, if any, and the steps taken
pub fn search_traced<K: Ord>(keys: &[K], key: &K, variant: Variant) -> (Option<usize>, Trace) {
    variant.search_traced(keys, key)
}

/// Returns true if `keys` satisfies the ordering of `variant`
pub fn is_valid<K: Ord>(keys: &[K], variant: Variant) -> bool {
    variant.is_valid(keys)
}
