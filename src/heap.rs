//! Owned implicit heaps
//!
//! [`ImplicitHeap`] wraps a `Vec<K>` together with a [`Layout`] chosen at
//! compile time. It is the container counterpart of the free functions in
//! [`dispatch`](crate::dispatch): the same walks, but the heap owns its keys
//! and the ordering can only be changed through its methods.
//!
//! # Example
//!
//! ```rust
//! use rust_implicit_heaps::PriorityQueue;
//! use rust_implicit_heaps::heap::{Beap, UniparentalHeap};
//!
//! let mut beap: Beap<i32> = [5, 3, 8, 1].into_iter().collect();
//! assert_eq!(beap.peek(), Some(&1));
//! assert_eq!(beap.peek_max(), Some(&8));
//! assert!(beap.position(&3).is_some());
//!
//! let heap = UniparentalHeap::try_from(vec![1, 3, 2, 4]).unwrap();
//! assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use log::debug;

use crate::biparental::Biparental;
use crate::trace::Trace;
use crate::traits::{HeapError, Layout, PriorityQueue};
use crate::uniparental::Uniparental;

/// A min-heap stored as a flat vector read through layout `L`
pub struct ImplicitHeap<K: Ord, L: Layout> {
    keys: Vec<K>,
    _layout: PhantomData<L>,
}

/// A binary min-heap
pub type UniparentalHeap<K> = ImplicitHeap<K, Uniparental>;

/// A biparental heap
pub type Beap<K> = ImplicitHeap<K, Biparental>;

impl<K: Ord, L: Layout> ImplicitHeap<K, L> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self::from_keys(Vec::new())
    }

    /// Creates an empty heap with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_keys(Vec::with_capacity(capacity))
    }

    fn from_keys(keys: Vec<K>) -> Self {
        Self {
            keys,
            _layout: PhantomData,
        }
    }

    /// Returns the number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the heap holds no keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the minimum key
    pub fn peek(&self) -> Option<&K> {
        L::min(&self.keys)
    }

    /// Returns the maximum key
    pub fn peek_max(&self) -> Option<&K> {
        L::max(&self.keys)
    }

    /// Returns the maximum key and the steps taken
    pub fn peek_max_traced(&self) -> (Option<&K>, Trace) {
        L::max_traced(&self.keys)
    }

    /// Inserts a key
    pub fn push(&mut self, key: K) {
        L::insert(&mut self.keys, key);
    }

    /// Inserts a key and returns the steps the sift-up took
    pub fn push_traced(&mut self, key: K) -> Trace {
        L::insert_traced(&mut self.keys, key)
    }

    /// Removes and returns the minimum key
    pub fn pop(&mut self) -> Option<K> {
        L::extract_min(&mut self.keys)
    }

    /// Removes the minimum key and returns it with the steps the sift-down took
    pub fn pop_traced(&mut self) -> (Option<K>, Trace) {
        L::extract_min_traced(&mut self.keys)
    }

    /// Returns an index holding `key`, if any
    pub fn position(&self, key: &K) -> Option<usize> {
        L::search(&self.keys, key)
    }

    /// Returns an index holding `key`, if any, and the steps taken
    pub fn position_traced(&self, key: &K) -> (Option<usize>, Trace) {
        L::search_traced(&self.keys, key)
    }

    /// Returns true if the layout ordering holds
    ///
    /// Always true unless the heap was built from an unchecked vector.
    pub fn is_valid(&self) -> bool {
        L::is_valid(&self.keys)
    }

    /// Returns the keys in layout order
    pub fn as_slice(&self) -> &[K] {
        &self.keys
    }

    /// Returns the underlying vector in layout order
    pub fn into_vec(self) -> Vec<K> {
        self.keys
    }

    /// Returns the keys in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<K> {
        let mut sorted = Vec::with_capacity(self.keys.len());
        while let Some(key) = self.pop() {
            sorted.push(key);
        }
        sorted
    }

    /// Removes every key
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

impl<K: Ord, L: Layout> TryFrom<Vec<K>> for ImplicitHeap<K, L> {
    type Error = HeapError;

    /// Adopts `keys` if they already satisfy the layout ordering
    fn try_from(keys: Vec<K>) -> Result<Self, Self::Error> {
        if !L::is_valid(&keys) {
            debug!(
                "rejecting {} keys that violate the {} ordering",
                keys.len(),
                L::VARIANT
            );
            return Err(HeapError::InvalidLayout { variant: L::VARIANT });
        }
        Ok(Self::from_keys(keys))
    }
}

impl<K: Ord, L: Layout> PriorityQueue<K> for ImplicitHeap<K, L> {
    fn new() -> Self {
        ImplicitHeap::new()
    }

    fn is_empty(&self) -> bool {
        ImplicitHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        ImplicitHeap::len(self)
    }

    fn push(&mut self, key: K) {
        ImplicitHeap::push(self, key)
    }

    fn peek(&self) -> Option<&K> {
        ImplicitHeap::peek(self)
    }

    fn pop(&mut self) -> Option<K> {
        ImplicitHeap::pop(self)
    }
}

impl<K: Ord, L: Layout> Default for ImplicitHeap<K, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, L: Layout> Clone for ImplicitHeap<K, L> {
    fn clone(&self) -> Self {
        Self::from_keys(self.keys.clone())
    }
}

impl<K: Ord + fmt::Debug, L: Layout> fmt::Debug for ImplicitHeap<K, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplicitHeap")
            .field("variant", &L::VARIANT)
            .field("keys", &self.keys)
            .finish()
    }
}

impl<K: Ord, L: Layout> Extend<K> for ImplicitHeap<K, L> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.push(key);
        }
    }
}

impl<K: Ord, L: Layout> FromIterator<K> for ImplicitHeap<K, L> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
