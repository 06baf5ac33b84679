//! Implicit Heap Data Structures for Rust
//!
//! This crate provides two priority queues stored entirely in one flat
//! vector of keys, with no pointers between elements:
//!
//! - **Uniparental heap**: the classical binary min-heap. O(1) min; O(log n)
//!   insert and extract-min; O(n) max and search.
//! - **Beap** (biparental heap, Munro and Suwanda 1980): keys form a
//!   triangular matrix in which most keys have two parents. O(1) min;
//!   O(sqrt n) max, insert, extract-min and search.
//!
//! The same vector can be read with either layout; a [`Variant`] selects one
//! at runtime and a [`Layout`] type selects one at compile time. Every
//! operation that walks the structure also has a `_traced` form returning a
//! [`Trace`] step count, used to check the complexity bounds.
//!
//! # Example
//!
//! ```rust
//! use rust_implicit_heaps::{dispatch, Variant};
//!
//! let variant = Variant::from_parents(2).unwrap();
//! let mut keys = vec![1, 5, 2, 8, 6, 3, 10, 9, 7, 4];
//! assert!(dispatch::is_valid(&keys, variant));
//!
//! dispatch::insert(&mut keys, 0, variant);
//! assert_eq!(dispatch::min(&keys), Some(&0));
//! assert_eq!(dispatch::extract_min(&mut keys, variant), Some(0));
//!
//! let (index, trace) = dispatch::search_traced(&keys, &7, variant);
//! assert_eq!(keys[index.unwrap()], 7);
//! assert!(trace.steps() <= 10);
//! ```

pub mod biparental;
pub mod dispatch;
pub mod geometry;
pub mod heap;
pub mod trace;
pub mod traits;
pub mod uniparental;
pub mod variant;

#[cfg(test)]
mod testing;

// Re-export the main types for convenience
pub use biparental::Biparental;
pub use heap::{Beap, ImplicitHeap, UniparentalHeap};
pub use trace::{Complexity, Trace};
pub use traits::{HeapError, Layout, PriorityQueue};
pub use uniparental::Uniparental;
pub use variant::Variant;
