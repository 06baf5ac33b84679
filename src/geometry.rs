//! Index geometry for the beap
//!
//! A beap stores its keys as an upper-left triangular matrix flattened level
//! by level. Level `l` holds `l + 1` keys and starts at index `l(l+1)/2`:
//!
//! ```text
//! level 0:  0
//! level 1:  1  2
//! level 2:  3  4  5
//! level 3:  6  7  8  9
//! ```
//!
//! The key at level `l`, column `c` has children at level `l + 1`, columns
//! `c` and `c + 1`, and parents at level `l - 1`, columns `c - 1` and `c`.
//! Keys on the edges of a level have a single parent and keys on the last,
//! possibly partial, level may have one child or none. Absent relatives are
//! reported as `None`.
//!
//! All functions here are pure index arithmetic.

use crate::traits::HeapError;

/// Up to two related indices, ordered left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pair {
    /// The relative in the lower column
    pub left: Option<usize>,
    /// The relative in the higher column
    pub right: Option<usize>,
}

impl Pair {
    /// Returns true if neither relative exists
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Iterates over the relatives that exist, left first
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        self.left.into_iter().chain(self.right)
    }

    /// Returns true if `index` is one of the relatives
    pub fn contains(&self, index: usize) -> bool {
        self.left == Some(index) || self.right == Some(index)
    }
}

/// Integer square root, rounded down
pub(crate) fn isqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= n) {
        root += 1;
    }
    root
}

/// Returns the half-open index range `(first, one past last)` of `level`
///
/// ```rust
/// use rust_implicit_heaps::geometry::block_edges;
///
/// assert_eq!(block_edges(0), (0, 1));
/// assert_eq!(block_edges(3), (6, 10));
/// ```
pub fn block_edges(level: usize) -> (usize, usize) {
    (level * (level + 1) / 2, (level + 1) * (level + 2) / 2)
}

/// Returns the first index of `level`
pub fn first_index(level: usize) -> usize {
    block_edges(level).0
}

/// Returns the last index of `level`
pub fn last_index(level: usize) -> usize {
    block_edges(level).1 - 1
}

/// Returns the level holding `index`
///
/// `floor(sqrt(2 * index))` is either the level itself or one past it, so a
/// single correction suffices.
///
/// ```rust
/// use rust_implicit_heaps::geometry::level_of;
///
/// assert_eq!(level_of(0), 0);
/// assert_eq!(level_of(8), 3);
/// ```
pub fn level_of(index: usize) -> usize {
    let level = isqrt(2 * index);
    if index < first_index(level) {
        level - 1
    } else {
        level
    }
}

/// Returns the level holding a signed `index`
///
/// # Errors
/// Returns `HeapError::NegativeIndex` if `index` is negative.
pub fn checked_level_of(index: isize) -> Result<usize, HeapError> {
    usize::try_from(index)
        .map(level_of)
        .map_err(|_| HeapError::NegativeIndex(index))
}

/// Returns the column of `index` within its level
pub fn column_of(index: usize) -> usize {
    index - first_index(level_of(index))
}

/// Returns the children of `parent` in a beap of `len` keys
///
/// A child is absent when its index is not below `len`.
pub fn children_of(parent: usize, len: usize) -> Pair {
    let level = level_of(parent);
    let column = parent - first_index(level);
    let left = first_index(level + 1) + column;
    let right = left + 1;
    Pair {
        left: (left < len).then_some(left),
        right: (right < len).then_some(right),
    }
}

/// Returns the parents of `child`
///
/// The leftmost key of a level has no left parent, the rightmost has no
/// right parent, and the root has neither.
pub fn parents_of(child: usize) -> Pair {
    let level = level_of(child);
    if level == 0 {
        return Pair::default();
    }

    let column = child - first_index(level);
    let above = first_index(level - 1);
    Pair {
        left: (column > 0).then(|| above + column - 1),
        right: (column < level).then_some(above + column),
    }
}

/// Returns the index one level down in the same column, if it is below `len`
pub(crate) fn below(index: usize, len: usize) -> Option<usize> {
    let level = level_of(index);
    let target = first_index(level + 1) + (index - first_index(level));
    (target < len).then_some(target)
}

/// Returns the index one level up and one column left, if it exists
pub(crate) fn above_left(index: usize) -> Option<usize> {
    let level = level_of(index);
    let column = index - first_index(level);
    (level > 0 && column > 0).then(|| first_index(level - 1) + column - 1)
}
