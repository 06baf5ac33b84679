//! Runtime selection between the two layouts
//!
//! A [`Variant`] is the configuration value that picks a [`Layout`]. It can
//! be built from a parent count (1 or 2) or parsed from a name, and both
//! paths reject anything else with a [`HeapError`].
//!
//! ```rust
//! use rust_implicit_heaps::{HeapError, Variant};
//!
//! assert_eq!(Variant::from_parents(2), Ok(Variant::Biparental));
//! assert_eq!("beap".parse::<Variant>(), Ok(Variant::Biparental));
//! assert_eq!(Variant::from_parents(3), Err(HeapError::UnsupportedParents(3)));
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::biparental::Biparental;
use crate::trace::Trace;
use crate::traits::{HeapError, Layout};
use crate::uniparental::Uniparental;

/// Which layout a flat key sequence is read with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Binary heap, one parent per non-root key
    Uniparental,
    /// Beap, up to two parents per key
    Biparental,
}

impl Variant {
    /// Both variants, uniparental first
    pub const ALL: [Variant; 2] = [Variant::Uniparental, Variant::Biparental];

    /// Selects the variant whose keys have `parents` parents
    ///
    /// # Errors
    /// Returns `HeapError::UnsupportedParents` unless `parents` is 1 or 2.
    pub fn from_parents(parents: u8) -> Result<Self, HeapError> {
        match parents {
            1 => Ok(Variant::Uniparental),
            2 => Ok(Variant::Biparental),
            other => {
                debug!("rejecting heap configuration with {} parents", other);
                Err(HeapError::UnsupportedParents(other))
            }
        }
    }

    /// Maximum number of parents a key has in this layout
    pub fn parents(&self) -> u8 {
        match self {
            Variant::Uniparental => 1,
            Variant::Biparental => 2,
        }
    }

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Uniparental => "uniparental",
            Variant::Biparental => "biparental",
        }
    }

    /// See [`Layout::max_traced`]
    pub fn max_traced<'a, K: Ord>(&self, keys: &'a [K]) -> (Option<&'a K>, Trace) {
        match self {
            Variant::Uniparental => Uniparental::max_traced(keys),
            Variant::Biparental => Biparental::max_traced(keys),
        }
    }

    /// See [`Layout::insert_traced`]
    pub fn insert_traced<K: Ord>(&self, keys: &mut Vec<K>, key: K) -> Trace {
        match self {
            Variant::Uniparental => Uniparental::insert_traced(keys, key),
            Variant::Biparental => Biparental::insert_traced(keys, key),
        }
    }

    /// See [`Layout::extract_min_traced`]
    pub fn extract_min_traced<K: Ord>(&self, keys: &mut Vec<K>) -> (Option<K>, Trace) {
        match self {
            Variant::Uniparental => Uniparental::extract_min_traced(keys),
            Variant::Biparental => Biparental::extract_min_traced(keys),
        }
    }

    /// See [`Layout::search_traced`]
    pub fn search_traced<K: Ord>(&self, keys: &[K], key: &K) -> (Option<usize>, Trace) {
        match self {
            Variant::Uniparental => Uniparental::search_traced(keys, key),
            Variant::Biparental => Biparental::search_traced(keys, key),
        }
    }

    /// See [`Layout::is_valid`]
    pub fn is_valid<K: Ord>(&self, keys: &[K]) -> bool {
        match self {
            Variant::Uniparental => Uniparental::is_valid(keys),
            Variant::Biparental => Biparental::is_valid(keys),
        }
    }
}

impl TryFrom<u8> for Variant {
    type Error = HeapError;

    fn try_from(parents: u8) -> Result<Self, Self::Error> {
        Variant::from_parents(parents)
    }
}

impl FromStr for Variant {
    type Err = HeapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniparental" | "binary" | "1" => Ok(Variant::Uniparental),
            "biparental" | "beap" | "2" => Ok(Variant::Biparental),
            _ => {
                debug!("rejecting unknown heap variant {:?}", s);
                Err(HeapError::UnknownVariant(s.to_string()))
            }
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parents() {
        assert_eq!(Variant::from_parents(1), Ok(Variant::Uniparental));
        assert_eq!(Variant::try_from(2u8), Ok(Variant::Biparental));
        for parents in [0u8, 3, 255] {
            assert_eq!(
                Variant::from_parents(parents),
                Err(HeapError::UnsupportedParents(parents))
            );
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Uniparental".parse::<Variant>(), Ok(Variant::Uniparental));
        assert_eq!(" binary ".parse::<Variant>(), Ok(Variant::Uniparental));
        assert_eq!("BEAP".parse::<Variant>(), Ok(Variant::Biparental));
        assert_eq!("2".parse::<Variant>(), Ok(Variant::Biparental));
        assert_eq!(
            "triparental".parse::<Variant>(),
            Err(HeapError::UnknownVariant("triparental".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
            assert_eq!(Variant::from_parents(variant.parents()), Ok(variant));
        }
    }

    #[test]
    fn test_error_messages() {
        let err = Variant::from_parents(3).unwrap_err();
        assert!(err.to_string().contains("one or two parents"));

        let err = "heap".parse::<Variant>().unwrap_err();
        assert_eq!(err.to_string(), "unknown heap variant \"heap\"");
    }
}
