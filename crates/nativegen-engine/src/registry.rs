//! Known-type registry
//!
//! User-supplied overrides keyed by binary class name. The translator only
//! reads it; the config crate builds it.

use rustc_hash::FxHashMap;

use crate::purity::Purity;

/// Override for one source type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownType {
    /// Frege type name to emit
    pub name: String,
    /// Intrinsic purity of the type
    pub purity: Purity,
}

impl KnownType {
    /// Create a new override
    pub fn new(name: impl Into<String>, purity: Purity) -> Self {
        Self {
            name: name.into(),
            purity,
        }
    }
}

/// Registry of known types, indexed by binary class name
#[derive(Debug, Clone, Default)]
pub struct KnownTypes {
    entries: FxHashMap<String, KnownType>,
}

impl KnownTypes {
    /// Create new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override, replacing any previous one
    pub fn insert(&mut self, class_name: impl Into<String>, known: KnownType) {
        self.entries.insert(class_name.into(), known);
    }

    /// Get the override for a class
    pub fn get(&self, class_name: &str) -> Option<&KnownType> {
        self.entries.get(class_name)
    }

    /// Check if a class has an override
    pub fn contains(&self, class_name: &str) -> bool {
        self.entries.contains_key(class_name)
    }

    /// Merge `other` into this registry; entries of `other` win
    pub fn extend(&mut self, other: KnownTypes) {
        self.entries.extend(other.entries);
    }

    /// Get number of overrides
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, KnownType)> for KnownTypes {
    fn from_iter<I: IntoIterator<Item = (S, KnownType)>>(iter: I) -> Self {
        let mut known = KnownTypes::new();
        for (name, entry) in iter {
            known.insert(name, entry);
        }
        known
    }
}
