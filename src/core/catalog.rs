//! Catalog of country identifiers that question options are drawn from.
//!
//! The `Catalog` is an ordered set: building one drops blank entries and
//! duplicates (keeping the first occurrence). It is backed by an
//! `im::Vector`, so every `GameState` snapshot can hold it for O(1).

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// The countries the quiz ships with.
pub const DEFAULT_COUNTRIES: [&str; 11] = [
    "France", "Estonia", "Germany", "Ireland", "Italy", "Nigeria", "Poland", "Spain", "UK", "US",
    "Monaco",
];

/// Ordered set of unique option identifiers.
///
/// ## Example
///
/// ```
/// use flag_quiz::core::Catalog;
///
/// let catalog = Catalog::new(["France", "Spain", "France", "", "Italy"]);
/// assert_eq!(catalog.len(), 3);
/// assert_eq!(catalog.get(2), Some("Italy"));
/// ```
///
/// Serialized as a plain list of names. Decoding goes through
/// [`Catalog::new`], so a decoded catalog is cleaned the same way.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Catalog {
    entries: Vector<String>,
}

impl Catalog {
    /// Build a catalog, dropping blanks and repeated identifiers.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = FxHashSet::default();
        let entries = entries
            .into_iter()
            .map(|s| {
                let s: String = s.into();
                s.trim().to_string()
            })
            .filter(|s| !s.is_empty() && seen.insert(s.clone()))
            .collect();
        Self { entries }
    }

    /// Number of distinct identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an identifier by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Check whether an identifier is in the catalog.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e == name)
    }

    /// Iterate over identifiers in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Whether every entry is unique and non-blank.
    ///
    /// Always true for catalogs built with [`Catalog::new`]; decoded
    /// snapshots are checked with this.
    pub(crate) fn is_well_formed(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.entries.iter().all(|e| !e.trim().is_empty() && seen.insert(e.as_str()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRIES)
    }
}

impl From<Vec<String>> for Catalog {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

impl From<Catalog> for Vec<String> {
    fn from(catalog: Catalog) -> Self {
        catalog.entries.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Catalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.get(0), Some("France"));
        assert!(catalog.contains("Monaco"));
        assert!(!catalog.contains("Atlantis"));
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let catalog = Catalog::new(["B", "A", "B", "C", "A"]);
        let names: Vec<_> = catalog.iter().collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_blank_entries_dropped() {
        let catalog: Catalog = ["  ", "", "US", " UK "].into_iter().collect();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1), Some("UK"));
        assert!(catalog.is_well_formed());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::<String>::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.get(0), None);
    }

    #[test]
    fn test_serde_is_a_plain_list() {
        let catalog = Catalog::new(["US", "UK"]);
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"["US","UK"]"#);
        assert_eq!(serde_json::from_str::<Catalog>(&json).unwrap(), catalog);
    }

    #[test]
    fn test_decode_drops_duplicates_and_blanks() {
        let catalog: Catalog = serde_json::from_str(r#"["A", "A", " ", "B", "A"]"#).unwrap();
        let names: Vec<_> = catalog.iter().collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(catalog.is_well_formed());
    }

    #[test]
    fn test_clone_shares_structure() {
        let catalog = Catalog::default();
        let cloned = catalog.clone();
        assert_eq!(catalog, cloned);
    }
}
