//! Category module - identifiers for clues and suspects
//!
//! Both identifiers are opaque names. Whether a name belongs to a domain is
//! decided by the [`RelationTable`](crate::RelationTable), not by the type.

use std::borrow::Borrow;
use std::fmt;

/// Identifier of a clue category (e.g. `emf`, `temp`)
///
/// Ordering and hashing follow the underlying string, so `Clue` keys can be
/// looked up by `&str` in ordered and hashed collections.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clue(String);

impl Clue {
    /// Create a clue identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use phasmo_domain::Clue;
    ///
    /// let clue = Clue::new("emf");
    /// assert_eq!(clue.as_str(), "emf");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the clue name as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Clue {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Clue {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Clue {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Identifier of a suspect category (e.g. `banshee`, `oni`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Suspect(String);

impl Suspect {
    /// Create a suspect identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the suspect name as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Suspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Suspect {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Suspect {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Suspect {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_clue_display() {
        assert_eq!(Clue::new("orbs").to_string(), "orbs");
        assert_eq!(Suspect::from("mare").to_string(), "mare");
    }

    #[test]
    fn test_lookup_by_str() {
        let clues: BTreeSet<Clue> = ["emf", "book"].into_iter().map(Clue::from).collect();
        assert!(clues.contains("emf"));
        assert!(!clues.contains("prints"));
    }

    #[test]
    fn test_ordering_follows_name() {
        assert!(Suspect::new("banshee") < Suspect::new("yurei"));
    }
}
