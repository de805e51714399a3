//! Clue synonym resolution.
//!
//! Maps what a player types (`spirit box`, `fingerprints`, `EMF5`) to the
//! canonical clue the deduction engine knows. Lookups ignore case, spaces,
//! hyphens and underscores.

use crate::error::Result;
use phasmo_domain::{Clue, DomainError, RelationTable};
use std::collections::{BTreeMap, HashMap};

/// Built-in synonyms for the reference clues.
const BUILTIN_ALIASES: &[(&str, &[&str])] = &[
    ("emf", &["emf5", "emf level 5", "level 5"]),
    (
        "temp",
        &["temps", "freezing", "freezing temps", "freezing temperatures", "cold"],
    ),
    ("box", &["spirit box", "sb"]),
    ("prints", &["print", "fingerprints", "fingers", "fp"]),
    ("orbs", &["orb", "ghost orb", "ghost orbs"]),
    ("book", &["writing", "ghost writing", "gw", "ghost book"]),
];

/// Flat reverse-lookup table from typed names to canonical clues.
#[derive(Debug, Clone)]
pub struct AliasTable {
    canonical: HashMap<String, Clue>,
    lookup: HashMap<String, Clue>,
}

impl AliasTable {
    /// Build the table for `relation`.
    ///
    /// Every canonical clue resolves to itself. Built-in synonyms are only
    /// registered for clues the relation actually contains.
    pub fn new(relation: &RelationTable) -> Self {
        let canonical: HashMap<String, Clue> = relation
            .all_clues()
            .into_iter()
            .map(|clue| (normalize(clue.as_str()), clue))
            .collect();
        let mut lookup = canonical.clone();

        for (name, synonyms) in BUILTIN_ALIASES {
            if !relation.contains_clue(name) {
                continue;
            }
            for synonym in *synonyms {
                lookup
                    .entry(normalize(synonym))
                    .or_insert_with(|| Clue::new(*name));
            }
        }

        tracing::debug!("Alias table built with {} entries", lookup.len());
        Self { canonical, lookup }
    }

    /// Merge configured synonyms over the table.
    ///
    /// Targets must be clue names of the relation. A synonym that spells a
    /// clue name is skipped, so every clue stays reachable by its own name.
    ///
    /// # Errors
    /// Returns `InvalidClue` if a synonym targets a clue that does not exist.
    pub fn with_aliases(mut self, aliases: &BTreeMap<String, String>) -> Result<Self> {
        for (synonym, target) in aliases {
            let clue = self
                .canonical
                .get(&normalize(target))
                .cloned()
                .ok_or_else(|| DomainError::InvalidClue(target.to_string()))?;

            let key = normalize(synonym);
            if self.canonical.contains_key(&key) {
                tracing::warn!("Ignoring alias '{}' -> '{}': already a clue name", synonym, clue);
                continue;
            }

            tracing::debug!("Alias '{}' -> '{}'", synonym, clue);
            self.lookup.insert(key, clue);
        }
        Ok(self)
    }

    /// Resolve a typed name to its canonical clue.
    ///
    /// # Errors
    /// Returns `InvalidClue` if the name is neither a clue nor a synonym.
    pub fn resolve(&self, name: &str) -> Result<Clue> {
        self.lookup
            .get(&normalize(name))
            .cloned()
            .ok_or_else(|| DomainError::InvalidClue(name.trim().to_string()).into())
    }

    /// Synonyms registered for `clue`, sorted, excluding the canonical name.
    pub fn synonyms_for(&self, clue: &Clue) -> Vec<&str> {
        let canonical = normalize(clue.as_str());
        let mut synonyms: Vec<&str> = self
            .lookup
            .iter()
            .filter(|(key, target)| *target == clue && **key != canonical)
            .map(|(key, _)| key.as_str())
            .collect();
        synonyms.sort_unstable();
        synonyms
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn table() -> AliasTable {
        AliasTable::new(&RelationTable::reference())
    }

    #[test]
    fn test_canonical_names_resolve() {
        let aliases = table();
        for name in ["emf", "temp", "box", "prints", "orbs", "book"] {
            assert_eq!(aliases.resolve(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_synonyms_resolve() {
        let aliases = table();
        assert_eq!(aliases.resolve("Spirit Box").unwrap().as_str(), "box");
        assert_eq!(aliases.resolve("fingerprints").unwrap().as_str(), "prints");
        assert_eq!(aliases.resolve("EMF-5").unwrap().as_str(), "emf");
        assert_eq!(aliases.resolve("  ghost_writing ").unwrap().as_str(), "book");
    }

    #[test]
    fn test_unknown_name_is_invalid_clue() {
        let result = table().resolve("crucifix");
        assert!(matches!(
            result,
            Err(CliError::Domain(DomainError::InvalidClue(name))) if name == "crucifix"
        ));
    }

    #[test]
    fn test_configured_aliases() {
        let mut extra = BTreeMap::new();
        extra.insert("ecto".to_string(), "orbs".to_string());
        let aliases = table().with_aliases(&extra).unwrap();
        assert_eq!(aliases.resolve("ecto").unwrap().as_str(), "orbs");
    }

    #[test]
    fn test_alias_to_unknown_clue_fails() {
        let mut extra = BTreeMap::new();
        extra.insert("salt".to_string(), "footsteps".to_string());
        assert!(table().with_aliases(&extra).is_err());
    }

    #[test]
    fn test_alias_to_synonym_fails() {
        let mut extra = BTreeMap::new();
        extra.insert("wisp".to_string(), "orb".to_string());
        assert!(table().with_aliases(&extra).is_err());
    }

    #[test]
    fn test_alias_cannot_shadow_clue_name() {
        let mut extra = BTreeMap::new();
        extra.insert("EMF".to_string(), "orbs".to_string());
        extra.insert("ecto".to_string(), "orbs".to_string());
        let aliases = table().with_aliases(&extra).unwrap();
        assert_eq!(aliases.resolve("emf").unwrap().as_str(), "emf");
        assert_eq!(aliases.resolve("ecto").unwrap().as_str(), "orbs");
    }

    #[test]
    fn test_alias_targets_ignore_earlier_aliases() {
        let mut extra = BTreeMap::new();
        extra.insert("box".to_string(), "orbs".to_string());
        extra.insert("radio".to_string(), "box".to_string());
        let aliases = table().with_aliases(&extra).unwrap();
        assert_eq!(aliases.resolve("radio").unwrap().as_str(), "box");
        assert_eq!(aliases.resolve("box").unwrap().as_str(), "box");
    }

    #[test]
    fn test_builtin_aliases_skip_missing_clues() {
        let relation = RelationTable::from_entries([("emf", vec!["oni"])]).unwrap();
        let aliases = AliasTable::new(&relation);
        assert!(aliases.resolve("emf5").is_ok());
        assert!(aliases.resolve("spirit box").is_err());
    }

    #[test]
    fn test_synonyms_for() {
        let aliases = table();
        assert_eq!(aliases.synonyms_for(&Clue::new("box")), vec!["sb", "spiritbox"]);
    }
}
