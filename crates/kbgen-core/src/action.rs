//! # Action Vocabulary Types
//!
//! The normalized in-memory model of the keybinding action vocabulary:
//! action identifiers, their declared argument properties, and the ordered
//! registry that the emitters consume.
//!
//! ## Ordering Invariant
//!
//! [`ActionRegistry`] preserves seed order exactly. The seed order is the
//! schema enum's declaration order, and every generated table must list
//! actions in that order so that two runs over the same input produce
//! byte-identical output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// A string token naming a keybinding action (e.g., `"copy"`).
///
/// The universe of valid keys is exactly the set enumerated in the schema's
/// `ShortcutActionName` enum, minus the reserved `unbound` sentinel. The
/// sentinel never enters the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionKey(String);

impl ActionKey {
    /// Wrap a raw schema token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Access the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a property's schema entry declares about its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertySpec {
    /// A JSON-schema `type` token, recorded verbatim (e.g. `"boolean"`).
    Primitive(String),
    /// A `$ref`, stripped to the bare definition name it points at.
    Reference(String),
    /// Neither a `type` nor a reference. The header emitter substitutes a
    /// placeholder and warns; generation continues.
    Unknown,
}

/// The resolved argument set for one action.
///
/// Absence of a definition for a registry key means the action takes no
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDefinition {
    /// The bare definition name, injected by the builder. Non-empty
    /// whenever a definition exists; this is not a field of the raw
    /// schema entry.
    pub name: String,
    /// Declared argument properties, in schema declaration order. The
    /// `action` discriminator property is consumed by the builder and is
    /// not an argument.
    pub properties: IndexMap<String, PropertySpec>,
}

/// Ordered mapping from every valid action identifier to its optional
/// definition.
///
/// Constructed in two phases: [`seed`](Self::seed) inserts every enum
/// identifier mapped to `None`, establishing order and completeness;
/// [`populate`](Self::populate) narrows individual entries to resolved
/// definitions. The registry is read-only afterward and consumed by the
/// emitters; it does not outlive a single generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionRegistry {
    entries: IndexMap<ActionKey, Option<ActionDefinition>>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered action identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no identifiers have been seeded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Phase 1: insert `key -> None`, fixing its position in iteration
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateKey` if the key was already seeded.
    pub fn seed(&mut self, key: ActionKey) -> Result<(), RegistryError> {
        if self.entries.contains_key(&key) {
            return Err(RegistryError::DuplicateKey {
                key: key.as_str().to_string(),
            });
        }
        self.entries.insert(key, None);
        Ok(())
    }

    /// Phase 2: narrow the entry for `key` from `None` to `definition`.
    ///
    /// Never introduces a new key and never moves an existing one.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownKey` if `key` was never seeded,
    /// `RegistryError::AlreadyPopulated` if it already carries a
    /// definition, and `RegistryError::EmptyName` if the definition's
    /// injected name is empty.
    pub fn populate(
        &mut self,
        key: &ActionKey,
        definition: ActionDefinition,
    ) -> Result<(), RegistryError> {
        if definition.name.is_empty() {
            return Err(RegistryError::EmptyName {
                key: key.as_str().to_string(),
            });
        }
        match self.entries.get_mut(key) {
            None => Err(RegistryError::UnknownKey {
                key: key.as_str().to_string(),
            }),
            Some(slot) if slot.is_some() => Err(RegistryError::AlreadyPopulated {
                key: key.as_str().to_string(),
            }),
            Some(slot) => {
                *slot = Some(definition);
                Ok(())
            }
        }
    }

    /// Iterate all identifiers in seed order.
    pub fn keys(&self) -> impl Iterator<Item = &ActionKey> {
        self.entries.keys()
    }

    /// Iterate `(identifier, optional definition)` pairs in seed order.
    pub fn iter(&self) -> impl Iterator<Item = (&ActionKey, Option<&ActionDefinition>)> {
        self.entries.iter().map(|(k, v)| (k, v.as_ref()))
    }

    /// Look up the definition for an identifier. Returns `None` both for
    /// unknown identifiers and for argumentless actions; use
    /// [`contains`](Self::contains) to distinguish.
    pub fn definition(&self, key: &ActionKey) -> Option<&ActionDefinition> {
        self.entries.get(key).and_then(|v| v.as_ref())
    }

    /// Returns true if the identifier was seeded.
    pub fn contains(&self, key: &ActionKey) -> bool {
        self.entries.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ActionKey {
        ActionKey::new(s)
    }

    fn definition(name: &str) -> ActionDefinition {
        ActionDefinition {
            name: name.to_string(),
            properties: IndexMap::new(),
        }
    }

    #[test]
    fn test_seed_preserves_order() {
        let mut registry = ActionRegistry::new();
        for token in ["copy", "paste", "newTab", "closePane"] {
            registry.seed(key(token)).unwrap();
        }
        let order: Vec<&str> = registry.keys().map(|k| k.as_str()).collect();
        assert_eq!(order, vec!["copy", "paste", "newTab", "closePane"]);
    }

    #[test]
    fn test_seed_rejects_duplicate() {
        let mut registry = ActionRegistry::new();
        registry.seed(key("copy")).unwrap();
        let err = registry.seed(key("copy")).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateKey { .. }));
    }

    #[test]
    fn test_populate_narrows_seeded_entry() {
        let mut registry = ActionRegistry::new();
        registry.seed(key("copy")).unwrap();
        registry.populate(&key("copy"), definition("CopyAction")).unwrap();
        assert_eq!(
            registry.definition(&key("copy")).map(|d| d.name.as_str()),
            Some("CopyAction")
        );
    }

    #[test]
    fn test_populate_rejects_unknown_key() {
        let mut registry = ActionRegistry::new();
        registry.seed(key("copy")).unwrap();
        let err = registry
            .populate(&key("paste"), definition("PasteAction"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnknownKey { .. }));
    }

    #[test]
    fn test_populate_rejects_double_population() {
        let mut registry = ActionRegistry::new();
        registry.seed(key("copy")).unwrap();
        registry.populate(&key("copy"), definition("CopyAction")).unwrap();
        let err = registry
            .populate(&key("copy"), definition("CopyAgain"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyPopulated { .. }));
    }

    #[test]
    fn test_populate_rejects_empty_name() {
        let mut registry = ActionRegistry::new();
        registry.seed(key("copy")).unwrap();
        let err = registry.populate(&key("copy"), definition("")).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyName { .. }));
    }

    #[test]
    fn test_populate_does_not_move_entry() {
        let mut registry = ActionRegistry::new();
        for token in ["copy", "paste", "find"] {
            registry.seed(key(token)).unwrap();
        }
        registry.populate(&key("paste"), definition("PasteAction")).unwrap();
        let order: Vec<&str> = registry.keys().map(|k| k.as_str()).collect();
        assert_eq!(order, vec!["copy", "paste", "find"]);
    }

    #[test]
    fn test_definition_none_for_argumentless() {
        let mut registry = ActionRegistry::new();
        registry.seed(key("find")).unwrap();
        assert!(registry.contains(&key("find")));
        assert!(registry.definition(&key("find")).is_none());
    }
}
