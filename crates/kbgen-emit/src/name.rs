//! # Canonical Name Resolution
//!
//! Every generated artifact refers to an action by one canonical
//! PascalCase-like name. An argument-bearing action is named by its
//! definition; an argumentless action derives its name from the raw
//! identifier.

use kbgen_core::{ActionDefinition, ActionKey};

/// Resolve the canonical name used for `key` in all generated artifacts.
///
/// A present definition names the action verbatim (the registry guarantees
/// that name is non-empty). Otherwise the name is derived by upper-casing
/// the identifier's first character, retaining the remainder unchanged —
/// the derived name is always non-empty for a non-empty identifier.
pub fn resolve_name(key: &ActionKey, definition: Option<&ActionDefinition>) -> String {
    match definition {
        Some(definition) => definition.name.clone(),
        None => upper_first(key.as_str()),
    }
}

/// Upper-case the first character of `token`, leaving the rest unchanged
/// (`"closePane"` -> `"ClosePane"`). Also used for property accessor names.
pub fn upper_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
