//! # Action Registry Construction
//!
//! Cross-references the schema's enumerated action-name list with its
//! per-action property definitions, producing the ordered registry.
//!
//! ## Completeness Invariant
//!
//! The `ShortcutActionName` enumeration (minus the `unbound` sentinel) is
//! both the key order and the completeness contract: every one of those
//! identifiers, and only those, ends up as a registry key. Referenced
//! definitions then narrow individual entries; an identifier no definition
//! references stays `None` and is treated as argumentless downstream.

use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

use kbgen_core::{ActionDefinition, ActionKey, ActionRegistry, PropertySpec, RegistryError};

/// Reserved enum value denoting an explicitly removed keybinding. It names
/// the absence of an action and never enters the registry.
pub const UNBOUND_SENTINEL: &str = "unbound";

/// Definition name of the action-name enumeration itself.
const ACTION_NAME_ENUM: &str = "ShortcutActionName";

/// JSON Pointer to the keybinding command's alternatives.
const COMMAND_ONE_OF: &str = "/definitions/Keybinding/properties/command/oneOf";

/// The document does not match the fixed schema shape this builder assumes.
/// All variants abort generation before any emission.
#[derive(Error, Debug)]
pub enum SchemaShapeError {
    /// The document has no `definitions` object.
    #[error("schema has no 'definitions' object")]
    MissingDefinitions,

    /// `definitions.ShortcutActionName.enum` is absent or not an array.
    #[error("schema has no 'ShortcutActionName' enumeration")]
    MissingActionEnum,

    /// An enumeration entry is not a string.
    #[error("'ShortcutActionName' enum entry {index} is not a string")]
    EnumEntryNotString {
        /// Zero-based position of the offending entry.
        index: usize,
    },

    /// The enumeration lists the same identifier twice.
    #[error("'ShortcutActionName' enum lists '{key}' more than once")]
    DuplicateEnumEntry {
        /// The repeated identifier.
        key: String,
    },

    /// The keybinding command's `oneOf` list is absent or not an array.
    #[error("schema has no keybinding command 'oneOf' list")]
    MissingCommandAlternatives,

    /// A command alternative references a definition that does not exist.
    #[error("command alternative references unknown definition '{reference}'")]
    UnknownReference {
        /// The bare definition name that failed to resolve.
        reference: String,
    },

    /// A referenced definition has no `allOf` composition.
    #[error("definition '{definition}' has no 'allOf' composition")]
    MissingComposition {
        /// The definition missing its composition.
        definition: String,
    },

    /// The last `allOf` element of a referenced definition has no
    /// `properties` object.
    #[error("definition '{definition}' has no 'properties' in its final composition")]
    MissingProperties {
        /// The definition missing its properties.
        definition: String,
    },

    /// A referenced definition's `action.pattern` is absent or not a string.
    #[error("definition '{definition}' declares no 'action' pattern")]
    MissingActionPattern {
        /// The definition missing its discriminator pattern.
        definition: String,
    },

    /// A definition targeted an identifier the registry rejected: not part
    /// of the enumeration, or already populated by another definition.
    #[error("definition '{definition}' cannot populate the registry: {source}")]
    Populate {
        /// The definition whose pattern was rejected.
        definition: String,
        /// The underlying registry violation.
        source: RegistryError,
    },
}

/// Build the ordered action registry from a parsed schema document.
///
/// Phase 1 seeds every `ShortcutActionName` enum identifier (minus the
/// `unbound` sentinel) to `None`, in declaration order. Phase 2 walks the
/// keybinding command's `oneOf` alternatives, resolves each `$ref` to its
/// definition, and narrows the entry named by that definition's
/// `action.pattern` to the definition's argument properties with the bare
/// definition name injected.
///
/// Alternatives without a `$ref` (e.g. a null-type alternative) and the
/// reference to `ShortcutActionName` itself are discarded — the former
/// carry no definition, the latter names the enumeration rather than an
/// argument-bearing action.
///
/// # Errors
///
/// Returns [`SchemaShapeError`] whenever a structurally-required field is
/// absent or mistyped; see the variant docs.
pub fn build_registry(document: &Value) -> Result<ActionRegistry, SchemaShapeError> {
    let definitions = document
        .get("definitions")
        .and_then(Value::as_object)
        .ok_or(SchemaShapeError::MissingDefinitions)?;

    let enum_entries = definitions
        .get(ACTION_NAME_ENUM)
        .and_then(|d| d.get("enum"))
        .and_then(Value::as_array)
        .ok_or(SchemaShapeError::MissingActionEnum)?;

    // Phase 1: seed. Declaration order here is the order of every emitted
    // table.
    let mut registry = ActionRegistry::new();
    for (index, entry) in enum_entries.iter().enumerate() {
        let token = entry
            .as_str()
            .ok_or(SchemaShapeError::EnumEntryNotString { index })?;
        if token == UNBOUND_SENTINEL {
            continue;
        }
        registry
            .seed(ActionKey::new(token))
            .map_err(|_| SchemaShapeError::DuplicateEnumEntry {
                key: token.to_string(),
            })?;
    }

    // Phase 2: resolve referenced definitions and narrow their entries.
    let alternatives = document
        .pointer(COMMAND_ONE_OF)
        .and_then(Value::as_array)
        .ok_or(SchemaShapeError::MissingCommandAlternatives)?;

    for alternative in alternatives {
        let Some(reference) = alternative.get("$ref").and_then(Value::as_str) else {
            continue;
        };
        let name = bare_definition_name(reference);
        if name == ACTION_NAME_ENUM {
            continue;
        }

        let definition =
            definitions
                .get(name)
                .ok_or_else(|| SchemaShapeError::UnknownReference {
                    reference: name.to_string(),
                })?;

        let (key, resolved) = resolve_definition(name, definition)?;
        registry
            .populate(&key, resolved)
            .map_err(|source| SchemaShapeError::Populate {
                definition: name.to_string(),
                source,
            })?;
    }

    Ok(registry)
}

/// Strip a `$ref` URI to its bare definition name
/// (`#/definitions/CopyAction` -> `CopyAction`).
fn bare_definition_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

/// Extract one referenced definition's canonical key and argument
/// properties from its last `allOf` composition.
fn resolve_definition(
    name: &str,
    definition: &Value,
) -> Result<(ActionKey, ActionDefinition), SchemaShapeError> {
    let composition = definition
        .get("allOf")
        .and_then(Value::as_array)
        .and_then(|parts| parts.last())
        .ok_or_else(|| SchemaShapeError::MissingComposition {
            definition: name.to_string(),
        })?;

    let properties = composition
        .get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| SchemaShapeError::MissingProperties {
            definition: name.to_string(),
        })?;

    let pattern = properties
        .get("action")
        .and_then(|action| action.get("pattern"))
        .and_then(Value::as_str)
        .ok_or_else(|| SchemaShapeError::MissingActionPattern {
            definition: name.to_string(),
        })?;

    // The 'action' discriminator is consumed here; the remaining entries
    // are the action's arguments, in declaration order.
    let mut resolved = IndexMap::new();
    for (property, schema) in properties {
        if property == "action" {
            continue;
        }
        resolved.insert(property.clone(), classify_property(schema));
    }

    Ok((
        ActionKey::new(pattern),
        ActionDefinition {
            name: name.to_string(),
            properties: resolved,
        },
    ))
}

/// Classify one property's schema entry by what it declares.
fn classify_property(schema: &Value) -> PropertySpec {
    if let Some(primitive) = schema.get("type").and_then(Value::as_str) {
        PropertySpec::Primitive(primitive.to_string())
    } else if let Some(reference) = schema.get("$ref").and_then(Value::as_str) {
        PropertySpec::Reference(bare_definition_name(reference).to_string())
    } else {
        PropertySpec::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// The worked example from the design notes: two real actions plus the
    /// sentinel, one argument-bearing definition.
    fn copy_paste_document() -> Value {
        json!({
            "definitions": {
                "ShortcutActionName": {
                    "enum": ["copy", "paste", "unbound"]
                },
                "CopyArgs": {
                    "allOf": [
                        { "$ref": "#/definitions/ShortcutAction" },
                        {
                            "properties": {
                                "action": { "pattern": "copy" },
                                "singleLine": { "type": "boolean" }
                            }
                        }
                    ]
                },
                "Keybinding": {
                    "properties": {
                        "command": {
                            "oneOf": [
                                { "$ref": "#/definitions/CopyArgs" }
                            ]
                        }
                    }
                }
            }
        })
    }

    #[test]
    fn test_worked_example() {
        let registry = build_registry(&copy_paste_document()).unwrap();

        let order: Vec<&str> = registry.keys().map(|k| k.as_str()).collect();
        assert_eq!(order, vec!["copy", "paste"]);

        let copy = registry.definition(&ActionKey::new("copy")).unwrap();
        assert_eq!(copy.name, "CopyArgs");
        assert_eq!(
            copy.properties.get("singleLine"),
            Some(&PropertySpec::Primitive("boolean".to_string()))
        );
        assert!(!copy.properties.contains_key("action"));

        assert!(registry.definition(&ActionKey::new("paste")).is_none());
        assert!(!registry.contains(&ActionKey::new("unbound")));
    }

    #[test]
    fn test_enum_order_is_registry_order() {
        let document = json!({
            "definitions": {
                "ShortcutActionName": {
                    "enum": ["newTab", "closePane", "unbound", "copy", "find"]
                },
                "Keybinding": {
                    "properties": { "command": { "oneOf": [] } }
                }
            }
        });
        let registry = build_registry(&document).unwrap();
        let order: Vec<&str> = registry.keys().map(|k| k.as_str()).collect();
        assert_eq!(order, vec!["newTab", "closePane", "copy", "find"]);
    }

    #[test]
    fn test_non_reference_alternatives_discarded() {
        let mut document = copy_paste_document();
        let one_of = document
            .pointer_mut("/definitions/Keybinding/properties/command/oneOf")
            .unwrap()
            .as_array_mut()
            .unwrap();
        one_of.push(json!({ "type": "null" }));
        one_of.push(json!({ "$ref": "#/definitions/ShortcutActionName" }));

        let registry = build_registry(&document).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_missing_definitions_rejected() {
        let err = build_registry(&json!({})).unwrap_err();
        assert!(matches!(err, SchemaShapeError::MissingDefinitions));
    }

    #[test]
    fn test_missing_enum_rejected() {
        let err = build_registry(&json!({ "definitions": {} })).unwrap_err();
        assert!(matches!(err, SchemaShapeError::MissingActionEnum));
    }

    #[test]
    fn test_missing_command_alternatives_rejected() {
        let document = json!({
            "definitions": {
                "ShortcutActionName": { "enum": ["copy", "unbound"] }
            }
        });
        let err = build_registry(&document).unwrap_err();
        assert!(matches!(err, SchemaShapeError::MissingCommandAlternatives));
    }

    #[test]
    fn test_unknown_reference_rejected() {
        let mut document = copy_paste_document();
        document
            .pointer_mut("/definitions/Keybinding/properties/command/oneOf")
            .unwrap()
            .as_array_mut()
            .unwrap()
            .push(json!({ "$ref": "#/definitions/NoSuchArgs" }));
        let err = build_registry(&document).unwrap_err();
        match err {
            SchemaShapeError::UnknownReference { reference } => {
                assert_eq!(reference, "NoSuchArgs");
            }
            other => panic!("expected UnknownReference, got: {other}"),
        }
    }

    #[test]
    fn test_duplicate_enum_entry_rejected() {
        let document = json!({
            "definitions": {
                "ShortcutActionName": { "enum": ["copy", "copy", "unbound"] },
                "Keybinding": {
                    "properties": { "command": { "oneOf": [] } }
                }
            }
        });
        let err = build_registry(&document).unwrap_err();
        assert!(matches!(err, SchemaShapeError::DuplicateEnumEntry { .. }));
    }

    #[test]
    fn test_pattern_outside_enum_rejected() {
        let mut document = copy_paste_document();
        *document
            .pointer_mut("/definitions/CopyArgs/allOf/1/properties/action/pattern")
            .unwrap() = json!("notAnAction");
        let err = build_registry(&document).unwrap_err();
        match err {
            SchemaShapeError::Populate { definition, source } => {
                assert_eq!(definition, "CopyArgs");
                assert!(matches!(source, RegistryError::UnknownKey { .. }));
            }
            other => panic!("expected Populate, got: {other}"),
        }
    }

    #[test]
    fn test_definition_without_all_of_rejected() {
        let mut document = copy_paste_document();
        document["definitions"]["CopyArgs"] = json!({ "properties": {} });
        let err = build_registry(&document).unwrap_err();
        assert!(matches!(err, SchemaShapeError::MissingComposition { .. }));
    }

    #[test]
    fn test_definition_without_pattern_rejected() {
        let mut document = copy_paste_document();
        document["definitions"]["CopyArgs"]["allOf"][1]["properties"]["action"] =
            json!({ "$ref": "#/definitions/ShortcutActionName" });
        let err = build_registry(&document).unwrap_err();
        assert!(matches!(err, SchemaShapeError::MissingActionPattern { .. }));
    }

    #[test]
    fn test_last_composition_wins() {
        let mut document = copy_paste_document();
        document["definitions"]["CopyArgs"]["allOf"] = json!([
            {
                "properties": {
                    "action": { "pattern": "paste" },
                    "stale": { "type": "string" }
                }
            },
            {
                "properties": {
                    "action": { "pattern": "copy" },
                    "singleLine": { "type": "boolean" }
                }
            }
        ]);
        let registry = build_registry(&document).unwrap();
        let copy = registry.definition(&ActionKey::new("copy")).unwrap();
        assert!(copy.properties.contains_key("singleLine"));
        assert!(!copy.properties.contains_key("stale"));
    }

    #[test]
    fn test_property_classification() {
        let mut document = copy_paste_document();
        document["definitions"]["CopyArgs"]["allOf"][1]["properties"] = json!({
            "action": { "pattern": "copy" },
            "singleLine": { "type": "boolean" },
            "format": { "$ref": "#/definitions/CopyFormat" },
            "mystery": { "description": "neither type nor reference" }
        });
        document["definitions"]["CopyFormat"] = json!({ "enum": ["plain", "html"] });

        let registry = build_registry(&document).unwrap();
        let copy = registry.definition(&ActionKey::new("copy")).unwrap();
        assert_eq!(
            copy.properties.get("format"),
            Some(&PropertySpec::Reference("CopyFormat".to_string()))
        );
        assert_eq!(copy.properties.get("mystery"), Some(&PropertySpec::Unknown));
    }

    #[test]
    fn test_property_order_preserved() {
        let mut document = copy_paste_document();
        document["definitions"]["CopyArgs"]["allOf"][1]["properties"] = json!({
            "action": { "pattern": "copy" },
            "singleLine": { "type": "boolean" },
            "dismissSelection": { "type": "boolean" },
            "copyFormatting": { "type": "string" }
        });
        let registry = build_registry(&document).unwrap();
        let copy = registry.definition(&ActionKey::new("copy")).unwrap();
        let props: Vec<&str> = copy.properties.keys().map(|s| s.as_str()).collect();
        assert_eq!(props, vec!["singleLine", "dismissSelection", "copyFormatting"]);
    }
}
