//! # Header Emitter
//!
//! Renders one struct-like stub per argument-bearing action: an accessor
//! stub per declared property, an equality-comparison stub referencing all
//! of them, and a deserialization stub reading each property by its
//! schema-declared name. Argumentless actions produce no struct.
//!
//! A property whose schema entry declares neither a type nor a reference
//! gets the [`UNKNOWN_TYPE`] placeholder and a warning; generation
//! continues. This is a deliberate best-effort policy: "I cannot infer a
//! concrete type here" is not "the schema is malformed."

use std::fmt::Write;

use kbgen_core::{ActionDefinition, ActionKey, ActionRegistry, PropertySpec};

use crate::name::{resolve_name, upper_first};

/// Placeholder substituted for a property type the emitter cannot infer.
/// Generated stubs carrying it require manual follow-up.
pub const UNKNOWN_TYPE: &str = "UNKNOWN_TYPE";

const PROLOGUE: &str = "\
// Generated boilerplate for keybinding action argument types.
// Each struct is a starting stub: merge it into the settings model and
// replace any UNKNOWN_TYPE placeholder with a concrete type.

";

const SENTINEL: &str = "\
    // Invalid / \"unbound\" is the no-match sentinel. It carries no
    // arguments; no struct is generated for it.
";

/// A recoverable emission condition: a property without an inferable type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitWarning {
    /// The action whose definition declares the property.
    pub action: ActionKey,
    /// The property that has neither a type nor a reference.
    pub property: String,
}

impl std::fmt::Display for EmitWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "action '{}': property '{}' has no inferable type; emitted {UNKNOWN_TYPE}",
            self.action, self.property
        )
    }
}

/// The rendered header artifact plus any recoverable warnings.
#[derive(Debug, Clone)]
pub struct HeaderOutput {
    /// The generated text.
    pub text: String,
    /// Warnings collected during emission, in registry order.
    pub warnings: Vec<EmitWarning>,
}

/// Render the header artifact from the registry.
///
/// Iterates the registry in its fixed order; only populated entries emit a
/// struct. Warnings are collected in [`HeaderOutput::warnings`] and also
/// logged via `tracing::warn!`.
pub fn emit_header(registry: &ActionRegistry) -> HeaderOutput {
    let mut text = String::from(PROLOGUE);
    let mut warnings = Vec::new();

    for (key, definition) in registry.iter() {
        let Some(definition) = definition else {
            continue;
        };
        let name = resolve_name(key, Some(definition));
        emit_struct(&mut text, key, &name, definition, &mut warnings);
    }

    text.push_str(SENTINEL);
    HeaderOutput { text, warnings }
}

fn emit_struct(
    buf: &mut String,
    key: &ActionKey,
    name: &str,
    definition: &ActionDefinition,
    warnings: &mut Vec<EmitWarning>,
) {
    let _ = writeln!(buf, "    struct {name} : public {name}T<{name}>");
    let _ = writeln!(buf, "    {{");
    let _ = writeln!(buf, "        {name}() = default;");
    let _ = writeln!(buf);

    for (property, spec) in &definition.properties {
        let accessor = upper_first(property);
        let recorded = match spec {
            PropertySpec::Primitive(primitive) => primitive.as_str(),
            PropertySpec::Reference(reference) => reference.as_str(),
            PropertySpec::Unknown => {
                let warning = EmitWarning {
                    action: key.clone(),
                    property: property.clone(),
                };
                tracing::warn!(%warning, "substituting placeholder type");
                warnings.push(warning);
                UNKNOWN_TYPE
            }
        };
        let _ = writeln!(buf, "        ACTION_ARG({recorded}, {accessor});");
    }
    if !definition.properties.is_empty() {
        let _ = writeln!(buf);
    }

    emit_equality(buf, name, definition);
    let _ = writeln!(buf);
    emit_from_json(buf, name, definition);

    let _ = writeln!(buf, "    }};");
    let _ = writeln!(buf);
}

fn emit_equality(buf: &mut String, name: &str, definition: &ActionDefinition) {
    let _ = writeln!(buf, "        bool Equals(const IActionArgs& other)");
    let _ = writeln!(buf, "        {{");
    let _ = writeln!(buf, "            auto otherAsUs = other.try_as<{name}>();");
    if definition.properties.is_empty() {
        let _ = writeln!(buf, "            return otherAsUs != nullptr;");
    } else {
        let _ = write!(buf, "            return otherAsUs");
        for property in definition.properties.keys() {
            let accessor = upper_first(property);
            let _ = write!(buf, " &&\n                   otherAsUs->_{accessor} == _{accessor}");
        }
        let _ = writeln!(buf, ";");
    }
    let _ = writeln!(buf, "        }}");
}

fn emit_from_json(buf: &mut String, name: &str, definition: &ActionDefinition) {
    let _ = writeln!(buf, "        static FromJsonResult FromJson(const Json::Value& json)");
    let _ = writeln!(buf, "        {{");
    let _ = writeln!(buf, "            auto args = winrt::make_self<{name}>();");
    for property in definition.properties.keys() {
        let accessor = upper_first(property);
        let _ = writeln!(
            buf,
            "            JsonUtils::GetValueForKey(json, \"{property}\", args->_{accessor});"
        );
    }
    let _ = writeln!(buf, "            return {{ *args, {{}} }};");
    let _ = writeln!(buf, "        }}");
}
