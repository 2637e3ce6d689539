//! # Source Emitter
//!
//! Renders the four lookup tables that wire the action vocabulary into the
//! settings model, one row per identifier in registry order:
//!
//! 1. a `constexpr` key-string constant per action;
//! 2. the key-name-to-action lookup table, used at runtime to resolve an
//!    incoming string token to the strongly-typed action;
//! 3. the deserializer dispatch table — only argument-bearing actions get a
//!    row, argumentless ones take the no-arguments default path;
//! 4. the display-name lookup table, mapping every action (argumentless
//!    included) to a localized-resource placeholder token.
//!
//! The fixed `Invalid`/`unbound` sentinel rows are appended outside the
//! registry iteration; the sentinel is never part of the registry.

use std::fmt::Write;

use kbgen_core::ActionRegistry;

use crate::name::resolve_name;

const PROLOGUE: &str = "\
// Generated lookup tables for keybinding actions. Row order follows the
// schema's action enumeration and must stay that way: the output is diffed
// against the previous generation.

";

/// Render the source artifact from the registry.
///
/// Infallible: the source tables record names and key strings only, so
/// there is nothing to warn about. Two runs over the same registry produce
/// byte-identical text.
pub fn emit_source(registry: &ActionRegistry) -> String {
    let mut buf = String::from(PROLOGUE);

    emit_key_constants(&mut buf, registry);
    emit_key_table(&mut buf, registry);
    emit_dispatch_table(&mut buf, registry);
    emit_display_table(&mut buf, registry);

    buf
}

/// Table (a): one key-string constant per action, plus the sentinel.
fn emit_key_constants(buf: &mut String, registry: &ActionRegistry) {
    for (key, definition) in registry.iter() {
        let name = resolve_name(key, definition);
        let _ = writeln!(
            buf,
            "static constexpr std::string_view {name}Key{{ \"{key}\" }};"
        );
    }
    // Reserved to remove a keybinding instead of mapping it to an action.
    let _ = writeln!(buf, "static constexpr std::string_view UnboundKey{{ \"unbound\" }};");
    let _ = writeln!(buf);
}

/// Table (b): key name -> action, every action plus the sentinel row.
fn emit_key_table(buf: &mut String, registry: &ActionRegistry) {
    let _ = writeln!(buf, "static constexpr til::static_map ActionKeyNamesMap{{");
    for (key, definition) in registry.iter() {
        let name = resolve_name(key, definition);
        let _ = writeln!(
            buf,
            "    KeyToActionPair{{ {name}Key, ShortcutAction::{name} }},"
        );
    }
    let _ = writeln!(buf, "    KeyToActionPair{{ UnboundKey, ShortcutAction::Invalid }},");
    let _ = writeln!(buf, "}};");
    let _ = writeln!(buf);
}

/// Table (c): deserializer dispatch, argument-bearing actions only.
fn emit_dispatch_table(buf: &mut String, registry: &ActionRegistry) {
    let _ = writeln!(buf, "static constexpr til::static_map argSerializerMap{{");
    for (key, definition) in registry.iter() {
        let Some(definition) = definition else {
            continue;
        };
        let name = resolve_name(key, Some(definition));
        let _ = writeln!(
            buf,
            "    ActionToSerializersPair{{ ShortcutAction::{name}, {{ {name}::FromJson, {name}::ToJson }} }},"
        );
    }
    let _ = writeln!(buf, "}};");
    let _ = writeln!(buf);
}

/// Table (d): action -> localized display-name resource, every action plus
/// the sentinel row.
fn emit_display_table(buf: &mut String, registry: &ActionRegistry) {
    let _ = writeln!(
        buf,
        "static const std::unordered_map<ShortcutAction, winrt::hstring> ActionToNameMap{{"
    );
    for (key, definition) in registry.iter() {
        let name = resolve_name(key, definition);
        let _ = writeln!(
            buf,
            "    {{ ShortcutAction::{name}, RS_(L\"{name}CommandKey\") }},"
        );
    }
    let _ = writeln!(buf, "    {{ ShortcutAction::Invalid, {{}} }},");
    let _ = writeln!(buf, "}};");
}
