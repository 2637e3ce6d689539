//! # kbgen-schema — Schema Loading & Registry Construction
//!
//! The schema stage of the generator: reads the keybinding action schema
//! document from disk and cross-references its sections into the ordered
//! [`ActionRegistry`](kbgen_core::ActionRegistry) the emitters consume.
//!
//! ## Loading (`loader`)
//!
//! [`loader::load_schema`] reads and parses the document, failing fast on a
//! missing path, empty content, or malformed JSON. It performs no structural
//! validation — structural assumptions belong to the builder.
//!
//! ## Building (`builder`)
//!
//! [`builder::build_registry`] reads the `ShortcutActionName` enumeration,
//! seeds the registry in declaration order, then walks the keybinding
//! command's `oneOf` alternatives to resolve each referenced definition's
//! argument properties. Documents that do not match the fixed shape this
//! builder assumes are rejected with a structured
//! [`SchemaShapeError`](builder::SchemaShapeError) before any emission.
//!
//! ## Crate Policy
//!
//! - Depends only on `kbgen-core` internally.
//! - The document is navigated as a generic `serde_json::Value` tree; this
//!   is deliberately not a general JSON Schema validator.
//! - The parsed document is never mutated.

pub mod builder;
pub mod loader;

pub use builder::{build_registry, SchemaShapeError};
pub use loader::{load_schema, LoadError};
