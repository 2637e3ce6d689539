//! # kbgen-emit — Boilerplate Emission
//!
//! Renders the ordered action registry into generated source text. Two
//! independent emitters consume the registry in its fixed order:
//!
//! - [`header::emit_header`] — one struct stub per argument-bearing action:
//!   accessor stubs, an equality stub, and a deserialization stub.
//! - [`source::emit_source`] — four lookup tables: key-string constants,
//!   the key-name-to-action table, the deserializer dispatch table, and the
//!   display-name table.
//!
//! Both append a fixed `Invalid`/`unbound` sentinel region outside the
//! registry iteration. Neither mutates the registry and they share no
//! state, so they may run in any order or independently.
//!
//! Emission is direct structured emission into a `String`; there is no
//! positional placeholder template to keep in sync.
//!
//! ## Crate Policy
//!
//! - Depends only on `kbgen-core` internally.
//! - Emitters never fail: the one recoverable condition (a property whose
//!   schema entry declares no inferable type) is reported as a warning and
//!   substituted with a placeholder, and generation continues.

pub mod header;
pub mod name;
pub mod source;

pub use header::{emit_header, EmitWarning, HeaderOutput, UNKNOWN_TYPE};
pub use name::{resolve_name, upper_first};
pub use source::emit_source;
