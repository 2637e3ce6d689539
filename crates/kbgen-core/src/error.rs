//! # Registry Errors
//!
//! Violations of the two-phase registry construction contract. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Phase 1 (`seed`) may only fail on a duplicate key. Phase 2 (`populate`)
//! may only narrow an existing `None` entry, so an unknown key, a second
//! population, or an empty definition name are all rejected.

use thiserror::Error;

/// Error raised when registry construction violates its invariants.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The same key was seeded twice.
    #[error("duplicate action identifier '{key}'")]
    DuplicateKey {
        /// The offending action identifier.
        key: String,
    },

    /// `populate` named a key that was never seeded.
    #[error("action identifier '{key}' is not part of the seeded enumeration")]
    UnknownKey {
        /// The offending action identifier.
        key: String,
    },

    /// `populate` was called twice for the same key.
    #[error("action identifier '{key}' already carries a definition")]
    AlreadyPopulated {
        /// The offending action identifier.
        key: String,
    },

    /// A definition arrived without a usable name.
    #[error("definition for action identifier '{key}' has an empty name")]
    EmptyName {
        /// The action identifier the unnamed definition targeted.
        key: String,
    },
}
