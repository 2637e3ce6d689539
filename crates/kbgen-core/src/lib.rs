//! # kbgen-core — Foundational Types for kbgen
//!
//! This crate is the bedrock of the kbgen workspace. It defines the types
//! that flow between the schema stage and the emission stage: action
//! identifiers, property schemas, and the ordered action registry. Every
//! other crate in the workspace depends on `kbgen-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrapper for action identifiers.** [`ActionKey`] is a newtype
//!    over the raw schema token. No bare strings for identifiers.
//!
//! 2. **Two-phase registry construction.** [`ActionRegistry::seed`]
//!    establishes key order and completeness; [`ActionRegistry::populate`]
//!    only narrows `None` to a definition and never introduces new keys.
//!    The registry is read-only after construction.
//!
//! 3. **Insertion order is load-bearing.** Every generated table iterates
//!    the registry in seed order, which is the schema enum's declaration
//!    order. Deterministic, diffable output depends on it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `kbgen-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod action;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use action::{ActionDefinition, ActionKey, ActionRegistry, PropertySpec};
pub use error::RegistryError;
