//! # kbgen-cli — Command-Line Interface
//!
//! Structured clap-based CLI for the keybinding action generator.
//!
//! ## Subcommands
//!
//! - `generate` — Render the header or source boilerplate artifact from
//!   the action schema document.
//! - `actions` — Aggregate a directory of YAML command files into a JSON
//!   action list (a standalone collaborator with no data dependency on the
//!   generator).
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the schema and emit crates — no
//!   registry or emission logic lives here.
//! - Generated text goes to stdout (or `--out`); diagnostics go to stderr.
//!   A fatal error leaves stdout untouched.

pub mod actions;
pub mod generate;
