//! # Generate Subcommand
//!
//! The orchestrator: sequences schema loading, registry construction, and
//! emission, and surfaces the rendered artifact or a terminating failure.
//! On any loader or builder failure nothing is written — no partial output.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};

use kbgen_emit::{emit_header, emit_source};
use kbgen_schema::{build_registry, load_schema};

/// Well-known location of the action schema document, relative to the
/// repository root.
pub const DEFAULT_SCHEMA_PATH: &str = "schemas/actions.schema.json";

/// Arguments for the generate subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the action schema document.
    #[arg(long, default_value = DEFAULT_SCHEMA_PATH)]
    pub schema: PathBuf,

    /// Which artifact to render. Each invocation renders exactly one; run
    /// once per artifact to produce both.
    #[arg(long, value_enum, default_value = "header")]
    pub artifact: Artifact,

    /// Write the artifact to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// The generated-text artifact to render.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Artifact {
    /// Struct stubs for argument-bearing actions.
    Header,
    /// The four lookup tables.
    Source,
}

/// Run the generate subcommand.
pub fn run(args: &GenerateArgs) -> anyhow::Result<()> {
    let text = render(args)?;
    match &args.out {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("cannot write artifact to {}", path.display()))?,
        None => print!("{text}"),
    }
    Ok(())
}

/// Load the schema, build the registry, and render the requested artifact.
///
/// Header-emitter warnings are logged to the diagnostic stream inside the
/// emitter; the artifact is complete either way.
pub fn render(args: &GenerateArgs) -> anyhow::Result<String> {
    let document = load_schema(&args.schema)
        .with_context(|| format!("cannot load schema {}", args.schema.display()))?;

    let registry = build_registry(&document)
        .context("schema does not match the expected keybinding action shape")?;
    tracing::info!(actions = registry.len(), "action registry built");

    let text = match args.artifact {
        Artifact::Header => emit_header(&registry).text,
        Artifact::Source => emit_source(&registry),
    };
    Ok(text)
}
