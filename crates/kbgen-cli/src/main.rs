//! # kbgen CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Keybinding action boilerplate generator.
///
/// Reads the terminal's keybinding action schema, cross-references its
/// action enumeration with the per-action argument definitions, and renders
/// the generated header/source boilerplate. Also aggregates per-tool YAML
/// command files into a JSON action list.
#[derive(Parser, Debug)]
#[command(name = "kbgen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate boilerplate from the action schema.
    Generate(kbgen_cli::generate::GenerateArgs),
    /// Aggregate YAML command files into a JSON action list.
    Actions(kbgen_cli::actions::ActionsArgs),
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout is reserved for generated text.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => kbgen_cli::generate::run(&args),
        Commands::Actions(args) => kbgen_cli::actions::run(&args),
    }
}
