//! # Actions Subcommand
//!
//! Aggregates a directory of per-tool YAML command files into a single JSON
//! action list. This collaborator has no data dependency on the generator
//! core; it shares only the CLI surface.
//!
//! Files are processed in sorted path order so the aggregated list is
//! deterministic under any directory enumeration order.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Args;
use serde_json::{json, Value};

/// Arguments for the actions subcommand.
#[derive(Args, Debug)]
pub struct ActionsArgs {
    /// Directory of YAML command files.
    pub dir: PathBuf,

    /// Write the action list to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Run the actions subcommand.
pub fn run(args: &ActionsArgs) -> anyhow::Result<()> {
    let text = aggregate(&args.dir)?;
    match &args.out {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("cannot write action list to {}", path.display()))?,
        None => print!("{text}"),
    }
    Ok(())
}

/// Aggregate every YAML file under `dir` into the JSON action list.
///
/// Each file contributes its `command` entries — a single mapping or a
/// sequence of mappings. Files without a `command` field are skipped with
/// a debug note. Any file that fails to parse is fatal: the input is a
/// static local directory with no transient-failure class.
pub fn aggregate(dir: &Path) -> anyhow::Result<String> {
    let files = find_yaml_files(dir)
        .with_context(|| format!("cannot read command directory {}", dir.display()))?;

    let mut actions = Vec::new();
    for path in &files {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML in {}", path.display()))?;
        let value = yaml_to_json_value(&yaml)
            .with_context(|| format!("cannot convert {} to JSON", path.display()))?;

        match value.get("command") {
            None => {
                tracing::debug!(file = %path.display(), "no 'command' entry; skipping");
            }
            Some(Value::Array(entries)) => actions.extend(entries.iter().cloned()),
            Some(single) => actions.push(single.clone()),
        }
    }

    let envelope = json!({ "actions": actions });
    let mut text = serde_json::to_string_pretty(&envelope)?;
    text.push('\n');
    Ok(text)
}

/// Recursively collect `*.yaml`/`*.yml` files under `dir`, sorted by path.
fn find_yaml_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(find_yaml_files(&path)?);
        } else if path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == "yaml" || e == "yml")
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Command files use only the JSON-compatible subset of YAML. Tags are
/// ignored; numeric and boolean map keys are stringified.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> anyhow::Result<Value> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                match serde_json::Number::from_f64(f) {
                    Some(number) => Ok(Value::Number(number)),
                    None => bail!("cannot represent float {f} in JSON"),
                }
            } else {
                bail!("unsupported YAML number: {n:?}")
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: anyhow::Result<Vec<Value>> = seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut object = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => bail!("unsupported YAML map key type: {other:?}"),
                };
                object.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(object))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
