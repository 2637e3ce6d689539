//! # Schema Document Loading
//!
//! Reads and parses the action schema document. Failure modes are kept
//! distinct so the caller can report them distinctly: a missing file, a
//! file with no content, and content that is not valid JSON.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Error while loading the schema document.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The schema path does not exist.
    #[error("schema file not found: {path}")]
    NotFound {
        /// The path that was requested.
        path: String,
    },

    /// The schema file exists but has no content.
    #[error("schema file is empty: {path}")]
    EmptyInput {
        /// The path that was read.
        path: String,
    },

    /// The content is not valid JSON. Carries the parser's diagnostic.
    #[error("schema file {path} is not valid JSON: {source}")]
    ParseError {
        /// The path that was read.
        path: String,
        /// The underlying parser diagnostic.
        source: serde_json::Error,
    },

    /// IO error reading the file.
    #[error("io error reading schema: {0}")]
    Io(#[from] std::io::Error),
}

/// Read and parse the schema document at `path`.
///
/// On success returns the parsed document with no further validation —
/// structural assumptions are the builder's responsibility. The document
/// preserves the file's declaration order throughout.
///
/// # Errors
///
/// Returns `LoadError::NotFound` if the path does not exist,
/// `LoadError::EmptyInput` if the file has no content (whitespace-only
/// counts — there is no document to parse), and `LoadError::ParseError` if
/// the content is not valid JSON.
pub fn load_schema(path: impl AsRef<Path>) -> Result<Value, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(LoadError::EmptyInput {
            path: path.display().to_string(),
        });
    }

    serde_json::from_str(&content).map_err(|source| LoadError::ParseError {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_schema(dir.path().join("no-such.schema.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn test_empty_file_is_empty_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.flush().unwrap();
        let err = load_schema(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::EmptyInput { .. }));
    }

    #[test]
    fn test_whitespace_only_file_is_empty_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  \n\t\n").unwrap();
        file.flush().unwrap();
        let err = load_schema(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::EmptyInput { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ definitions: oops").unwrap();
        file.flush().unwrap();
        let err = load_schema(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::ParseError { .. }));
    }

    #[test]
    fn test_empty_and_missing_diagnostics_differ() {
        let dir = tempfile::tempdir().unwrap();
        let missing = load_schema(dir.path().join("gone.json")).unwrap_err();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.flush().unwrap();
        let empty = load_schema(file.path()).unwrap_err();

        assert_ne!(missing.to_string(), empty.to_string());
    }

    #[test]
    fn test_valid_document_round_trips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"definitions": {{}}}}"#).unwrap();
        file.flush().unwrap();
        let doc = load_schema(file.path()).unwrap();
        assert!(doc.get("definitions").is_some());
    }
}
