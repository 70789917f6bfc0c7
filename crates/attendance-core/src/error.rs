//! Error types for attendance-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in attendance-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Table is structurally unusable (e.g. no header)
    #[error("failed to parse table '{path}': {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Record-level error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Configured input file does not exist
    #[error("input file '{}' does not exist{}", .path.display(), format_siblings(.siblings))]
    InputNotFound { path: PathBuf, siblings: Vec<PathBuf> },

    /// No column looks like it holds person names
    #[error("no name column found; available columns:\n{}", .available.join("\n"))]
    NoNameColumn { available: Vec<String> },

    /// Save was attempted with nobody selected
    #[error("no people selected")]
    EmptySelection,

    /// A requested name is not part of the name set
    #[error("unknown name '{0}'")]
    UnknownName(String),

    /// Checklist row index out of range
    #[error("no row {index} in checklist of {len}")]
    InvalidSelection { index: usize, len: usize },

    /// Failed to write an attendance file
    #[error("failed to save attendance file '{path}': {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error came from loading the source table
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::FileRead { .. }
                | Error::CsvParse { .. }
                | Error::Csv { .. }
                | Error::InputNotFound { .. }
        )
    }
}

fn format_siblings(siblings: &[PathBuf]) -> String {
    if siblings.is_empty() {
        return String::new();
    }
    let names: Vec<String> = siblings.iter().map(|p| p.display().to_string()).collect();
    format!("; similar files found: {}", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_classification() {
        let err = Error::CsvParse {
            path: PathBuf::from("people.tsv"),
            message: "no columns".to_string(),
        };
        assert!(err.is_load_error());
        assert!(!Error::EmptySelection.is_load_error());
    }

    #[test]
    fn test_no_name_column_lists_headers() {
        let err = Error::NoNameColumn {
            available: vec!["id".to_string(), "age".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("id\nage"));
    }

    #[test]
    fn test_input_not_found_mentions_siblings() {
        let err = Error::InputNotFound {
            path: PathBuf::from("data/dobs.tsv"),
            siblings: vec![PathBuf::from("data/other.tsv")],
        };
        assert!(err.to_string().contains("data/other.tsv"));

        let bare = Error::InputNotFound {
            path: PathBuf::from("data/dobs.tsv"),
            siblings: Vec::new(),
        };
        assert_eq!(bare.to_string(), "input file 'data/dobs.tsv' does not exist");
    }
}
