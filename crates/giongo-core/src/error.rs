use std::path::PathBuf;
use std::time::Duration;

use giongo_completion::CompletionError;

/// Frequency corpus could not be loaded as a whole
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("Failed to read frequency data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse frequency data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single generation attempt failed
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Input item is empty")]
    EmptyItem,

    #[error("Completion failed: {0}")]
    Completion(#[from] CompletionError),

    #[error("Completion timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid completion content: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("Completion left field {0} empty")]
    EmptyField(&'static str),
}

/// A deck line does not carry the two word forms a card needs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedCardError {
    #[error("expected at least 4 ';'-separated fields, found {found}")]
    MissingSourceField { found: usize },

    #[error("expected at least 2 tab-separated forms in source item, found {found}")]
    MissingAlternateForm { found: usize },

    #[error("source item has an empty word form")]
    EmptyForm,
}

/// An export file could not be created or finalized
#[derive(Debug, thiserror::Error)]
pub enum OutputWriteError {
    #[error("Failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
