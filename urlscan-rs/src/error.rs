//! Error types for urlscan-rs

use thiserror::Error;

/// Result type alias for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Fields a dataset row must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Url,
    Category,
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordField::Url => write!(f, "url"),
            RecordField::Category => write!(f, "category"),
        }
    }
}

/// Scan error types
#[derive(Error, Debug)]
pub enum ScanError {
    /// A dataset row is missing its URL or category
    #[error("Malformed record at line {line}: missing {field}")]
    MalformedRecord { line: u64, field: RecordField },

    /// Dataset header lacks a configured column
    #[error("Dataset has no column named '{0}'")]
    MissingColumn(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV syntax error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
