//! Error types for graycheck-io.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for graycheck-io operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading tables or configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// A required column is absent from the header row.
    #[error("invalid input: missing column {column:?}")]
    MissingColumn { column: &'static str },

    /// A cell could not be parsed.
    #[error("invalid input: line {line}, column {column:?}: cannot parse {value:?}")]
    MalformedCell {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The symbol table violates a constellation invariant.
    #[error(transparent)]
    Constellation(#[from] graycheck_core::Error),

    /// CSV framing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error with the offending path
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by the content of the input rather than by I/O.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::MissingColumn { .. }
                | Error::MalformedCell { .. }
                | Error::InvalidConfig(_)
                | Error::Constellation(_)
        )
    }
}
