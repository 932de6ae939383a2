//! Error types for vocab2doc.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for vocab2doc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating a document.
#[derive(Error, Debug)]
pub enum Error {
    /// An argument was not recognized, e.g. an unknown dialect code.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A required upstream input, such as a query results file, was not found.
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// The output sink could not be opened.
    #[error("Resource unavailable: {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error occurred while writing to the output sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Query results could not be parsed.
    #[error("Failed to parse query results: {0}")]
    ResultsParse(#[from] serde_json::Error),
}
