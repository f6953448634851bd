//! Error types for the gridcab crate

use thiserror::Error;

use crate::types::Action;

/// Main error type for the gridcab crate
///
/// Every variant signals a programming-contract violation or a broken
/// configuration; there are no transient or retryable failure classes in
/// the learning core.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("state '{state}' has never been inserted into the Q-table (call ensure first)")]
    UnknownState { state: String },

    #[error("action '{action}' is not part of the configured action set")]
    InvalidAction { action: Action },

    #[error("action set is empty")]
    EmptyActionSet,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
