//! Error types for workflow modelling and rendering.

use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for actionsmith operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, validating or rendering a workflow.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A precondition of the requested operation is not met.
    ///
    /// Raised before any output is produced, e.g. when a consistency check is
    /// requested for a workflow without a source file.
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(actionsmith::configuration),
        help("Set the missing workflow field or pass it explicitly in the render options")
    )]
    Configuration(String),

    /// The workflow model itself is malformed.
    #[error("Validation failed: {0}")]
    #[diagnostic(code(actionsmith::validation))]
    Validation(String),

    /// The assembled document could not be serialized to YAML.
    #[error("Serialization failed: {0}")]
    #[diagnostic(code(actionsmith::serialization))]
    Serialization(String),

    /// Reading or writing a file failed.
    #[error("I/O error at {}: {source}", path.display())]
    #[diagnostic(
        code(actionsmith::io),
        help("Check that the repository root exists and is writable")
    )]
    Io {
        /// The path being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a validation error.
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Wrap an I/O error together with the path it happened on.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
