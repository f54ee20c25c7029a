//! Structured error types for orderdesk-core.
//!
//! Library callers get one variant per failure class so the shell can
//! report each one at the action that triggered it. The binary wraps these
//! in `anyhow` where it only needs to display them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Broad failure class of an [`OrderError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown item type
    Lookup,
    /// Defaults that do not fit the item schema
    Validation,
    /// Reading or writing the order file failed
    Io,
    /// The order document is malformed
    Format,
}

/// Main error type for orderdesk-core operations
#[derive(Error, Debug)]
pub enum OrderError {
    /// Item type name not present in the registry
    #[error("Unknown item type '{name}'")]
    UnknownItem { name: String },

    /// Defaults sequence does not line up with the schema
    #[error("Item '{item}' expects {expected} default values, got {actual}")]
    DefaultsMismatch {
        item: String,
        expected: usize,
        actual: usize,
    },

    /// A single default cannot be applied to its field
    #[error("Invalid default for field '{field}' of item '{item}': {reason}")]
    InvalidDefault {
        item: String,
        field: String,
        reason: String,
    },

    /// I/O operation on the order file failed
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// YAML could not be parsed or emitted
    #[error("YAML error in {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Document parsed but does not have the order shape
    #[error("Invalid order document {path:?}: {reason}")]
    Format { path: PathBuf, reason: String },
}

/// Result type alias for orderdesk-core operations
pub type Result<T> = std::result::Result<T, OrderError>;

impl OrderError {
    /// Create an unknown item error
    pub fn unknown_item(name: impl Into<String>) -> Self {
        Self::UnknownItem { name: name.into() }
    }

    /// Create a defaults length mismatch error
    pub fn defaults_mismatch(item: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::DefaultsMismatch {
            item: item.into(),
            expected,
            actual,
        }
    }

    /// Create an invalid default error
    pub fn invalid_default(
        item: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDefault {
            item: item.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a YAML error bound to a path
    pub fn yaml(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            path: path.into(),
            source,
        }
    }

    /// Create a format error
    pub fn format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::UnknownItem { .. } => ErrorKind::Lookup,
            OrderError::DefaultsMismatch { .. } | OrderError::InvalidDefault { .. } => {
                ErrorKind::Validation
            }
            OrderError::Io { .. } => ErrorKind::Io,
            OrderError::Yaml { .. } | OrderError::Format { .. } => ErrorKind::Format,
        }
    }

    /// True when the underlying cause is a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, OrderError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
