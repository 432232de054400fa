//! Error types for pantry-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading and validating a policy lock.
#[derive(Debug, Error)]
pub enum LockError {
    /// Underlying I/O failure reading the lock file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The lock file is not a valid JSON document.
    #[error("failed to parse policy lock at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A required top-level field is absent from the lock document.
    #[error("policy lock is missing required field '{field}'")]
    MissingField { field: &'static str },

    /// A top-level field is present but has the wrong shape.
    #[error("policy lock field '{field}' is malformed: {reason}")]
    MalformedField { field: &'static str, reason: String },

    /// A cookbook entry could not be deserialized.
    #[error("malformed cookbook lock entry '{name}': {source}")]
    Entry {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A cookbook entry parsed but fails the lock's consistency rules.
    #[error("invalid cookbook lock '{name}': {reason}")]
    InvalidCookbook { name: String, reason: String },
}

/// All errors that can arise from loading a cookbook artifact from disk.
#[derive(Debug, Error)]
pub enum CookbookError {
    /// The declared cookbook location does not exist or is not a directory.
    #[error("cookbook '{name}' not found at {path}")]
    NotADirectory { name: String, path: PathBuf },

    /// Underlying I/O failure while walking or hashing cookbook files.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`CookbookError::Io`].
pub(crate) fn cookbook_io_err(path: impl Into<PathBuf>, source: std::io::Error) -> CookbookError {
    CookbookError::Io {
        path: path.into(),
        source,
    }
}
