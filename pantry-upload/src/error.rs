//! Error types for pantry-upload.

use thiserror::Error;

use pantry_client::TransportError;
use pantry_core::{CookbookError, LockError};

/// All errors that can arise from an upload run.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The lock failed to parse or validate.
    #[error("lock error: {0}")]
    Lock(#[from] LockError),

    /// A cookbook artifact could not be loaded from disk.
    #[error("cookbook error: {0}")]
    Cookbook(#[from] CookbookError),

    /// A server call failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}
