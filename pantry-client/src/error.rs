//! Error types for pantry-client.

use thiserror::Error;

/// All errors that can arise from a transport call.
///
/// The server signals "already exists" and "does not exist" via status
/// codes; those two are first-class variants so the publish protocol can
/// match on them instead of inspecting raw status codes.
#[derive(Debug, Error)]
pub enum TransportError {
    /// 409-equivalent: the resource already exists.
    #[error("remote resource already exists")]
    Conflict,

    /// 404-equivalent: the resource does not exist.
    #[error("remote resource not found")]
    NotFound,

    /// Any other non-success status from the server.
    #[error("server returned status {code}: {message}")]
    Status { code: u16, message: String },

    /// Connection-level failure (DNS, refused, reset, ...).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server's response body was not valid JSON.
    #[error("invalid JSON in server response: {0}")]
    Json(#[from] serde_json::Error),
}
