//! The transport capability consumed by the upload pipeline.

use serde_json::Value;

use crate::error::TransportError;

/// Blocking JSON request/response against server-relative paths.
///
/// Paths are given without a leading slash (`"data/policyfiles/app-prod"`);
/// the implementation owns base-URL joining, authentication, and the
/// mapping of status codes onto [`TransportError`] variants.
pub trait Transport {
    fn get(&self, path: &str) -> Result<Value, TransportError>;
    fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
    fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
}
