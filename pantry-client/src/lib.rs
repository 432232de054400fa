//! # pantry-client
//!
//! The transport boundary to the policy server: a narrow [`Transport`]
//! trait speaking JSON documents against server-relative paths, a blocking
//! [`HttpTransport`] implementation over ureq, and the tagged
//! [`TransportError`] that turns the server's status-code signals
//! (conflict, not-found) into variants callers can match on.

pub mod error;
pub mod http;
pub mod transport;

pub use error::TransportError;
pub use http::HttpTransport;
pub use transport::Transport;
