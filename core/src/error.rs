//! Error type for the posts API client.
//!
//! # Design
//! Every failure surfaces as a single `RequestFailure`. The variants record
//! where the request broke down, but callers are expected to treat them all
//! the same way: nothing in the client retries or recovers based on the kind.
//! Payloads are owned strings so the error stays `Clone` and comparable.

use thiserror::Error;

/// Error returned by every client operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestFailure {
    /// The round trip did not complete (connection refused, DNS, TLS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
