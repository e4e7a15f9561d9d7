//! Error types for BlockCypher API operations.

/// Errors that can occur when interacting with the BlockCypher API.
///
/// Each variant is tagged with the stage of the call it originates from,
/// so callers can branch on the failure category without inspecting
/// message strings.
#[derive(Debug, thiserror::Error)]
pub enum BlockCypherError {
    /// The request body could not be serialized to JSON.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The HTTP exchange with the service failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be parsed into the expected shape.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The named resource does not exist (HTTP 404).
    #[error("not found")]
    NotFound,

    /// The service returned a non-2xx response.
    #[error("server error ({status_code}): {message}")]
    Server {
        /// HTTP status code.
        status_code: u16,
        /// Response body returned by the service.
        message: String,
    },

    /// The service accepted the call but reported errors inside a
    /// transaction skeleton.
    #[error("transaction rejected: {}", .errors.join("; "))]
    Rejected {
        /// Per-item error messages from the skeleton's `errors` list.
        errors: Vec<String>,
    },

    /// The call was rejected locally before any request was issued.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
