//! Error types for the course API clients.
//!
//! # Design
//! The API treats every non-success HTTP status uniformly — there is no
//! retry policy and no transient/permanent distinction — so all non-2xx
//! responses land in a single `HttpError` variant carrying the raw status
//! and body. Local lookup misses (`CoursePostClient::get_post_content`) are
//! `Option::None`, never an `ApiError`; the two failure kinds must stay
//! distinguishable to callers.

use std::fmt;

/// Errors returned by the result-returning client operations.
#[derive(Debug)]
pub enum ApiError {
    /// No response was obtained: connection refused, DNS failure, etc.
    TransportError(String),

    /// The server responded with a non-2xx status.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::TransportError(msg) => write!(f, "transport failed: {msg}"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
