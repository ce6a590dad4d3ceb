//! Error types for the mahasiswa client.
//!
//! One unified error type with explicit variants for transport, protocol,
//! lookup, backend validation and client-side input failures. View models
//! convert all of these into their own error state; callers that talk to a
//! repository directly can match on the variant.

use std::fmt;
use thiserror::Error;

/// The unified error type for repository operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failures (connection, timeout, I/O).
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// The backend answered with something other than the expected shape.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The backend reports no record with this student ID.
    #[error("mahasiswa {nim} not found")]
    NotFound { nim: String },

    /// The backend rejected the submitted payload.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Client-side input failed validation before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true for transport-level failures.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    /// Returns true if the backend reported the record as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Build a `NotFound` error for the given student ID.
    pub fn not_found(nim: impl fmt::Display) -> Self {
        Error::NotFound {
            nim: nim.to_string(),
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection could not be established.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Local I/O failure (file-backed repository).
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<std::io::Error> for NetworkError {
    fn from(err: std::io::Error) -> Self {
        NetworkError::Io {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Network(NetworkError::from(err))
    }
}

/// Protocol-level errors: unexpected status codes or undecodable bodies.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code, if the failure came from a response status.
    pub status: Option<u16>,
    /// Description of what was wrong with the response.
    pub message: String,
}

impl ProtocolError {
    /// An unexpected response status.
    pub fn status(status: u16, message: Option<String>) -> Self {
        Self {
            status: Some(status),
            message: message.unwrap_or_else(|| "unexpected response status".to_string()),
        }
    }

    /// A response body that could not be decoded.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = self.status {
            write!(f, "HTTP {}: ", status)?;
        }
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ProtocolError {}

impl From<serde_json::Error> for ProtocolError {
    fn from(err: serde_json::Error) -> Self {
        ProtocolError::malformed(err.to_string())
    }
}

/// The backend refused a create or update payload.
#[derive(Debug)]
pub struct ValidationError {
    /// HTTP status code returned by the backend, if any.
    pub status: Option<u16>,
    /// Server-provided reason, if any.
    pub message: Option<String>,
}

impl ValidationError {
    pub fn new(status: Option<u16>, message: Option<String>) -> Self {
        Self { status, message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.status, &self.message) {
            (Some(status), Some(message)) => write!(f, "HTTP {}: {}", status, message),
            (Some(status), None) => write!(f, "HTTP {}: payload rejected", status),
            (None, Some(message)) => write!(f, "{}", message),
            (None, None) => write!(f, "payload rejected"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid student ID.
    #[error("invalid nim '{value}': {reason}")]
    Nim { value: String, reason: String },

    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },
}
