use thiserror::Error;

use crate::encoding::Encoding;

/// Coarse classification of [`ProblemError`] for callers that only need to
/// branch on the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The problem could not be encoded
    Encode,
    /// The input could not be decoded into a problem
    Decode,
    /// An extension member was rejected at construction time
    InvalidExtension,
    /// The requested encoding has no implementation
    UnsupportedEncoding,
    /// The response could not be written
    Write,
}

/// Problem details codec error types
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProblemError {
    /// Serializer rejected a value
    #[error("Failed to encode problem: {0}")]
    Encode(#[source] serde_json::Error),

    /// Input is not well-formed JSON
    #[error("Failed to decode problem: {0}")]
    Decode(#[source] serde_json::Error),

    /// Top-level JSON value is not an object
    #[error("Problem must be a JSON object, got {actual}")]
    NotAnObject { actual: &'static str },

    /// Well-known member has the wrong JSON kind
    #[error("Invalid problem member '{field}': expected {expected}, got {actual}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
        actual: String,
    },

    /// Extension key collides with a well-known member name
    #[error("Extension key '{0}' is reserved for a well-known member")]
    ReservedExtensionKey(String),

    /// Encoding is declared but not implemented
    #[error("Encoding '{}' is not supported", .0.media_type())]
    UnsupportedEncoding(Encoding),

    /// Status is not a valid HTTP status code
    #[error("Invalid HTTP status code: {0}")]
    InvalidStatus(u16),

    /// Response sink rejected the body
    #[error("Failed to write problem response: {0}")]
    Write(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ProblemError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Encode(_) | Self::InvalidStatus(_) => ErrorKind::Encode,
            Self::Decode(_) | Self::NotAnObject { .. } | Self::InvalidField { .. } => {
                ErrorKind::Decode
            }
            Self::ReservedExtensionKey(_) => ErrorKind::InvalidExtension,
            Self::UnsupportedEncoding(_) => ErrorKind::UnsupportedEncoding,
            Self::Write(_) => ErrorKind::Write,
        }
    }
}

/// Name of the JSON kind of `value`, used in decode diagnostics.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
