//! Error types for marvel-core.
//!
//! A single [`Error`] covers everything a character search can fail with:
//! transport, API rejections, undecodable payloads and invalid input.
//! Date interpretation has its own [`DateParseError`] because it happens
//! lazily, long after a search has succeeded.

use std::fmt;
use thiserror::Error;

/// The unified error type for character searches.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The API answered with a non-success status.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The response body could not be decoded into an envelope.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Input validation errors (base URL, limits).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection could not be established.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request did not complete within the configured timeout.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Any other HTTP client failure, including reading the body.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success answer from the API.
///
/// The characters API reports failures as `{"code": ..., "message": ...}`
/// where `code` is sometimes a number and sometimes a string such as
/// `"InvalidCredentials"`; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error code from the body, if present.
    pub code: Option<String>,
    /// Error message from the body, if present.
    pub message: Option<String>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, code: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// Check if the API rejected the credentials or the hash.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
            || matches!(
                self.code.as_deref(),
                Some("InvalidCredentials") | Some("InvalidHash") | Some("MissingHash")
            )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Failures turning a response body into a result envelope.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not well-formed JSON (includes truncated bodies).
    #[error("malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// The body is JSON but the top level is not an object.
    #[error("expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    /// A field is present with an incompatible type.
    #[error("unexpected payload shape: {0}")]
    Shape(#[source] serde_json::Error),
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API base URL '{value}': {reason}")]
    ApiBase { value: String, reason: String },

    /// Invalid result limit.
    #[error("invalid limit '{value}': {reason}")]
    Limit { value: String, reason: String },
}

/// A `modified` value that does not match `YYYY-MM-DDThh:mm:ss±hhmm`.
#[derive(Debug, Error)]
#[error("invalid date '{value}': {source}")]
pub struct DateParseError {
    /// The raw string that failed to parse.
    pub value: String,
    #[source]
    pub source: DateParseReason,
}

/// Why a `modified` value was rejected.
#[derive(Debug, Error)]
pub enum DateParseReason {
    /// Whitespace, or an offset other than a sign and four digits.
    #[error("expected YYYY-MM-DDThh:mm:ss±hhmm")]
    Layout,

    #[error(transparent)]
    Chrono(#[from] chrono::ParseError),
}
