//! Shared error type across streamgate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Request arguments break a routing rule.
    IllegalArgument,
    /// Invalid input / malformed config.
    BadRequest,
    /// Referenced project does not exist.
    NotFound,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ClientCode {
    /// String representation used in responses and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::IllegalArgument => "ILLEGAL_ARGUMENT",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// A reroute into a substream that the calling chain does not own.
///
/// Carries the rejected destination and the stream the caller should
/// reroute to instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Cannot reroute to substream [{destination}] as only the stream itself can reroute to substreams. \
     Please reroute to the stream [{stream}] instead."
)]
pub struct PolicyViolation {
    pub destination: String,
    pub stream: &'static str,
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StreamsError>;

/// Unified error type used by core and policy crates.
#[derive(Debug, Error)]
pub enum StreamsError {
    #[error(transparent)]
    PolicyViolation(#[from] PolicyViolation),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unknown project: {0}")]
    UnknownProject(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl StreamsError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            StreamsError::PolicyViolation(_) => ClientCode::IllegalArgument,
            StreamsError::BadRequest(_) => ClientCode::BadRequest,
            StreamsError::UnknownProject(_) => ClientCode::NotFound,
            StreamsError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            StreamsError::Internal(_) => ClientCode::Internal,
        }
    }
}
