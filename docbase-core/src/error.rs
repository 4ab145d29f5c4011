//! Error types for the DocBase client.
//!
//! Every failure a client operation can produce is a `DocbaseError`. Variants
//! are grouped into the coarser `ErrorKind` taxonomy so callers can branch on
//! "where did it fail" without matching every variant.

use thiserror::Error;

/// Convenience type alias for Results using DocbaseError.
pub type DocbaseResult<T> = Result<T, DocbaseError>;

/// Boxed underlying cause carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type returned by the DocBase client.
#[derive(Error, Debug)]
pub enum DocbaseError {
    // -- Pre-flight errors (no I/O performed) --
    /// The request failed local validation.
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// The HTTP request could not be built (serialization, URL construction).
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    // -- Network errors --
    /// The transport failed to deliver the request or read the response.
    #[error("transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The request deadline or client timeout elapsed. `source` is set when
    /// the transport reported the timeout, and empty for a context deadline.
    #[error("request timeout: {message}")]
    Timeout {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The caller cancelled the request.
    #[error("request cancelled")]
    Cancelled,

    // -- Server errors --
    /// The server answered with a failure status.
    #[error("docbase api error: {status} {reason}, body: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
        /// Raw response body, verbatim.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    // -- Configuration errors --
    /// Configuration is missing a value or could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a `DocbaseError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    RequestBuild,
    Transport,
    Api,
    Decode,
    Config,
}

impl DocbaseError {
    /// Build a transport error wrapping an underlying cause.
    pub fn transport<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        DocbaseError::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Build a timeout raised by a context deadline, with no underlying cause.
    pub fn deadline_exceeded() -> Self {
        DocbaseError::Timeout {
            message: "deadline exceeded".into(),
            source: None,
        }
    }

    /// Build a timeout reported by the transport.
    pub fn timeout<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        DocbaseError::Timeout {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether the call ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, DocbaseError::Timeout { .. })
    }

    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DocbaseError::Validation(_) => ErrorKind::Validation,
            DocbaseError::RequestBuild(_) => ErrorKind::RequestBuild,
            DocbaseError::Transport { .. }
            | DocbaseError::Timeout { .. }
            | DocbaseError::Cancelled => {
                ErrorKind::Transport
            }
            DocbaseError::Api { .. } => ErrorKind::Api,
            DocbaseError::Decode(_) => ErrorKind::Decode,
            DocbaseError::Config(_) | DocbaseError::Io(_) => ErrorKind::Config,
        }
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            DocbaseError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<toml::de::Error> for DocbaseError {
    fn from(e: toml::de::Error) -> Self {
        DocbaseError::Config(e.to_string())
    }
}

/// Local precondition failures detected before any request is sent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title was empty.
    #[error("title must not be empty")]
    EmptyTitle,

    /// Post id was zero.
    #[error("post id must be specified")]
    MissingId,

    /// Scope is group but no group ids were given.
    #[error("groups must be specified when the scope is group")]
    GroupRequired,

    /// Group ids were given but the scope is not group.
    #[error("groups cannot be set when the scope is not group")]
    GroupsNotAllowed,
}
