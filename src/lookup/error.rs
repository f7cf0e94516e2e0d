//! Lookup error definitions.

use thiserror::Error;

/// Errors that can occur while resolving a postal code.
///
/// The HTTP layer reports every variant as the same 500; the distinction
/// exists for logs.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The code could not be turned into an upstream URL.
    #[error("invalid upstream URL for code {code:?}: {source}")]
    InvalidUrl {
        code: String,
        #[source]
        source: url::ParseError,
    },

    /// Connecting to or exchanging headers with the upstream failed.
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    /// The upstream response body could not be read to completion.
    #[error("failed to read upstream body: {0}")]
    BodyRead(String),

    /// The upstream body is not an address record.
    #[error("malformed upstream payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The outbound HTTP client could not be constructed.
    #[error("failed to build upstream client: {0}")]
    Client(String),
}

impl LookupError {
    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::InvalidUrl { .. } => "invalid_url",
            LookupError::Unreachable(_) => "unreachable",
            LookupError::BodyRead(_) => "body_read",
            LookupError::Malformed(_) => "malformed",
            LookupError::Client(_) => "client",
        }
    }
}

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;
