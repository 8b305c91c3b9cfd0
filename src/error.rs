//! NNTP error types

use thiserror::Error;

/// NNTP protocol and connection errors
#[derive(Error, Debug)]
pub enum NntpError {
    /// IO error during network operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TCP connection could not be established (DNS, refusal, unreachable)
    #[error("Failed to connect to {address}: {source}")]
    Connect {
        /// `host:port` that was dialed
        address: String,
        /// Underlying network error
        #[source]
        source: std::io::Error,
    },

    /// TLS error during secure connection
    #[error("TLS error: {0}")]
    Tls(String),

    /// Connection closed unexpectedly
    #[error("Connection closed")]
    ConnectionClosed,

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// NNTP protocol error with response code
    #[error("NNTP error {code}: {message}")]
    Protocol {
        /// NNTP response code (e.g., 411, 480, 502)
        code: u16,
        /// Error message from server
        message: String,
    },

    /// Server did not ask for a password after AUTHINFO USER
    #[error("unexpected response to USER: {0}")]
    AuthRejectedUser(String),

    /// Authentication failed at the AUTHINFO PASS step
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// A `211` reply to GROUP that lacks the article range fields
    #[error("unexpected group response for {group}: {response}")]
    InvalidGroupResponse {
        /// Group that was being selected
        group: String,
        /// Raw status line as received
        response: String,
    },

    /// No such article
    #[error("No such article: {0}")]
    NoSuchArticle(String),

    /// Caller supplied an unusable configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A fatal error annotated with the operation that was running
    #[error("{operation}: {source}")]
    Context {
        /// Command or step that failed, e.g. `GROUP alt.test`
        operation: String,
        /// Underlying failure
        #[source]
        source: Box<NntpError>,
    },
}

impl NntpError {
    /// Wrap this error with the name of the failing operation
    pub fn context(self, operation: impl Into<String>) -> Self {
        NntpError::Context {
            operation: operation.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through any [`NntpError::Context`] layers
    pub fn root_cause(&self) -> &NntpError {
        match self {
            NntpError::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Whether this is a transport-level failure raised while connecting
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self.root_cause(),
            NntpError::Connect { .. } | NntpError::Tls(_)
        )
    }

    /// Whether this is one of the two authentication failures
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.root_cause(),
            NntpError::AuthRejectedUser(_) | NntpError::AuthFailed(_)
        )
    }
}

/// Result type alias using NntpError
pub type Result<T> = std::result::Result<T, NntpError>;
