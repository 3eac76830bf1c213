//! Comment stream error types.
//!
//! A stream error is any failure originating from the inbound comment feed
//! itself: connectivity loss, authentication expiry, or a transport-level
//! rejection from the host. These unwind to the supervisor loop, which backs
//! off and resubscribes; per-comment failures (lookup, validation) never use
//! these types.

/// Specific stream fault conditions.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StreamErrorKind {
    /// Could not reach the comment feed at the transport level.
    #[display("Connection failed: {}", _0)]
    ConnectionFailed(String),

    /// Credentials were rejected or an access token expired mid-stream.
    #[display("Authentication failed: {}", _0)]
    AuthFailed(String),

    /// The feed answered with a non-success HTTP status.
    #[display("Feed returned HTTP {}: {}", status, message)]
    Http {
        /// HTTP status code from the feed
        status: u16,
        /// Response context, if any
        message: String,
    },

    /// The feed body could not be decoded into comment listings.
    #[display("Listing decode failed: {}", _0)]
    Decode(String),
}

/// Stream fault with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Stream Error: {} at line {} in {}", kind, line, file)]
pub struct StreamError {
    /// The specific fault condition
    pub kind: StreamErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl StreamError {
    /// Create a new StreamError with the given kind at the current location.
    #[track_caller]
    pub fn new(kind: StreamErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the fault came from rejected credentials.
    pub fn is_auth(&self) -> bool {
        matches!(self.kind, StreamErrorKind::AuthFailed(_))
    }
}
