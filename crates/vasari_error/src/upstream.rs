//! Errors raised by the external text and image services.

/// Specific error conditions for upstream service calls.
///
/// A response can fail in two distinct ways: the call itself fails
/// (transport or HTTP status), or the call succeeds but the body carries an
/// error payload instead of content. The second case must never be mistaken
/// for a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum UpstreamErrorKind {
    /// Transport-level failure before a response was received
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// Non-success HTTP status returned by the service
    #[display("Service returned status {}: {}", status, message)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or status text
        message: String,
    },
    /// The response body was an error payload rather than content
    #[display("Service returned an error payload: {}", _0)]
    ErrorPayload(String),
    /// The response decoded cleanly but carried no usable content
    #[display("Service response contained no content")]
    MissingContent,
}

impl UpstreamErrorKind {
    /// Whether a retry with backoff could plausibly succeed.
    ///
    /// Rate limiting and server-side failures are transient; everything
    /// else is permanent.
    pub fn is_transient(&self) -> bool {
        match self {
            UpstreamErrorKind::Transport(_) => true,
            UpstreamErrorKind::Status { status, .. } => {
                *status == 429 || (500..=599).contains(status)
            }
            _ => false,
        }
    }
}

/// Upstream service error with location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{UpstreamError, UpstreamErrorKind};
///
/// let err = UpstreamError::new(UpstreamErrorKind::Status {
///     status: 503,
///     message: "overloaded".to_string(),
/// });
/// assert!(err.kind.is_transient());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upstream Error: {} at line {} in {}", kind, line, file)]
pub struct UpstreamError {
    /// The kind of error that occurred
    pub kind: UpstreamErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl UpstreamError {
    /// Create a new upstream error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UpstreamErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
