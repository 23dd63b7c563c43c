//! Post store error types.

/// Kinds of post store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// No post exists under the given id
    #[display("Post not found: {}", _0)]
    NotFound(String),
}

/// Store error with location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::NotFound("abc-123".to_string()));
/// assert!(format!("{}", err).contains("abc-123"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a not-found error on the given post id.
    #[track_caller]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::NotFound(id.into()))
    }
}
