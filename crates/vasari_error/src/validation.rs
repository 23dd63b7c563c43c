//! Request validation error types.

/// Validation error for malformed generation or update requests.
///
/// Raised before any orchestration starts, so a rejected request never
/// reaches the external services.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", message, line, file)]
pub struct ValidationError {
    /// Description of the rejected field or value
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vasari_error::ValidationError;
    ///
    /// let err = ValidationError::new("description must not be empty");
    /// assert!(format!("{}", err).contains("description"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
