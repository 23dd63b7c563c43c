//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, HttpError, JsonError, PipelineError, StoreError, UpstreamError,
    ValidationError,
};

/// The foundation error enum collecting every error family in the
/// workspace.
///
/// # Examples
///
/// ```
/// use vasari_error::{VasariError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: VasariError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VasariErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Request validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// External text or image service error
    #[from(UpstreamError)]
    Upstream(UpstreamError),
    /// Post store error
    #[from(StoreError)]
    Store(StoreError),
    /// Generation pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Vasari error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vasari_error::{VasariResult, ValidationError};
///
/// fn might_fail() -> VasariResult<()> {
///     Err(ValidationError::new("missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vasari Error: {}", _0)]
pub struct VasariError(Box<VasariErrorKind>);

impl VasariError {
    /// Create a new error from a kind.
    pub fn new(kind: VasariErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VasariErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VasariErrorKind
impl<T> From<T> for VasariError
where
    T: Into<VasariErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vasari operations.
///
/// # Examples
///
/// ```
/// use vasari_error::{VasariResult, HttpError};
///
/// fn fetch_data() -> VasariResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type VasariResult<T> = std::result::Result<T, VasariError>;
