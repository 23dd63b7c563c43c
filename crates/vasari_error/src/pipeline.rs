//! Generation pipeline error types.

/// Specific error conditions inside the article generation pipeline.
///
/// Any of these aborts the whole run: no further stages are entered and no
/// partial post is persisted. Stage-level upstream failures propagate as
/// [`crate::UpstreamError`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// The live subscriber went away; fragment delivery is impossible
    #[display("Stream sink closed by subscriber")]
    SinkClosed,
    /// Appending another exchange would exceed the conversation bound
    #[display(
        "Conversation context limit exceeded: {} of {} characters",
        attempted,
        limit
    )]
    ContextOverflow {
        /// Configured maximum context size in characters
        limit: usize,
        /// Size the conversation would have grown to
        attempted: usize,
    },
}

/// Pipeline error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The kind of error that occurred
    pub kind: PipelineErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new pipeline error with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use vasari_error::{PipelineError, PipelineErrorKind};
    ///
    /// let err = PipelineError::new(PipelineErrorKind::SinkClosed);
    /// assert!(format!("{}", err).contains("sink closed"));
    /// ```
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
