//! Core type definitions for the Vasari interface.

use futures_util::stream::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use vasari_error::VasariResult;

/// A pinned, boxed stream of chunk results, as returned by streaming
/// drivers.
pub type FragmentStream = Pin<Box<dyn Stream<Item = VasariResult<StreamChunk>> + Send>>;

/// A single chunk from a streaming response.
///
/// Chunk boundaries carry no meaning; concatenating chunk content in
/// arrival order reconstructs the full response exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamChunk {
    /// Incremental text content.
    pub content: String,
    /// Whether this is the final chunk.
    pub is_final: bool,
    /// Optional finish reason if final.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
}

impl StreamChunk {
    /// An intermediate chunk carrying partial text.
    pub fn partial(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_final: false,
            finish_reason: None,
        }
    }

    /// The terminal chunk of a stream.
    pub fn done(reason: FinishReason) -> Self {
        Self {
            content: String::new(),
            is_final: true,
            finish_reason: Some(reason),
        }
    }
}

/// Why generation stopped.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum FinishReason {
    /// Model completed naturally.
    Stop,
    /// Hit max_tokens limit.
    Length,
    /// Content was filtered.
    ContentFilter,
    /// Other/unknown reason.
    Other,
}
