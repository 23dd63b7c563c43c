//! Trait definitions for text and image backends.

use crate::FragmentStream;
use async_trait::async_trait;
use vasari_core::{GenerateRequest, GenerateResponse};
use vasari_error::VasariResult;

/// Core trait that all text backends must implement.
///
/// This provides the minimal interface for synchronous text generation.
/// Streaming is exposed through the [`Streaming`] trait.
#[async_trait]
pub trait VasariDriver: Send + Sync {
    /// Generate model output given a conversation request.
    async fn generate(&self, req: &GenerateRequest) -> VasariResult<GenerateResponse>;

    /// Provider name (e.g., "openai", "mock").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

/// Trait for backends that support streaming responses.
#[async_trait]
pub trait Streaming: VasariDriver {
    /// Generate a streaming response.
    ///
    /// Returns a stream that yields chunks as they arrive from the API.
    async fn generate_stream(&self, req: &GenerateRequest) -> VasariResult<FragmentStream>;
}

/// Trait for backends that can generate an image from a textual prompt.
///
/// One-shot and non-streaming; the returned string is a reference (URL)
/// to the generated image.
#[async_trait]
pub trait ImageDriver: Send + Sync {
    /// Render an image for the prompt and return its reference.
    async fn render(&self, prompt: &str) -> VasariResult<String>;

    /// Provider name (e.g., "openai", "mock").
    fn provider_name(&self) -> &'static str;
}

/// Destination for fragments produced during a generation run.
///
/// Decouples the pipeline from the delivery transport. Delivery must be
/// order-preserving; an error return means the subscriber is gone and the
/// run should stop.
#[async_trait]
pub trait StreamSink: Send + Sync {
    /// Push one fragment to the subscriber.
    async fn deliver(&self, fragment: &str) -> VasariResult<()>;
}
