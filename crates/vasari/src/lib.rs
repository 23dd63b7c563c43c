//! Vasari — streamed long-form article generation.
//!
//! Vasari turns a short topic description into a long-form illustrated
//! article by sequencing calls to a generative text service, streaming
//! partial output to a live subscriber as it is produced, and generating
//! an illustration through an image service. Persisted posts support
//! partial updates: text is replaced verbatim, while the illustration is
//! regenerated from the stored topic description.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vasari::{
//!     ArticleLength, ArticleRequest, ArticleOrchestrator, OpenAiClient,
//!     MemoryPostStore, PostService, generate_live,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     vasari::init_tracing()?;
//!
//!     let client = OpenAiClient::new("gpt-4o-mini".to_string())?;
//!     let orchestrator = ArticleOrchestrator::new(client.clone());
//!     let posts = PostService::new(client, MemoryPostStore::new());
//!
//!     let request = ArticleRequest::builder()
//!         .description("urban beekeeping")
//!         .article_length(ArticleLength::Six)
//!         .layout_structure("magazine")
//!         .build()?;
//!
//!     let (tx, mut rx) = tokio::sync::mpsc::channel(64);
//!     tokio::spawn(async move {
//!         while let Some(event) = rx.recv().await {
//!             println!("{event:?}");
//!         }
//!     });
//!
//!     let text = generate_live(&orchestrator, &request, tx).await;
//!     let image = posts.illustrate("urban beekeeping").await?;
//!     let post = posts.create("urban beekeeping", &text, Some(image)).await?;
//!     println!("created post {}", post.id);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Vasari is organized as a workspace with focused crates:
//!
//! - `vasari_core` - Core data types (requests, messages, materials)
//! - `vasari_interface` - Driver and sink trait definitions
//! - `vasari_error` - Error types
//! - `vasari_pipeline` - Staged generation, streaming, live events
//! - `vasari_store` - Post persistence and update coordination
//! - `vasari_models` - Provider implementations
//!
//! This crate (`vasari`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod telemetry;

pub use telemetry::init_tracing;

pub use vasari_core::{
    ArticleLength, ArticleRequest, ArticleRequestBuilder, GenerateRequest, GenerateResponse,
    HeadingOverrides, Message, ReferenceMaterials, Role,
};
pub use vasari_error::{
    BuilderError, HttpError, JsonError, PipelineError, PipelineErrorKind, StoreError,
    StoreErrorKind, UpstreamError, UpstreamErrorKind, ValidationError, VasariError,
    VasariErrorKind, VasariResult,
};
pub use vasari_interface::{
    FinishReason, FragmentStream, ImageDriver, StreamChunk, StreamSink, Streaming, VasariDriver,
};
pub use vasari_models::OpenAiClient;
pub use vasari_pipeline::{
    ArticleEvent, ArticleOrchestrator, CollectSink, ConversationSession, EventSink, Illustrator,
    NullSink, ReferenceVault, Stage, compose, compose_image_prompt, generate_live,
};
pub use vasari_store::{
    MemoryPostStore, Post, PostDraft, PostPatch, PostService, PostStore, PostUpdate,
};
