//! Article generation pipeline.
//!
//! This crate drives the staged generation of a long-form article: stage
//! instructions are composed from the request, sent to a streaming text
//! backend together with the conversation so far, and every fragment of
//! output is forwarded to a live subscriber as it arrives.
//!
//! The pipeline walks a fixed, strictly sequential stage order —
//! introduction, one or more body passes, conclusion, references — and
//! carries the full exchange history between stages so each call continues
//! where the previous one left off.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compose;
mod events;
mod illustration;
mod orchestrator;
mod session;
mod sink;
mod vault;

pub use compose::{Stage, compose, compose_image_prompt};
pub use events::{ArticleEvent, generate_live};
pub use illustration::Illustrator;
pub use orchestrator::ArticleOrchestrator;
pub use session::{ConversationSession, DEFAULT_MAX_CONTEXT_CHARS};
pub use sink::{CollectSink, EventSink, NullSink};
pub use vault::ReferenceVault;
