//! Capability traits for the external services Vasari orchestrates.
//!
//! The generation pipeline only ever talks to the trait objects defined
//! here, so tests (and alternative providers) can substitute their own
//! implementations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ImageDriver, StreamSink, Streaming, VasariDriver};
pub use types::{FinishReason, FragmentStream, StreamChunk};
