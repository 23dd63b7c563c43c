//! Error types for the Vasari library.
//!
//! This crate provides the foundation error types used throughout the Vasari
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vasari_error::{VasariResult, UpstreamError, UpstreamErrorKind};
//!
//! fn fetch_content() -> VasariResult<String> {
//!     Err(UpstreamError::new(UpstreamErrorKind::Transport(
//!         "connection refused".to_string(),
//!     )))?
//! }
//!
//! match fetch_content() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod http;
mod json;
mod pipeline;
mod store;
mod upstream;
mod validation;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{VasariError, VasariErrorKind, VasariResult};
pub use http::HttpError;
pub use json::JsonError;
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use store::{StoreError, StoreErrorKind};
pub use upstream::{UpstreamError, UpstreamErrorKind};
pub use validation::ValidationError;
