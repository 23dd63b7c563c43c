//! Core data types for the Vasari article generation library.
//!
//! This crate provides the foundation data types shared by the generation
//! pipeline, the post store, and the provider integrations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod materials;
mod message;
mod request;
mod role;

pub use article::{
    ArticleLength, ArticleRequest, ArticleRequestBuilder, ArticleRequestBuilderError,
    HeadingOverrides,
};
pub use materials::ReferenceMaterials;
pub use message::Message;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError, GenerateResponse,
};
pub use role::Role;
