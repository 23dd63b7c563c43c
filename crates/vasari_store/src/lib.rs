//! Post persistence and update coordination.
//!
//! A [`Post`] is the text+image document a generation run produces. Posts
//! are created once and then mutated only through the [`PostService`],
//! which decides per field whether to keep, replace, or regenerate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod post;
mod service;
mod store;

pub use post::{Post, PostDraft, PostPatch, PostUpdate};
pub use service::PostService;
pub use store::{MemoryPostStore, PostStore};
