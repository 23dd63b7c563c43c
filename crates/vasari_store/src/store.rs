//! Post document store.

use crate::{Post, PostDraft, PostPatch};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use vasari_error::{StoreError, VasariResult};

/// Persisted CRUD over post documents.
///
/// Implementations must apply each operation atomically with respect to a
/// single post id; `apply` in particular is a read-modify-write that must
/// observe a consistent document.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a new post and assign it an id.
    async fn create(&self, draft: PostDraft) -> VasariResult<Post>;

    /// Load a post by id.
    ///
    /// # Errors
    ///
    /// Fails with a not-found store error when the id is unknown.
    async fn get(&self, id: &str) -> VasariResult<Post>;

    /// Apply resolved field changes to an existing post.
    ///
    /// # Errors
    ///
    /// Fails with a not-found store error when the id is unknown.
    async fn apply(&self, id: &str, patch: PostPatch) -> VasariResult<Post>;

    /// All posts, in no particular order.
    async fn list(&self) -> VasariResult<Vec<Post>>;
}

/// In-memory post store backed by a mutex-guarded map.
///
/// Stands in for the document database in tests and single-process
/// deployments; the per-document atomicity contract holds because every
/// operation completes under one lock acquisition.
#[derive(Debug, Clone, Default)]
pub struct MemoryPostStore {
    posts: Arc<Mutex<HashMap<String, Post>>>,
}

impl MemoryPostStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn create(&self, draft: PostDraft) -> VasariResult<Post> {
        let post = Post {
            id: Uuid::new_v4().to_string(),
            text: draft.text,
            image: draft.image,
            description: draft.description,
        };
        let mut posts = self.posts.lock().unwrap();
        posts.insert(post.id.clone(), post.clone());
        tracing::debug!(id = %post.id, "post created");
        Ok(post)
    }

    async fn get(&self, id: &str) -> VasariResult<Post> {
        let posts = self.posts.lock().unwrap();
        posts
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id).into())
    }

    async fn apply(&self, id: &str, patch: PostPatch) -> VasariResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(id))?;

        if let Some(text) = patch.text {
            post.text = text;
        }
        if let Some(image) = patch.image {
            post.image = Some(image);
        }
        tracing::debug!(id = %post.id, "post updated");
        Ok(post.clone())
    }

    async fn list(&self) -> VasariResult<Vec<Post>> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.values().cloned().collect())
    }
}
