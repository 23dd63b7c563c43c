//! Update coordination over the post store.

use crate::{Post, PostDraft, PostPatch, PostStore, PostUpdate};
use vasari_error::VasariResult;
use vasari_interface::ImageDriver;
use vasari_pipeline::Illustrator;

/// Coordinates post creation and partial updates.
///
/// Creation persists whatever it is given. Updates load the stored post
/// first, then decide per field: text replaces verbatim, while a truthy
/// image flag regenerates the illustration from the stored description —
/// the stored one, never anything carried by the update itself.
pub struct PostService<D, S> {
    illustrator: Illustrator<D>,
    store: S,
}

impl<D: ImageDriver, S: PostStore> PostService<D, S> {
    /// Create a service around an image driver and a post store.
    pub fn new(driver: D, store: S) -> Self {
        Self {
            illustrator: Illustrator::new(driver),
            store,
        }
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist a new post with externally supplied content.
    ///
    /// All three fields are stored as given; nothing is regenerated.
    #[tracing::instrument(skip_all, fields(topic = %description))]
    pub async fn create(
        &self,
        description: &str,
        text: &str,
        image: Option<String>,
    ) -> VasariResult<Post> {
        self.store
            .create(PostDraft::new(description, text, image))
            .await
    }

    /// Render an illustration for a topic description.
    pub async fn illustrate(&self, description: &str) -> VasariResult<String> {
        self.illustrator.illustrate(description).await
    }

    /// Apply a partial update to an existing post.
    ///
    /// The post is loaded before anything else, so an unknown id fails
    /// without touching the image service.
    ///
    /// # Errors
    ///
    /// Fails with a not-found store error for unknown ids, or with an
    /// upstream error if illustration regeneration fails; the stored post
    /// is left untouched in both cases.
    #[tracing::instrument(skip(self, update), fields(id = %id, regenerate = update.regenerate_image()))]
    pub async fn update(&self, id: &str, update: PostUpdate) -> VasariResult<Post> {
        let existing = self.store.get(id).await?;

        let image = if update.regenerate_image() {
            Some(self.illustrator.illustrate(&existing.description).await?)
        } else {
            None
        };

        self.store
            .apply(
                id,
                PostPatch {
                    text: update.text,
                    image,
                },
            )
            .await
    }
}
