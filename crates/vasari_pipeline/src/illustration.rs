//! One-shot image generation for a post.

use crate::compose_image_prompt;
use vasari_error::VasariResult;
use vasari_interface::ImageDriver;

/// Wraps an image driver behind the photographic prompt the pipeline uses.
///
/// Single call, no streaming, no retry at this layer; a driver failure
/// propagates to the caller.
pub struct Illustrator<D> {
    driver: D,
}

impl<D: ImageDriver> Illustrator<D> {
    /// Create an illustrator around an image driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Get a reference to the underlying image driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Render an illustration for the given topic description and return
    /// its reference.
    #[tracing::instrument(skip(self, description), fields(provider = self.driver.provider_name()))]
    pub async fn illustrate(&self, description: &str) -> VasariResult<String> {
        let prompt = compose_image_prompt(description);
        let reference = self.driver.render(&prompt).await?;
        tracing::debug!(reference = %reference, "illustration rendered");
        Ok(reference)
    }
}
