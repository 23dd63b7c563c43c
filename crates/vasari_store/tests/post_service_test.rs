use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use vasari_error::{VasariErrorKind, VasariResult};
use vasari_interface::ImageDriver;
use vasari_store::{MemoryPostStore, PostService, PostStore, PostUpdate};

/// Image driver that records every prompt and answers with a counted URL.
#[derive(Clone, Default)]
struct RecordingImageDriver {
    prompts: Arc<Mutex<Vec<String>>>,
}

impl RecordingImageDriver {
    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageDriver for RecordingImageDriver {
    async fn render(&self, prompt: &str) -> VasariResult<String> {
        let mut prompts = self.prompts.lock().unwrap();
        prompts.push(prompt.to_string());
        Ok(format!("https://images.test/render-{}.png", prompts.len()))
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}

fn service() -> (PostService<RecordingImageDriver, MemoryPostStore>, RecordingImageDriver) {
    let driver = RecordingImageDriver::default();
    (
        PostService::new(driver.clone(), MemoryPostStore::new()),
        driver,
    )
}

#[tokio::test]
async fn create_persists_all_fields_verbatim() {
    let (service, driver) = service();

    let post = service
        .create(
            "urban beekeeping",
            "<h1>Bees</h1>",
            Some("https://images.test/supplied.png".to_string()),
        )
        .await
        .expect("create failed");

    assert_eq!(post.description, "urban beekeeping");
    assert_eq!(post.text, "<h1>Bees</h1>");
    assert_eq!(post.image.as_deref(), Some("https://images.test/supplied.png"));
    // Creation never regenerates anything.
    assert!(driver.prompts().is_empty());
}

#[tokio::test]
async fn truthy_image_flag_regenerates_from_the_stored_description() {
    let (service, driver) = service();
    let post = service
        .create(
            "urban beekeeping",
            "<h1>Bees</h1>",
            Some("https://images.test/original.png".to_string()),
        )
        .await
        .unwrap();

    let updated = service
        .update(
            &post.id,
            PostUpdate {
                text: None,
                image: Some(true),
            },
        )
        .await
        .expect("update failed");

    // Text is untouched; the image is a freshly generated reference.
    assert_eq!(updated.text, "<h1>Bees</h1>");
    assert_eq!(updated.image.as_deref(), Some("https://images.test/render-1.png"));

    // The prompt came from the stored description, not from the request.
    let prompts = driver.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("urban beekeeping"));
    assert!(!prompts[0].contains("original.png"));
}

#[tokio::test]
async fn text_update_replaces_verbatim_and_keeps_the_image() {
    let (service, driver) = service();
    let post = service
        .create(
            "urban beekeeping",
            "<h1>Bees</h1>",
            Some("https://images.test/original.png".to_string()),
        )
        .await
        .unwrap();

    let updated = service
        .update(
            &post.id,
            PostUpdate {
                text: Some("X".to_string()),
                image: None,
            },
        )
        .await
        .expect("update failed");

    assert_eq!(updated.text, "X");
    assert_eq!(updated.image.as_deref(), Some("https://images.test/original.png"));
    assert!(driver.prompts().is_empty());
}

#[tokio::test]
async fn falsy_image_flag_keeps_the_stored_image() {
    let (service, driver) = service();
    let post = service
        .create("urban beekeeping", "<h1>Bees</h1>", None)
        .await
        .unwrap();

    let updated = service
        .update(
            &post.id,
            PostUpdate {
                text: None,
                image: Some(false),
            },
        )
        .await
        .expect("update failed");

    assert_eq!(updated.image, None);
    assert!(driver.prompts().is_empty());
}

#[tokio::test]
async fn text_and_image_can_change_in_one_update() {
    let (service, _driver) = service();
    let post = service
        .create("urban beekeeping", "<h1>Bees</h1>", None)
        .await
        .unwrap();

    let updated = service
        .update(
            &post.id,
            PostUpdate {
                text: Some("<h1>More bees</h1>".to_string()),
                image: Some(true),
            },
        )
        .await
        .expect("update failed");

    assert_eq!(updated.text, "<h1>More bees</h1>");
    assert_eq!(updated.image.as_deref(), Some("https://images.test/render-1.png"));
}

#[tokio::test]
async fn unknown_id_fails_before_touching_the_image_driver() {
    let (service, driver) = service();

    let result = service
        .update(
            "unknown-id",
            PostUpdate {
                text: Some("X".to_string()),
                image: Some(true),
            },
        )
        .await;

    let error = result.expect_err("update should fail");
    assert!(matches!(error.kind(), VasariErrorKind::Store(_)));
    assert!(driver.prompts().is_empty());
}

#[tokio::test]
async fn description_is_immutable_across_updates() {
    let (service, _driver) = service();
    let post = service
        .create("urban beekeeping", "<h1>Bees</h1>", None)
        .await
        .unwrap();

    service
        .update(
            &post.id,
            PostUpdate {
                text: Some("rewritten".to_string()),
                image: Some(true),
            },
        )
        .await
        .unwrap();

    let reloaded = service.store().get(&post.id).await.unwrap();
    assert_eq!(reloaded.description, "urban beekeeping");
}

#[tokio::test]
async fn list_returns_created_posts() {
    let (service, _driver) = service();
    service.create("bees", "<p>a</p>", None).await.unwrap();
    service.create("wasps", "<p>b</p>", None).await.unwrap();

    let posts = service.store().list().await.unwrap();
    assert_eq!(posts.len(), 2);
}

#[test]
fn update_parses_the_wire_shape() {
    let update: PostUpdate = serde_json::from_str(r#"{"image": true}"#).unwrap();
    assert!(update.regenerate_image());
    assert_eq!(update.text, None);

    let update: PostUpdate = serde_json::from_str(r#"{"text": "X"}"#).unwrap();
    assert!(!update.regenerate_image());
    assert_eq!(update.text.as_deref(), Some("X"));
}
