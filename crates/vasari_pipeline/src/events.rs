//! Live channel event contract.
//!
//! One inbound request produces many outbound events: a stream of
//! `articlePartGenerated` fragments followed by exactly one terminal event,
//! so subscribers can tell completion and failure apart from network
//! silence.

use crate::{ArticleOrchestrator, EventSink};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use vasari_core::ArticleRequest;
use vasari_interface::Streaming;

/// Messages exchanged with a live generation subscriber.
///
/// # Examples
///
/// ```
/// use vasari_pipeline::ArticleEvent;
///
/// let event = ArticleEvent::ArticlePartGenerated("<h1>Bees</h1>".to_string());
/// let wire = serde_json::to_string(&event).unwrap();
/// assert!(wire.contains("articlePartGenerated"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ArticleEvent {
    /// Inbound request to start a generation run
    GenerateArticle(ArticleRequest),
    /// One streamed fragment of article text, in generation order
    ArticlePartGenerated(String),
    /// Terminal event: the run finished and all fragments were delivered
    ArticleCompleted,
    /// Terminal event: the run failed; no further fragments will arrive
    ArticleFailed {
        /// Human-readable failure description
        message: String,
    },
}

/// Run a generation request against a live subscriber.
///
/// Fragments stream out as they arrive; a terminal event always follows.
/// Failures never escape this boundary: the run's error is logged, the
/// subscriber gets an `articleFailed` event, and the caller receives an
/// empty article.
pub async fn generate_live<D: Streaming>(
    orchestrator: &ArticleOrchestrator<D>,
    request: &ArticleRequest,
    events: mpsc::Sender<ArticleEvent>,
) -> String {
    let sink = EventSink::new(events.clone());
    match orchestrator.run(request, &sink).await {
        Ok(article) => {
            if events.send(ArticleEvent::ArticleCompleted).await.is_err() {
                tracing::debug!("subscriber left before the completion event");
            }
            article
        }
        Err(error) => {
            tracing::error!(%error, topic = %request.description(), "article generation failed");
            let _ = events
                .send(ArticleEvent::ArticleFailed {
                    message: error.to_string(),
                })
                .await;
            String::new()
        }
    }
}
