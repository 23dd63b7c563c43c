use async_trait::async_trait;
use futures_util::stream;
use vasari_core::{ArticleLength, ArticleRequest, GenerateRequest, GenerateResponse};
use vasari_error::{UpstreamError, UpstreamErrorKind, VasariResult};
use vasari_interface::{FinishReason, FragmentStream, StreamChunk, Streaming, VasariDriver};
use vasari_pipeline::{ArticleEvent, ArticleOrchestrator, generate_live};

/// Driver that streams a fixed phrase, or fails outright.
struct PhraseDriver {
    fail: bool,
}

#[async_trait]
impl VasariDriver for PhraseDriver {
    async fn generate(&self, _req: &GenerateRequest) -> VasariResult<GenerateResponse> {
        Ok(GenerateResponse {
            content: "busy bees".to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "phrase"
    }

    fn model_name(&self) -> &str {
        "phrase-v1"
    }
}

#[async_trait]
impl Streaming for PhraseDriver {
    async fn generate_stream(&self, _req: &GenerateRequest) -> VasariResult<FragmentStream> {
        if self.fail {
            return Err(UpstreamError::new(UpstreamErrorKind::ErrorPayload(
                "model unavailable".to_string(),
            ))
            .into());
        }
        let chunks = vec![
            Ok(StreamChunk::partial("busy ")),
            Ok(StreamChunk::partial("bees")),
            Ok(StreamChunk::done(FinishReason::Stop)),
        ];
        Ok(Box::pin(stream::iter(chunks)))
    }
}

fn request() -> ArticleRequest {
    ArticleRequest::builder()
        .description("urban beekeeping")
        .article_length(ArticleLength::Four)
        .layout_structure("magazine")
        .build()
        .unwrap()
}

fn drain(rx: &mut tokio::sync::mpsc::Receiver<ArticleEvent>) -> Vec<ArticleEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn successful_run_streams_fragments_then_completion() {
    let orchestrator = ArticleOrchestrator::new(PhraseDriver { fail: false });
    let (tx, mut rx) = tokio::sync::mpsc::channel(64);

    let article = generate_live(&orchestrator, &request(), tx).await;
    let events = drain(&mut rx);

    assert_eq!(events.last(), Some(&ArticleEvent::ArticleCompleted));

    let fragments: String = events
        .iter()
        .filter_map(|event| match event {
            ArticleEvent::ArticlePartGenerated(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(fragments, article);
    // Four stages, two fragments each.
    assert_eq!(events.len(), 9);
}

#[tokio::test]
async fn failed_run_surfaces_as_terminal_event_and_empty_content() {
    let orchestrator = ArticleOrchestrator::new(PhraseDriver { fail: true });
    let (tx, mut rx) = tokio::sync::mpsc::channel(64);

    let article = generate_live(&orchestrator, &request(), tx).await;
    let events = drain(&mut rx);

    // The failure never escapes the boundary; the caller sees empty content.
    assert_eq!(article, "");
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], ArticleEvent::ArticleFailed { .. }));
}

#[test]
fn events_use_the_wire_naming() {
    let fragment = ArticleEvent::ArticlePartGenerated("<p>bees</p>".to_string());
    let wire = serde_json::to_value(&fragment).unwrap();
    assert_eq!(wire["event"], "articlePartGenerated");
    assert_eq!(wire["data"], "<p>bees</p>");

    let done = serde_json::to_value(&ArticleEvent::ArticleCompleted).unwrap();
    assert_eq!(done["event"], "articleCompleted");

    let failed = serde_json::to_value(&ArticleEvent::ArticleFailed {
        message: "model unavailable".to_string(),
    })
    .unwrap();
    assert_eq!(failed["event"], "articleFailed");
    assert_eq!(failed["data"]["message"], "model unavailable");
}

#[test]
fn inbound_request_event_parses_the_wire_payload() {
    let wire = r#"{
        "event": "generateArticle",
        "data": {
            "description": "urban beekeeping",
            "articleLength": "4",
            "layoutStructure": "magazine"
        }
    }"#;

    let event: ArticleEvent = serde_json::from_str(wire).unwrap();
    match event {
        ArticleEvent::GenerateArticle(request) => {
            assert_eq!(request.description(), "urban beekeeping");
            assert_eq!(*request.article_length(), ArticleLength::Four);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
