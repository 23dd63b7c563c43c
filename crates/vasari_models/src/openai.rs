//! OpenAI-compatible API client.
//!
//! One client covers both capabilities the pipeline needs: streaming chat
//! completions for article text and one-shot image generation for the
//! illustration. Any service exposing the OpenAI wire format works by
//! pointing `base_url` at it.

use crate::dto::{
    ChatChunk, ChatMessage, ChatRequest, ChatResponse, ErrorEnvelope, ImageRequest, ImageResponse,
};
use async_trait::async_trait;
use futures_util::StreamExt;
use std::env;
use tracing::{debug, instrument, warn};
use vasari_core::{GenerateRequest, GenerateResponse, Role};
use vasari_error::{
    ConfigError, JsonError, UpstreamError, UpstreamErrorKind, VasariError, VasariErrorKind,
    VasariResult,
};
use vasari_interface::{
    FinishReason, FragmentStream, ImageDriver, StreamChunk, Streaming, VasariDriver,
};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
const DEFAULT_IMAGE_SIZE: &str = "1024x1024";

/// Client for OpenAI-compatible chat completion and image APIs.
///
/// # Examples
///
/// ```no_run
/// use vasari_models::OpenAiClient;
/// use vasari_core::{GenerateRequest, Message};
/// use vasari_interface::VasariDriver;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = OpenAiClient::new("gpt-4o-mini".to_string())?;
///
/// let request = GenerateRequest {
///     messages: vec![Message::user("Hello")],
///     ..Default::default()
/// };
/// let response = client.generate(&request).await?;
/// println!("{}", response.content);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    image_model: String,
    no_retry: bool,
}

impl OpenAiClient {
    /// Creates a new client for the given chat model.
    ///
    /// Reads the API key from `OPENAI_API_KEY` and an optional base URL
    /// override from `OPENAI_API_BASE`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set.
    #[instrument(skip_all, fields(model = %model))]
    pub fn new(model: String) -> VasariResult<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|e| ConfigError::new(format!("OPENAI_API_KEY not set: {e}")))?;
        let mut client = Self::with_api_key(api_key, model);
        if let Ok(base_url) = env::var("OPENAI_API_BASE") {
            client.base_url = base_url;
        }
        Ok(client)
    }

    /// Creates a new client with an explicit API key.
    pub fn with_api_key(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            no_retry: false,
        }
    }

    /// Point the client at a different OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model used for image generation.
    pub fn with_image_model(mut self, image_model: impl Into<String>) -> Self {
        self.image_model = image_model.into();
        self
    }

    /// Disable retry on transient failures.
    pub fn without_retry(mut self) -> Self {
        self.no_retry = true;
        self
    }

    fn chat_payload(&self, req: &GenerateRequest, stream: bool) -> ChatRequest {
        ChatRequest {
            model: req.model.clone().unwrap_or_else(|| self.model.clone()),
            messages: req.messages.iter().map(to_chat_message).collect(),
            max_tokens: req.max_tokens,
            temperature: req.temperature,
            stream,
        }
    }

    /// Send one chat request and return the raw response body.
    async fn post_chat(&self, payload: &ChatRequest) -> VasariResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(url = %url, model = %payload.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| UpstreamError::new(UpstreamErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::new(UpstreamErrorKind::Transport(e.to_string())))?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body).into());
        }
        Ok(body)
    }
}

#[async_trait]
impl VasariDriver for OpenAiClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.model))]
    async fn generate(&self, req: &GenerateRequest) -> VasariResult<GenerateResponse> {
        let payload = self.chat_payload(req, false);

        let body = if self.no_retry {
            self.post_chat(&payload).await?
        } else {
            use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};

            let retry_strategy = ExponentialBackoff::from_millis(500)
                .factor(2)
                .max_delay(std::time::Duration::from_secs(8))
                .map(jitter)
                .take(3);

            Retry::spawn(retry_strategy, || async {
                match self.post_chat(&payload).await {
                    Ok(body) => Ok(body),
                    Err(e) => {
                        if is_transient(&e) {
                            warn!(error = %e, "transient chat completion failure, will retry");
                            Err(RetryError::Transient {
                                err: e,
                                retry_after: None,
                            })
                        } else {
                            Err(RetryError::Permanent(e))
                        }
                    }
                }
            })
            .await?
        };

        let content = decode_chat_body(&body)?;
        Ok(GenerateResponse { content })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Streaming for OpenAiClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.model))]
    async fn generate_stream(&self, req: &GenerateRequest) -> VasariResult<FragmentStream> {
        let payload = self.chat_payload(req, true);
        let url = format!("{}/chat/completions", self.base_url);
        debug!(url = %url, model = %payload.model, "opening chat completion stream");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| UpstreamError::new(UpstreamErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body).into());
        }

        let mut bytes = response.bytes_stream();
        let stream = async_stream::try_stream! {
            let mut buffer = String::new();
            'read: while let Some(chunk) = bytes.next().await {
                let chunk = chunk.map_err(|e| {
                    VasariError::from(UpstreamError::new(UpstreamErrorKind::Transport(
                        e.to_string(),
                    )))
                })?;
                buffer.push_str(&String::from_utf8_lossy(&chunk));

                for data in drain_sse_data(&mut buffer) {
                    if data == "[DONE]" {
                        break 'read;
                    }
                    if let Some(parsed) = decode_stream_data(&data)? {
                        yield parsed;
                    }
                }
            }
        };

        Ok(Box::pin(stream))
    }
}

#[async_trait]
impl ImageDriver for OpenAiClient {
    #[instrument(skip(self, prompt), fields(provider = "openai", model = %self.image_model))]
    async fn render(&self, prompt: &str) -> VasariResult<String> {
        let url = format!("{}/images/generations", self.base_url);
        let payload = ImageRequest {
            model: Some(self.image_model.clone()),
            prompt: prompt.to_string(),
            n: 1,
            size: Some(DEFAULT_IMAGE_SIZE.to_string()),
        };
        debug!(url = %url, "sending image generation request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| UpstreamError::new(UpstreamErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::new(UpstreamErrorKind::Transport(e.to_string())))?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body).into());
        }
        decode_image_body(&body)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

fn to_chat_message(message: &vasari_core::Message) -> ChatMessage {
    ChatMessage {
        role: role_name(message.role).to_string(),
        content: message.content.clone(),
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

/// Build the error for a non-success status, preferring the message from
/// the error envelope when the body carries one.
fn status_error(status: u16, body: &str) -> UpstreamError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string());
    UpstreamError::new(UpstreamErrorKind::Status { status, message })
}

/// Decode a 2xx chat completion body.
///
/// The envelope check runs first: a success status whose body is an error
/// payload must never pass as content.
fn decode_chat_body(body: &str) -> VasariResult<String> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return Err(
            UpstreamError::new(UpstreamErrorKind::ErrorPayload(envelope.error.message)).into(),
        );
    }

    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| JsonError::new(format!("failed to parse chat completion: {e}")))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| UpstreamError::new(UpstreamErrorKind::MissingContent).into())
}

/// Decode one SSE data payload into a stream chunk.
///
/// Returns `None` for keep-alive payloads that carry neither delta text
/// nor a finish reason.
fn decode_stream_data(data: &str) -> VasariResult<Option<StreamChunk>> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(data) {
        return Err(
            UpstreamError::new(UpstreamErrorKind::ErrorPayload(envelope.error.message)).into(),
        );
    }

    let chunk: ChatChunk = serde_json::from_str(data)
        .map_err(|e| JsonError::new(format!("failed to parse stream chunk: {e}")))?;

    let Some(choice) = chunk.choices.into_iter().next() else {
        return Ok(None);
    };

    if let Some(content) = choice.delta.content {
        if !content.is_empty() {
            return Ok(Some(StreamChunk::partial(content)));
        }
    }
    if let Some(reason) = choice.finish_reason {
        return Ok(Some(StreamChunk::done(map_finish_reason(&reason))));
    }
    Ok(None)
}

fn decode_image_body(body: &str) -> VasariResult<String> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return Err(
            UpstreamError::new(UpstreamErrorKind::ErrorPayload(envelope.error.message)).into(),
        );
    }

    let response: ImageResponse = serde_json::from_str(body)
        .map_err(|e| JsonError::new(format!("failed to parse image response: {e}")))?;

    response
        .data
        .into_iter()
        .next()
        .and_then(|datum| datum.url)
        .ok_or_else(|| UpstreamError::new(UpstreamErrorKind::MissingContent).into())
}

fn map_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "stop" => FinishReason::Stop,
        "length" => FinishReason::Length,
        "content_filter" => FinishReason::ContentFilter,
        _ => FinishReason::Other,
    }
}

fn is_transient(error: &VasariError) -> bool {
    match error.kind() {
        VasariErrorKind::Upstream(upstream) => upstream.kind.is_transient(),
        _ => false,
    }
}

/// Pull complete SSE lines out of the buffer, returning their data
/// payloads. Incomplete trailing lines stay buffered for the next read.
fn drain_sse_data(buffer: &mut String) -> Vec<String> {
    let mut events = Vec::new();
    while let Some(newline) = buffer.find('\n') {
        let line: String = buffer.drain(..=newline).collect();
        let line = line.trim();
        if let Some(data) = line.strip_prefix("data:") {
            events.push(data.trim().to_string());
        }
    }
    events
}
