//! Staged article generation.
//!
//! The orchestrator walks the fixed stage order for a request, issuing one
//! streaming call per stage with the full conversation so far as context,
//! and forwards every fragment to the sink the moment it arrives.

use crate::{ConversationSession, ReferenceVault, Stage, compose};
use futures_util::StreamExt;
use vasari_core::{ArticleRequest, GenerateRequest};
use vasari_error::{BuilderError, VasariResult};
use vasari_interface::{StreamSink, Streaming};

/// Drives the generation pipeline for one article at a time.
///
/// The text backend is injected at construction, so tests can substitute a
/// scripted driver. The orchestrator itself holds no per-run state; any
/// number of runs may execute concurrently on one instance.
///
/// # Stage order
///
/// `introduction → body[1..k] → conclusion → references`, with `k` derived
/// from the requested article length. Every stage call completes — stream
/// fully drained, exchange recorded — before the next instruction is
/// composed, because later stages lean on the conversation context instead
/// of re-sending prior text.
pub struct ArticleOrchestrator<D> {
    driver: D,
    vault: ReferenceVault,
    model: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl<D: Streaming> ArticleOrchestrator<D> {
    /// Create an orchestrator around a streaming text driver.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            vault: ReferenceVault::new(),
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Override the model requested from the driver.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the sampling temperature for every stage call.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Cap the tokens generated per stage call.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Get a reference to the underlying text driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Staging area for reference materials consumed by the next run.
    pub fn vault(&self) -> &ReferenceVault {
        &self.vault
    }

    /// Execute one full generation run.
    ///
    /// Every fragment is forwarded to `sink` before the next one is
    /// awaited; the returned article equals the concatenation of all
    /// forwarded fragments.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request fails validation
    /// - Any stage call fails (the run aborts, later stages never execute)
    /// - The sink reports its subscriber gone
    #[tracing::instrument(
        skip(self, request, sink),
        fields(
            topic = %request.description(),
            sections = %request.article_length(),
            provider = self.driver.provider_name(),
        )
    )]
    pub async fn run<S: StreamSink>(
        &self,
        request: &ArticleRequest,
        sink: &S,
    ) -> VasariResult<String> {
        request.validate()?;

        let materials = self.vault.withdraw();
        let mut session = ConversationSession::new();
        let mut article = String::new();

        tracing::debug!(session = %session.id(), "starting generation run");

        for stage in Stage::sequence(request.article_length().body_iterations()) {
            let instruction = compose(stage, request, materials.as_ref());
            let output = self
                .run_stage(stage, &instruction, &session, sink, &mut article)
                .await?;
            session.append_exchange(&instruction, &output)?;
        }

        tracing::info!(
            session = %session.id(),
            chars = article.len(),
            "generation run finished"
        );
        Ok(article)
    }

    /// Issue one stage call and drain its stream.
    ///
    /// Fragments are appended to the running article and handed to the
    /// sink in arrival order, one at a time; the stage's aggregated output
    /// is returned for the conversation record.
    async fn run_stage<S: StreamSink>(
        &self,
        stage: Stage,
        instruction: &str,
        session: &ConversationSession,
        sink: &S,
        article: &mut String,
    ) -> VasariResult<String> {
        tracing::debug!(stage = %stage, context_messages = session.messages().len(), "entering stage");

        let mut builder = GenerateRequest::builder();
        builder.messages(session.request_messages(instruction));
        if let Some(model) = &self.model {
            builder.model(model.clone());
        }
        if let Some(temperature) = self.temperature {
            builder.temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            builder.max_tokens(max_tokens);
        }
        let request = builder
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        let mut stream = self.driver.generate_stream(&request).await?;
        let mut output = String::new();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if chunk.content.is_empty() {
                continue;
            }
            article.push_str(&chunk.content);
            output.push_str(&chunk.content);
            sink.deliver(&chunk.content).await?;
        }

        tracing::debug!(stage = %stage, chars = output.len(), "stage complete");
        Ok(output)
    }
}
