//! Fragment sink implementations.

use crate::ArticleEvent;
use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::mpsc;
use vasari_error::{PipelineError, PipelineErrorKind, VasariResult};
use vasari_interface::StreamSink;

/// Forwards fragments to a live subscriber as [`ArticleEvent`]s.
///
/// A closed receiver surfaces as a sink-closed pipeline error, which stops
/// the run before any further stage call is issued.
#[derive(Debug, Clone)]
pub struct EventSink {
    events: mpsc::Sender<ArticleEvent>,
}

impl EventSink {
    /// Wrap an event channel sender.
    pub fn new(events: mpsc::Sender<ArticleEvent>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl StreamSink for EventSink {
    async fn deliver(&self, fragment: &str) -> VasariResult<()> {
        self.events
            .send(ArticleEvent::ArticlePartGenerated(fragment.to_string()))
            .await
            .map_err(|_| PipelineError::new(PipelineErrorKind::SinkClosed).into())
    }
}

/// Accumulates fragments in memory.
///
/// Used by non-live generation paths and by tests asserting the emission
/// order round-trip.
#[derive(Debug, Default)]
pub struct CollectSink {
    fragments: Mutex<Vec<String>>,
}

impl CollectSink {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fragments delivered so far, in emission order.
    pub fn fragments(&self) -> Vec<String> {
        self.fragments.lock().unwrap().clone()
    }

    /// All delivered fragments concatenated in emission order.
    pub fn joined(&self) -> String {
        self.fragments.lock().unwrap().concat()
    }
}

#[async_trait]
impl StreamSink for CollectSink {
    async fn deliver(&self, fragment: &str) -> VasariResult<()> {
        self.fragments.lock().unwrap().push(fragment.to_string());
        Ok(())
    }
}

/// Discards every fragment.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

#[async_trait]
impl StreamSink for NullSink {
    async fn deliver(&self, _fragment: &str) -> VasariResult<()> {
        Ok(())
    }
}
