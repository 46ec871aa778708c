use std::sync::Arc;

use tracing::{error, info, warn};

use crate::pipeline::MessagePipeline;

/// Outcome of offering one finalized transcript to the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Forwarded to the pipeline (pipeline failures are its own to handle)
    Delivered,
    /// Equal to the previously dispatched text; dropped
    DuplicateSkipped,
    /// Contained a denylisted substring; dropped
    SpamSkipped,
}

/// Exactly-once delivery of finalized transcripts to the message pipeline
///
/// The duplicate guard compares against the last dispatched text only, so
/// two *different* transcripts in rapid succession both go through; that is
/// the product's designed behavior, not a race to fix.
pub struct DispatchGate {
    pipeline: Arc<dyn MessagePipeline>,
    denylist: Vec<String>,
    last_dispatched: Option<String>,
}

impl DispatchGate {
    pub fn new(pipeline: Arc<dyn MessagePipeline>, denylist: Vec<String>) -> Self {
        let denylist = denylist.into_iter().map(|s| s.to_lowercase()).collect();
        Self {
            pipeline,
            denylist,
            last_dispatched: None,
        }
    }

    /// Offer one finalized transcript for dispatch
    pub async fn offer(&mut self, text: &str, duration_secs: u64) -> DispatchOutcome {
        if self.last_dispatched.as_deref() == Some(text) {
            info!("Skipping duplicate transcript");
            return DispatchOutcome::DuplicateSkipped;
        }

        if let Some(hit) = self.spam_match(text) {
            warn!("Skipping transcript matching denylist entry: {}", hit);
            return DispatchOutcome::SpamSkipped;
        }

        // Guard updates before the call: redelivery after a downstream
        // failure is the pipeline's responsibility, not this gate's.
        self.last_dispatched = Some(text.to_string());

        info!("Dispatching transcript ({} chars, {}s)", text.len(), duration_secs);
        if let Err(e) = self.pipeline.submit(text, duration_secs).await {
            error!("Message pipeline rejected transcript: {}", e);
        }

        DispatchOutcome::Delivered
    }

    fn spam_match(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();
        self.denylist
            .iter()
            .find(|entry| lowered.contains(entry.as_str()))
            .map(|s| s.as_str())
    }
}
