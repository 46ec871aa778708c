//! Downstream message pipeline boundary
//!
//! Everything past this seam (persistence, LLM conversation, correction
//! analysis) belongs to the pipeline, including retry of its own failures.

use anyhow::Result;

/// Consumer of finalized utterances
#[async_trait::async_trait]
pub trait MessagePipeline: Send + Sync {
    /// Accept one finalized utterance and its recording duration
    async fn submit(&self, text: &str, duration_secs: u64) -> Result<()>;
}
