use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a recording session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier
    pub session_id: String,

    /// Wait after stop() for trailing transcript/audio events to flush
    pub grace_delay: Duration,

    /// Sampling interval for the live duration display
    pub tick_interval: Duration,

    /// Clips smaller than this are too short to contain speech and are
    /// discarded without a fallback transcription call
    pub min_clip_bytes: usize,

    /// MIME type of the captured audio chunks
    pub mime_type: String,

    /// Substrings that mark a transcript as injected spam (case-insensitive
    /// containment, no semantic analysis)
    pub denylist: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("utterance-{}", uuid::Uuid::new_v4()),
            grace_delay: Duration::from_millis(300),
            tick_interval: Duration::from_millis(100),
            min_clip_bytes: 4096,
            mime_type: "audio/webm".to_string(),
            // Caption-credit strings the recognition engine is known to
            // hallucinate into near-silent clips
            denylist: vec!["amara.org".to_string(), "mooji.org".to_string()],
        }
    }
}
