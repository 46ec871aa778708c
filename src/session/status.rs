use chrono::{DateTime, Utc};
use serde::Serialize;

use super::state::RecordingState;

/// Point-in-time snapshot of a recording session, for display layers
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    /// Session identifier
    pub session_id: String,

    /// Current lifecycle state
    pub state: RecordingState,

    /// When the current (or last) recording started
    pub started_at: Option<DateTime<Utc>>,

    /// Elapsed whole seconds (live while recording, latched after stop)
    pub elapsed_secs: u64,

    /// Latest interim transcript fragment, display only
    pub interim_text: Option<String>,
}
