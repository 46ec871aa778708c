use serde::Serialize;

/// Lifecycle state of one recording cycle
///
/// Single writer: only the `RecordingSession` controller mutates this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingState {
    #[default]
    Idle,
    /// Device acquisition in flight; start/stop calls are rejected
    Starting,
    Recording,
    /// Finalizing: elapsed latched, waiting out the grace delay
    Stopping,
}

impl RecordingState {
    pub fn label(self) -> &'static str {
        match self {
            RecordingState::Idle => "idle",
            RecordingState::Starting => "starting",
            RecordingState::Recording => "recording",
            RecordingState::Stopping => "stopping",
        }
    }
}
