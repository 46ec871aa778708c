//! Recording session management
//!
//! This module provides the `RecordingSession` controller that manages:
//! - The four-state recording lifecycle (idle/starting/recording/stopping)
//! - Transcript accumulation from the streaming recognition engine
//! - Wall-clock duration tracking with a live display channel
//! - Exactly-once dispatch of finalized transcripts to the message pipeline

mod config;
mod gate;
mod session;
mod state;
mod status;
mod timer;

pub use config::SessionConfig;
pub use gate::{DispatchGate, DispatchOutcome};
pub use session::{RecordingSession, StopOutcome};
pub use state::RecordingState;
pub use status::SessionStatus;
pub use timer::DurationTracker;
