pub mod capture;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod session;
pub mod transcript;

pub use capture::{AudioChunk, AudioClip, CaptureDevice};
pub use config::Config;
pub use error::{CaptureError, DeviceError, StreamError, TranscriptionError};
pub use pipeline::MessagePipeline;
pub use session::{
    DispatchGate, DispatchOutcome, DurationTracker, RecordingSession, RecordingState,
    SessionConfig, SessionStatus, StopOutcome,
};
pub use transcript::{FallbackTranscriber, HttpTranscriber, TranscriptEvent, TranscriptStream};
