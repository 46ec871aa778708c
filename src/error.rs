use thiserror::Error;

/// Result type for capture operations
pub type Result<T> = std::result::Result<T, CaptureError>;

/// Failures while acquiring or holding the capture device
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("Microphone permission denied")]
    PermissionDenied,

    #[error("No capture device found")]
    DeviceNotFound,

    #[error("Device error: {0}")]
    Unknown(String),
}

/// Failures reported by the streaming recognition engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// Engine aborted during an intentional stop; expected, swallowed
    #[error("Recognition aborted")]
    Aborted,

    /// Engine heard nothing; swallowed, recording continues
    #[error("No speech detected")]
    NoSpeech,

    #[error("Recognition network error: {0}")]
    Network(String),

    #[error("Recognition error: {0}")]
    Other(String),
}

impl StreamError {
    /// Expected during normal operation, never surfaced to the caller
    pub fn is_benign(&self) -> bool {
        matches!(self, StreamError::Aborted | StreamError::NoSpeech)
    }
}

/// Failures from the one-shot fallback transcription call
#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("Transcription request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Transcription service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid transcription response: {0}")]
    InvalidResponse(String),
}

/// Umbrella error surfaced by the recording session
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
}
