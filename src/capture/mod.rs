//! Device capture boundary
//!
//! The session owns one `CaptureDevice` exclusively. Captured chunks are
//! accumulated into an `AudioClip` that backs the fallback transcription
//! path when the streaming engine produced no finalized text.

mod clip;
mod device;

pub use clip::AudioClip;
pub use device::{AudioChunk, CaptureDevice};
