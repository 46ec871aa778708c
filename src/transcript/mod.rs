//! Transcript source boundary
//!
//! Streaming-first: finalized fragments arrive as `TranscriptEvent::Final`
//! while recording. If a cycle ends with no finalized text, the session
//! falls back to one-shot server-side transcription of the captured clip.

mod fallback;
mod stream;

pub use fallback::{FallbackTranscriber, HttpTranscriber};
pub use stream::{TranscriptEvent, TranscriptStream};
