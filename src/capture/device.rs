use tokio::sync::mpsc;

use crate::error::DeviceError;

/// One captured audio fragment, opaque encoded bytes
#[derive(Debug, Clone)]
pub struct AudioChunk {
    pub data: Vec<u8>,
}

impl AudioChunk {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

/// Microphone capture boundary
///
/// The session owns the device exclusively for the lifetime of one recording
/// cycle: `acquire` on entry to Starting, `release` on every exit path.
/// `release` must be idempotent; the session calls it defensively during
/// cleanup even when no acquisition succeeded.
#[async_trait::async_trait]
pub trait CaptureDevice: Send + Sync {
    /// Acquire the device and begin capture
    ///
    /// Returns a channel receiver that will receive encoded audio chunks
    async fn acquire(&mut self) -> Result<mpsc::Receiver<AudioChunk>, DeviceError>;

    /// Release the device and end capture
    async fn release(&mut self);

    /// Device name for logging
    fn name(&self) -> &str;
}
