use tokio::sync::mpsc;

use crate::error::StreamError;

/// Event emitted by the streaming recognition engine
///
/// One subscription carries everything the engine reports; the session's
/// forwarding task is the single consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEvent {
    /// Text confirmed complete by the engine
    Final(String),
    /// Provisional text, display only, never dispatched
    Interim(String),
    /// Engine-reported failure; benign variants are swallowed by the consumer
    Error(StreamError),
    /// Engine finished flushing after a stop
    Ended,
}

/// Streaming recognition boundary
#[async_trait::async_trait]
pub trait TranscriptStream: Send + Sync {
    /// Begin recognition
    ///
    /// Returns a channel receiver carrying the engine's event sequence in
    /// arrival order.
    async fn start(&mut self) -> Result<mpsc::Receiver<TranscriptEvent>, StreamError>;

    /// Ask the engine to finalize pending audio and stop
    ///
    /// Trailing `Final` events may still arrive on the receiver afterwards;
    /// the session's grace delay bounds how long it waits for them.
    async fn stop(&mut self);

    /// Tear down recognition immediately, discarding pending results
    async fn abort(&mut self);
}
