// Shared scripted collaborators for integration tests
//
// Each fake is channel-driven so tests can script the exact event sequence
// the session observes: device chunks, recognition events, fallback results.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use talka_capture::{
    AudioChunk, AudioClip, CaptureDevice, DeviceError, FallbackTranscriber, MessagePipeline,
    RecordingSession, SessionConfig, TranscriptEvent, TranscriptStream, TranscriptionError,
};
use tokio::sync::{mpsc, Mutex};

/// Device that either fails acquisition or emits a fixed set of chunks
pub struct ScriptedDevice {
    fail_with: Option<DeviceError>,
    chunks: Vec<Vec<u8>>,
    pub acquires: Arc<AtomicUsize>,
    pub releases: Arc<AtomicUsize>,
}

impl ScriptedDevice {
    pub fn with_chunks(chunks: Vec<Vec<u8>>) -> Self {
        Self {
            fail_with: None,
            chunks,
            acquires: Arc::new(AtomicUsize::new(0)),
            releases: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn silent() -> Self {
        Self::with_chunks(Vec::new())
    }

    pub fn failing(err: DeviceError) -> Self {
        Self {
            fail_with: Some(err),
            chunks: Vec::new(),
            acquires: Arc::new(AtomicUsize::new(0)),
            releases: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait::async_trait]
impl CaptureDevice for ScriptedDevice {
    async fn acquire(&mut self) -> Result<mpsc::Receiver<AudioChunk>, DeviceError> {
        self.acquires.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_with.clone() {
            return Err(err);
        }

        let (tx, rx) = mpsc::channel(64);
        for data in self.chunks.clone() {
            tx.send(AudioChunk::new(data))
                .await
                .expect("scripted chunk channel should not fill");
        }
        // Sender drops here; the session's chunk pump drains what was queued
        Ok(rx)
    }

    async fn release(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }

    fn name(&self) -> &str {
        "scripted-device"
    }
}

/// Handle the test keeps to push recognition events after start()
#[derive(Clone, Default)]
pub struct StreamHandle {
    sender: Arc<Mutex<Option<mpsc::Sender<TranscriptEvent>>>>,
}

impl StreamHandle {
    pub async fn emit(&self, event: TranscriptEvent) {
        let guard = self.sender.lock().await;
        let tx = guard.as_ref().expect("stream not started");
        tx.send(event).await.expect("event channel closed");
    }
}

/// Recognition engine driven entirely by the test via its handle
pub struct ScriptedStream {
    handle: StreamHandle,
    pub stops: Arc<AtomicUsize>,
    pub aborts: Arc<AtomicUsize>,
}

impl ScriptedStream {
    pub fn new() -> (Self, StreamHandle) {
        let handle = StreamHandle::default();
        let stream = Self {
            handle: handle.clone(),
            stops: Arc::new(AtomicUsize::new(0)),
            aborts: Arc::new(AtomicUsize::new(0)),
        };
        (stream, handle)
    }
}

#[async_trait::async_trait]
impl TranscriptStream for ScriptedStream {
    async fn start(&mut self) -> Result<mpsc::Receiver<TranscriptEvent>, talka_capture::StreamError> {
        let (tx, rx) = mpsc::channel(64);
        *self.handle.sender.lock().await = Some(tx);
        Ok(rx)
    }

    async fn stop(&mut self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
        let mut guard = self.handle.sender.lock().await;
        if let Some(tx) = guard.take() {
            let _ = tx.send(TranscriptEvent::Ended).await;
        }
    }

    async fn abort(&mut self) {
        self.aborts.fetch_add(1, Ordering::SeqCst);
        self.handle.sender.lock().await.take();
    }
}

/// Pipeline that records every submitted (text, duration) pair
#[derive(Default)]
pub struct CountingPipeline {
    pub calls: Arc<Mutex<Vec<(String, u64)>>>,
    pub fail: bool,
}

impl CountingPipeline {
    pub fn new() -> (Arc<Self>, Arc<Mutex<Vec<(String, u64)>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let pipeline = Arc::new(Self {
            calls: Arc::clone(&calls),
            fail: false,
        });
        (pipeline, calls)
    }

    pub fn failing() -> (Arc<Self>, Arc<Mutex<Vec<(String, u64)>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let pipeline = Arc::new(Self {
            calls: Arc::clone(&calls),
            fail: true,
        });
        (pipeline, calls)
    }
}

#[async_trait::async_trait]
impl MessagePipeline for CountingPipeline {
    async fn submit(&self, text: &str, duration_secs: u64) -> anyhow::Result<()> {
        self.calls.lock().await.push((text.to_string(), duration_secs));
        if self.fail {
            anyhow::bail!("downstream pipeline rejected message");
        }
        Ok(())
    }
}

/// Fallback transcriber returning a fixed result
pub struct StubTranscriber {
    text: Option<String>,
    pub calls: Arc<AtomicUsize>,
}

impl StubTranscriber {
    pub fn returning(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            text: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait::async_trait]
impl FallbackTranscriber for StubTranscriber {
    async fn transcribe(&self, _clip: &AudioClip) -> Result<String, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => Err(TranscriptionError::InvalidResponse(
                "scripted failure".to_string(),
            )),
        }
    }
}

/// Session config tuned for tests: short grace delay, tiny clip threshold
pub fn test_config() -> SessionConfig {
    SessionConfig {
        session_id: "test-session".to_string(),
        grace_delay: Duration::from_millis(25),
        min_clip_bytes: 10,
        ..SessionConfig::default()
    }
}

/// Fully wired session plus the handles the tests observe it through
pub struct Harness {
    pub session: RecordingSession,
    pub stream: StreamHandle,
    pub calls: Arc<Mutex<Vec<(String, u64)>>>,
    pub acquires: Arc<AtomicUsize>,
    pub releases: Arc<AtomicUsize>,
    pub transcriptions: Arc<AtomicUsize>,
}

pub fn harness(config: SessionConfig, device: ScriptedDevice, transcriber: StubTranscriber) -> Harness {
    let (stream, handle) = ScriptedStream::new();
    let (pipeline, calls) = CountingPipeline::new();
    let acquires = Arc::clone(&device.acquires);
    let releases = Arc::clone(&device.releases);
    let transcriptions = Arc::clone(&transcriber.calls);

    let session = RecordingSession::new(
        config,
        Box::new(device),
        Box::new(stream),
        Arc::new(transcriber),
        pipeline,
    );

    Harness {
        session,
        stream: handle,
        calls,
        acquires,
        releases,
        transcriptions,
    }
}
