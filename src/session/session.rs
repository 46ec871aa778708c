use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::config::SessionConfig;
use super::gate::{DispatchGate, DispatchOutcome};
use super::state::RecordingState;
use super::status::SessionStatus;
use super::timer::DurationTracker;
use crate::capture::{AudioChunk, AudioClip, CaptureDevice};
use crate::error::{CaptureError, StreamError};
use crate::pipeline::MessagePipeline;
use crate::transcript::{FallbackTranscriber, TranscriptEvent, TranscriptStream};

/// Result of one stop() call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    /// stop() called outside Recording; nothing happened
    Ignored,
    /// Cycle ended with no finalized text (empty stream and the clip was
    /// under the minimum size, or the fallback returned nothing)
    NoTranscript,
    /// A finalized transcript reached the dispatch gate
    Dispatch(DispatchOutcome),
}

/// Controller for one recording attempt at a time: serializes the lifecycle
/// and guarantees resource release on every exit path.
///
/// Methods take `&mut self`, so the caller's ownership serializes start/stop
/// against each other; the forwarding tasks spawned while recording write
/// through shared buffers whose writer role ends (grace delay, then abort)
/// before the dispatch gate reads.
pub struct RecordingSession {
    config: SessionConfig,
    state: RecordingState,
    started_at: Option<DateTime<Utc>>,

    device: Box<dyn CaptureDevice>,
    stream: Box<dyn TranscriptStream>,
    fallback: Arc<dyn FallbackTranscriber>,
    gate: DispatchGate,
    tracker: DurationTracker,

    /// Finalized fragments, appended in arrival order while recording
    transcript: Arc<Mutex<Vec<String>>>,

    /// Latest interim fragment, display only
    interim: Arc<Mutex<Option<String>>>,

    /// First non-benign recognition error since recording began
    stream_failure: Arc<Mutex<Option<StreamError>>>,

    /// Captured audio, feeds the fallback transcription path
    clip: Arc<Mutex<AudioClip>>,

    event_task: Option<JoinHandle<()>>,
    chunk_task: Option<JoinHandle<()>>,
}

impl RecordingSession {
    pub fn new(
        config: SessionConfig,
        device: Box<dyn CaptureDevice>,
        stream: Box<dyn TranscriptStream>,
        fallback: Arc<dyn FallbackTranscriber>,
        pipeline: Arc<dyn MessagePipeline>,
    ) -> Self {
        let gate = DispatchGate::new(pipeline, config.denylist.clone());
        let tracker = DurationTracker::new(config.tick_interval);
        let clip = AudioClip::new(config.mime_type.clone());

        Self {
            config,
            state: RecordingState::Idle,
            started_at: None,
            device,
            stream,
            fallback,
            gate,
            tracker,
            transcript: Arc::new(Mutex::new(Vec::new())),
            interim: Arc::new(Mutex::new(None)),
            stream_failure: Arc::new(Mutex::new(None)),
            clip: Arc::new(Mutex::new(clip)),
            event_task: None,
            chunk_task: None,
        }
    }

    /// Begin a recording cycle
    ///
    /// No-op unless Idle. Acquisition failures surface as a typed
    /// `DeviceError` and the session returns to Idle so a retry is possible;
    /// nothing is retried automatically.
    pub async fn start(&mut self) -> Result<(), CaptureError> {
        if self.state != RecordingState::Idle {
            warn!("start() ignored: session is {}", self.state.label());
            return Ok(());
        }

        self.state = RecordingState::Starting;
        info!("Starting recording session: {}", self.config.session_id);

        // Idempotent teardown of anything a previous cycle left behind
        self.release_resources().await;
        self.clear_buffers().await;
        self.tracker.reset();

        let chunk_rx = match self.device.acquire().await {
            Ok(rx) => rx,
            Err(e) => {
                error!("Device acquisition failed ({}): {}", self.device.name(), e);
                self.release_resources().await;
                self.state = RecordingState::Idle;
                return Err(e.into());
            }
        };

        let event_rx = match self.stream.start().await {
            Ok(rx) => rx,
            Err(e) => {
                error!("Recognition start failed: {}", e);
                self.release_resources().await;
                self.state = RecordingState::Idle;
                return Err(e.into());
            }
        };

        self.spawn_event_pump(event_rx);
        self.spawn_chunk_pump(chunk_rx);

        self.tracker.start();
        self.started_at = Some(Utc::now());
        self.state = RecordingState::Recording;

        info!("Recording session started: {}", self.config.session_id);
        Ok(())
    }

    /// End the recording cycle and run the dispatch gate
    ///
    /// No-op unless Recording. The elapsed value is latched immediately; the
    /// grace delay then lets trailing recognition events flush before
    /// resources are released and the transcript is finalized.
    pub async fn stop(&mut self) -> Result<StopOutcome, CaptureError> {
        if self.state != RecordingState::Recording {
            warn!("stop() ignored: session is {}", self.state.label());
            return Ok(StopOutcome::Ignored);
        }

        self.state = RecordingState::Stopping;
        info!("Stopping recording session: {}", self.config.session_id);

        let duration_secs = self.tracker.stop();
        self.stream.stop().await;

        tokio::time::sleep(self.config.grace_delay).await;
        self.release_resources().await;

        let text = {
            let fragments = self.transcript.lock().await;
            fragments.join(" ").trim().to_string()
        };

        let finalized = if text.is_empty() {
            self.transcribe_clip().await?
        } else {
            Some(text)
        };

        self.clear_buffers().await;
        self.started_at = None;
        self.state = RecordingState::Idle;
        info!("Recording session settled: {}", self.config.session_id);

        match finalized {
            Some(text) => {
                let outcome = self.gate.offer(&text, duration_secs).await;
                Ok(StopOutcome::Dispatch(outcome))
            }
            None => Ok(StopOutcome::NoTranscript),
        }
    }

    /// Unconditional teardown; safe from any state
    ///
    /// The error-recovery primitive: aborts forwarding tasks and in-flight
    /// recognition, releases the device, halts the timer, clears all buffers.
    pub async fn force_cleanup(&mut self) {
        info!("Forcing cleanup from state {}", self.state.label());
        self.release_resources().await;
        self.clear_buffers().await;
        self.tracker.reset();
        self.started_at = None;
        self.state = RecordingState::Idle;
    }

    pub fn state(&self) -> RecordingState {
        self.state
    }

    /// Live elapsed-seconds samples for a display layer
    pub fn elapsed_watch(&self) -> watch::Receiver<u64> {
        self.tracker.subscribe()
    }

    /// Snapshot for display layers
    pub async fn status(&self) -> SessionStatus {
        SessionStatus {
            session_id: self.config.session_id.clone(),
            state: self.state,
            started_at: self.started_at,
            elapsed_secs: self.tracker.elapsed_secs(),
            interim_text: self.interim.lock().await.clone(),
        }
    }

    /// Surface the first non-benign recognition error since recording began
    ///
    /// Reading clears it. These do not interrupt recording; the caller
    /// decides whether continuation is meaningless and forces cleanup.
    pub async fn take_stream_error(&self) -> Option<StreamError> {
        self.stream_failure.lock().await.take()
    }

    /// If the stream produced nothing, transcribe the captured clip
    async fn transcribe_clip(&mut self) -> Result<Option<String>, CaptureError> {
        let clip = {
            let mut guard = self.clip.lock().await;
            std::mem::replace(&mut *guard, AudioClip::new(self.config.mime_type.clone()))
        };

        if !clip.meets_minimum(self.config.min_clip_bytes) {
            info!(
                "Discarding {} byte clip (below {} byte minimum)",
                clip.len(),
                self.config.min_clip_bytes
            );
            return Ok(None);
        }

        info!("No streaming transcript; transcribing captured clip");
        match self.fallback.transcribe(&clip).await {
            Ok(text) => {
                let text = text.trim().to_string();
                Ok((!text.is_empty()).then_some(text))
            }
            Err(e) => {
                error!("Fallback transcription failed: {}", e);
                // Settle to Idle first so the caller can retry start()
                self.clear_buffers().await;
                self.started_at = None;
                self.state = RecordingState::Idle;
                Err(e.into())
            }
        }
    }

    fn spawn_event_pump(&mut self, mut rx: mpsc::Receiver<TranscriptEvent>) {
        let transcript = Arc::clone(&self.transcript);
        let interim = Arc::clone(&self.interim);
        let failure = Arc::clone(&self.stream_failure);

        self.event_task = Some(tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                match event {
                    TranscriptEvent::Final(text) => {
                        let mut fragments = transcript.lock().await;
                        // Engines re-fire the same final result; drop exact repeats
                        if fragments.last().map(String::as_str) != Some(text.as_str()) {
                            fragments.push(text);
                        }
                    }
                    TranscriptEvent::Interim(text) => {
                        *interim.lock().await = Some(text);
                    }
                    TranscriptEvent::Error(e) if e.is_benign() => {
                        debug!("Ignoring benign recognition event: {}", e);
                    }
                    TranscriptEvent::Error(e) => {
                        warn!("Recognition error: {}", e);
                        let mut slot = failure.lock().await;
                        if slot.is_none() {
                            *slot = Some(e);
                        }
                    }
                    TranscriptEvent::Ended => break,
                }
            }
        }));
    }

    fn spawn_chunk_pump(&mut self, mut rx: mpsc::Receiver<AudioChunk>) {
        let clip = Arc::clone(&self.clip);

        self.chunk_task = Some(tokio::spawn(async move {
            while let Some(chunk) = rx.recv().await {
                clip.lock().await.push(chunk);
            }
        }));
    }

    /// Abort forwarding tasks, abort recognition, release the device
    ///
    /// Idempotent; called on every exit path and defensively on start.
    async fn release_resources(&mut self) {
        if let Some(task) = self.event_task.take() {
            task.abort();
        }
        if let Some(task) = self.chunk_task.take() {
            task.abort();
        }
        self.stream.abort().await;
        self.device.release().await;
    }

    async fn clear_buffers(&mut self) {
        self.transcript.lock().await.clear();
        *self.interim.lock().await = None;
        *self.stream_failure.lock().await = None;
        *self.clip.lock().await = AudioClip::new(self.config.mime_type.clone());
    }
}
