use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

/// Wall-clock duration of the current recording cycle
///
/// A sampler task republishes whole elapsed seconds at a fixed interval for
/// display; the authoritative value is always recomputed from the reference
/// instant, so a missed tick never skews the latched result.
pub struct DurationTracker {
    tick_interval: Duration,
    started_at: Option<Instant>,
    latched_secs: u64,
    elapsed_tx: watch::Sender<u64>,
    // Keeps the channel alive when no display layer subscribed
    _elapsed_rx: watch::Receiver<u64>,
    sampler: Option<JoinHandle<()>>,
}

impl DurationTracker {
    pub fn new(tick_interval: Duration) -> Self {
        let (elapsed_tx, elapsed_rx) = watch::channel(0u64);
        Self {
            tick_interval,
            started_at: None,
            latched_secs: 0,
            elapsed_tx,
            _elapsed_rx: elapsed_rx,
            sampler: None,
        }
    }

    /// Record the reference instant and begin periodic sampling
    pub fn start(&mut self) {
        self.halt_sampler();
        self.latched_secs = 0;
        self.elapsed_tx.send_replace(0);

        let start = Instant::now();
        self.started_at = Some(start);

        let tx = self.elapsed_tx.clone();
        // Anchor the interval to the reference instant, not to whenever the
        // sampler task is first polled
        let mut interval = tokio::time::interval(self.tick_interval);
        self.sampler = Some(tokio::spawn(async move {
            interval.tick().await; // first tick completes immediately
            loop {
                interval.tick().await;
                tx.send_replace(start.elapsed().as_secs());
            }
        }));

        debug!("Duration tracker started");
    }

    /// Cancel sampling and freeze the elapsed value
    ///
    /// Returns the latched whole seconds.
    pub fn stop(&mut self) -> u64 {
        self.halt_sampler();
        if let Some(start) = self.started_at.take() {
            self.latched_secs = start.elapsed().as_secs();
        }
        self.elapsed_tx.send_replace(self.latched_secs);
        debug!("Duration tracker stopped at {}s", self.latched_secs);
        self.latched_secs
    }

    /// Return to zero; used on cleanup
    pub fn reset(&mut self) {
        self.halt_sampler();
        self.started_at = None;
        self.latched_secs = 0;
        self.elapsed_tx.send_replace(0);
    }

    /// Current elapsed whole seconds (live while running, latched after stop)
    pub fn elapsed_secs(&self) -> u64 {
        match self.started_at {
            Some(start) => start.elapsed().as_secs(),
            None => self.latched_secs,
        }
    }

    /// Subscribe to the periodic elapsed-seconds samples
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.elapsed_tx.subscribe()
    }

    fn halt_sampler(&mut self) {
        if let Some(task) = self.sampler.take() {
            task.abort();
        }
    }
}

impl Drop for DurationTracker {
    fn drop(&mut self) {
        self.halt_sampler();
    }
}
