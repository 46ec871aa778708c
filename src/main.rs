use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use talka_capture::{Config, SessionConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "talka-capture", about = "Utterance capture core for Talka")]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(short, long, default_value = "config/talka-capture")]
    config: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("Talka capture core v0.1.0");
    info!("Loaded config: {}", cfg.service.name);
    info!("Fallback transcription endpoint: {}", cfg.transcription.endpoint);

    let session = SessionConfig {
        grace_delay: Duration::from_millis(cfg.capture.grace_delay_ms),
        tick_interval: Duration::from_millis(cfg.capture.tick_interval_ms),
        min_clip_bytes: cfg.capture.min_clip_bytes,
        mime_type: cfg.capture.mime_type.clone(),
        denylist: if cfg.capture.denylist.is_empty() {
            SessionConfig::default().denylist
        } else {
            cfg.capture.denylist.clone()
        },
        ..SessionConfig::default()
    };

    info!(
        "Session defaults: grace {}ms, tick {}ms, min clip {} bytes, mime {}",
        session.grace_delay.as_millis(),
        session.tick_interval.as_millis(),
        session.min_clip_bytes,
        session.mime_type
    );
    info!(
        "Ready; a host embeds this crate with its device, stream, and pipeline implementations"
    );

    Ok(())
}
