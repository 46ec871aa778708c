use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub transcription: TranscriptionConfig,
    pub capture: CaptureConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptionConfig {
    /// Fallback transcription endpoint (one-shot clip upload)
    pub endpoint: String,
    /// Bearer token, if the endpoint requires one
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CaptureConfig {
    pub grace_delay_ms: u64,
    pub tick_interval_ms: u64,
    pub min_clip_bytes: usize,
    pub mime_type: String,
    #[serde(default)]
    pub denylist: Vec<String>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
