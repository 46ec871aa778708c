use serde::Deserialize;
use tracing::info;

use crate::capture::AudioClip;
use crate::error::TranscriptionError;

/// One-shot server-side transcription of a captured clip
///
/// Used only when the streaming engine produced no finalized text. A single
/// request/response call; retries are the caller's decision, not this
/// component's.
#[async_trait::async_trait]
pub trait FallbackTranscriber: Send + Sync {
    async fn transcribe(&self, clip: &AudioClip) -> Result<String, TranscriptionError>;
}

/// Response body of the transcription endpoint
#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// HTTP implementation posting the clip as a multipart form
pub struct HttpTranscriber {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTranscriber {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    fn parse_body(body: &str) -> Result<String, TranscriptionError> {
        let resp: TranscriptionResponse = serde_json::from_str(body)
            .map_err(|e| TranscriptionError::InvalidResponse(e.to_string()))?;
        Ok(resp.text)
    }
}

#[async_trait::async_trait]
impl FallbackTranscriber for HttpTranscriber {
    async fn transcribe(&self, clip: &AudioClip) -> Result<String, TranscriptionError> {
        info!(
            "Submitting {} byte clip ({}) for fallback transcription",
            clip.len(),
            clip.mime_type()
        );

        let part = reqwest::multipart::Part::bytes(clip.bytes().to_vec())
            .file_name("utterance")
            .mime_str(clip.mime_type())
            .map_err(TranscriptionError::Request)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let mut request = self.client.post(&self.endpoint).multipart(form);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {key}"));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::Status { status, body });
        }

        let body = response.text().await?;
        Self::parse_body(&body)
    }
}
