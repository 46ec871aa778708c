use super::device::AudioChunk;

/// A finalized audio clip assembled from the chunks of one recording cycle
///
/// The clip only exists to feed the fallback transcription call; it is
/// discarded as soon as a transcript (streaming or fallback) is produced.
#[derive(Debug, Clone, Default)]
pub struct AudioClip {
    data: Vec<u8>,
    mime_type: String,
}

impl AudioClip {
    pub fn new(mime_type: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            mime_type: mime_type.into(),
        }
    }

    /// Append one captured chunk, preserving arrival order
    pub fn push(&mut self, chunk: AudioChunk) {
        self.data.extend_from_slice(&chunk.data);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Clips below the threshold are too short to contain speech
    pub fn meets_minimum(&self, min_bytes: usize) -> bool {
        self.data.len() >= min_bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}
