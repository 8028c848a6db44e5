use async_trait::async_trait;

use crate::domain::Language;

/// Remote speech-recognition service, reachable in two modes: a single
/// best-guess transcript and a ranked candidate list. Both block on network
/// I/O; the engine never overlaps them.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Request the single best transcript for the utterance payload.
    /// Returns `NoSpeechDetected` when the service understood the audio but
    /// declined to produce a transcript.
    async fn recognize_best(
        &self,
        audio_wav: &[u8],
        language: Language,
    ) -> Result<String, RecognizerError>;

    /// Request the full ranked candidate list. An empty list is a valid
    /// response, not an error.
    async fn recognize_candidates(
        &self,
        audio_wav: &[u8],
        language: Language,
    ) -> Result<Vec<TranscriptCandidate>, RecognizerError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptCandidate {
    pub transcript: String,
    pub confidence: Option<f32>,
}

#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("no speech recognized")]
    NoSpeechDetected,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
