use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{RecognizerError, SpeechRecognizer, TranscriptCandidate};
use crate::domain::Language;

/// What the scripted recognizer does on each call.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Primary call returns this transcript.
    Recognize(String),
    /// Primary signals no-speech; fallback returns these candidates.
    NoSpeechWithCandidates(Vec<String>),
    /// Primary signals no-speech; fallback also fails or comes back empty.
    NothingRecognized,
    /// Both calls fail at the transport level with this detail.
    Unavailable(String),
    /// Primary signals no-speech; fallback fails at the transport level.
    FallbackUnavailable(String),
}

/// Scripted recognizer for tests, with call counters so tests can assert the
/// fallback is (or is not) invoked.
pub struct MockSpeechRecognizer {
    behavior: MockBehavior,
    best_calls: AtomicUsize,
    candidate_calls: AtomicUsize,
}

impl MockSpeechRecognizer {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            best_calls: AtomicUsize::new(0),
            candidate_calls: AtomicUsize::new(0),
        }
    }

    pub fn best_calls(&self) -> usize {
        self.best_calls.load(Ordering::SeqCst)
    }

    pub fn candidate_calls(&self) -> usize {
        self.candidate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for MockSpeechRecognizer {
    async fn recognize_best(
        &self,
        _audio_wav: &[u8],
        _language: Language,
    ) -> Result<String, RecognizerError> {
        self.best_calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Recognize(text) => Ok(text.clone()),
            MockBehavior::Unavailable(detail) => {
                Err(RecognizerError::ApiRequestFailed(detail.clone()))
            }
            MockBehavior::NoSpeechWithCandidates(_)
            | MockBehavior::NothingRecognized
            | MockBehavior::FallbackUnavailable(_) => Err(RecognizerError::NoSpeechDetected),
        }
    }

    async fn recognize_candidates(
        &self,
        _audio_wav: &[u8],
        _language: Language,
    ) -> Result<Vec<TranscriptCandidate>, RecognizerError> {
        self.candidate_calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::NoSpeechWithCandidates(transcripts) => Ok(transcripts
                .iter()
                .map(|t| TranscriptCandidate {
                    transcript: t.clone(),
                    confidence: None,
                })
                .collect()),
            MockBehavior::Recognize(_) | MockBehavior::NothingRecognized => Ok(Vec::new()),
            MockBehavior::Unavailable(detail) | MockBehavior::FallbackUnavailable(detail) => {
                Err(RecognizerError::ApiRequestFailed(detail.clone()))
            }
        }
    }
}
