use std::sync::Arc;

use crate::application::ports::{RecognizerError, SpeechRecognizer};
use crate::application::services::audio_source::AudioSource;
use crate::application::services::noise_calibrator::{calibrate, rms_energy};
use crate::domain::{ConfidenceTier, Language, TranscriptionOutcome};

/// Ambient energy floor below which the threshold never drops, matching the
/// recognizer's default sensitivity.
pub const DEFAULT_ENERGY_THRESHOLD: f32 = 300.0;

/// Transcription engine: canonical PCM in, structured outcome out.
///
/// Pipeline per request: open the clip, measure duration, calibrate against
/// ambient noise, extract the utterance, attempt primary recognition, and
/// fall back to the ranked-candidate pass when the primary call understood
/// the audio but produced no transcript. Every failure is terminal; nothing
/// is retried.
pub struct TranscriptionService<R>
where
    R: SpeechRecognizer,
{
    recognizer: Arc<R>,
    base_energy_threshold: f32,
}

impl<R> TranscriptionService<R>
where
    R: SpeechRecognizer,
{
    pub fn new(recognizer: Arc<R>, base_energy_threshold: f32) -> Self {
        Self {
            recognizer,
            base_energy_threshold,
        }
    }

    #[tracing::instrument(skip(self, canonical_wav), fields(bytes = canonical_wav.len(), language = %language))]
    pub async fn transcribe(
        &self,
        canonical_wav: &[u8],
        language: Language,
    ) -> TranscriptionOutcome {
        let source = match AudioSource::open(canonical_wav) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "Canonical audio could not be opened");
                return TranscriptionOutcome::Failure {
                    reason: format!("Error: {}", e),
                    duration_secs: None,
                };
            }
        };

        let duration_secs = source.duration_secs();
        tracing::debug!(duration_secs, sample_rate = source.sample_rate(), "Audio source opened");

        let profile = calibrate(
            source.samples(),
            source.sample_rate(),
            source.channels(),
            self.base_energy_threshold,
        );

        let payload = match source.utterance_from(profile.consumed_frames) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "Utterance extraction failed");
                return TranscriptionOutcome::Failure {
                    reason: format!("Error: {}", e),
                    duration_secs: Some(duration_secs),
                };
            }
        };

        let utterance_energy =
            rms_energy(&source.samples()[profile.consumed_frames * source.channels() as usize..]);
        tracing::debug!(
            payload_bytes = payload.len(),
            energy_threshold = profile.energy_threshold,
            utterance_energy,
            speech_likely = utterance_energy >= profile.energy_threshold,
            "Utterance extracted"
        );

        match self.recognizer.recognize_best(&payload, language).await {
            Ok(text) => {
                tracing::info!(chars = text.len(), "Primary recognition succeeded");
                TranscriptionOutcome::Success {
                    text,
                    duration_secs,
                    confidence: ConfidenceTier::High,
                }
            }
            Err(RecognizerError::ApiRequestFailed(detail)) => {
                tracing::error!(error = %detail, "Recognition service unavailable");
                TranscriptionOutcome::Failure {
                    reason: format!("API error: {}", detail),
                    duration_secs: Some(duration_secs),
                }
            }
            Err(RecognizerError::NoSpeechDetected) => {
                tracing::debug!("Primary recognition found no speech, trying ranked candidates");
                self.fallback(&payload, language, duration_secs).await
            }
        }
    }

    /// Ranked-candidate pass. Any failure here, transport fault included, is
    /// collapsed to the fixed not-understood message; the cause is only
    /// logged.
    async fn fallback(
        &self,
        payload: &[u8],
        language: Language,
        duration_secs: f64,
    ) -> TranscriptionOutcome {
        match self.recognizer.recognize_candidates(payload, language).await {
            Ok(candidates) if !candidates.is_empty() => {
                let text = candidates[0].transcript.clone();
                tracing::info!(
                    candidates = candidates.len(),
                    chars = text.len(),
                    "Fallback recognition recovered a low-confidence transcript"
                );
                TranscriptionOutcome::Success {
                    text,
                    duration_secs,
                    confidence: ConfidenceTier::Low,
                }
            }
            Ok(_) => {
                tracing::debug!("Fallback recognition returned no candidates");
                Self::not_understood(duration_secs)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Fallback recognition failed");
                Self::not_understood(duration_secs)
            }
        }
    }

    fn not_understood(duration_secs: f64) -> TranscriptionOutcome {
        TranscriptionOutcome::Failure {
            reason: "Could not understand audio".to_string(),
            duration_secs: Some(duration_secs),
        }
    }
}
