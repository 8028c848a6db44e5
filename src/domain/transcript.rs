use super::confidence_tier::ConfidenceTier;

/// Terminal result of one transcription request.
///
/// `duration_secs` is populated whenever the canonical audio decoded
/// successfully, even on failure, so callers can report clip length
/// independent of transcription success.
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptionOutcome {
    Success {
        text: String,
        duration_secs: f64,
        confidence: ConfidenceTier,
    },
    Failure {
        reason: String,
        duration_secs: Option<f64>,
    },
}

impl TranscriptionOutcome {
    pub fn duration_secs(&self) -> Option<f64> {
        match self {
            TranscriptionOutcome::Success { duration_secs, .. } => Some(*duration_secs),
            TranscriptionOutcome::Failure { duration_secs, .. } => *duration_secs,
        }
    }
}
