mod audio_format;
mod confidence_tier;
mod language;
mod transcript;

pub use audio_format::AudioFormat;
pub use confidence_tier::ConfidenceTier;
pub use language::Language;
pub use transcript::TranscriptionOutcome;
