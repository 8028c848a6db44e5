mod audio_source;
mod noise_calibrator;
mod transcription_service;

pub use audio_source::{AudioSource, AudioSourceError};
pub use noise_calibrator::{CALIBRATION_WINDOW_SECS, NoiseProfile, calibrate, rms_energy};
pub use transcription_service::{DEFAULT_ENERGY_THRESHOLD, TranscriptionService};
