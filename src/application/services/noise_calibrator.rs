/// Seconds of leading audio sampled to estimate background noise. Clamped to
/// the clip length for shorter clips.
pub const CALIBRATION_WINDOW_SECS: f64 = 1.0;

/// Frame length for RMS energy measurement.
const CHUNK_SECS: f64 = 0.1;

/// Ratio applied to the measured ambient energy to get the speech threshold.
const DYNAMIC_ENERGY_RATIO: f32 = 1.5;

/// Result of ambient-noise calibration over the leading window of a clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseProfile {
    /// Energy level above which a frame is considered to contain speech.
    pub energy_threshold: f32,
    /// Frames consumed by calibration; utterance extraction starts here.
    pub consumed_frames: usize,
    /// Actual window analyzed, in seconds (`min(1.0, clip length)`).
    pub window_secs: f64,
}

/// Estimate background noise energy from the leading `min(1.0, D)` seconds
/// of interleaved PCM and derive the sensitivity threshold for speech
/// extraction. The window never reads past the end of the clip.
pub fn calibrate(
    samples: &[i16],
    sample_rate: u32,
    channels: u16,
    base_energy_threshold: f32,
) -> NoiseProfile {
    let total_frames = samples.len() / channels.max(1) as usize;
    let clip_secs = total_frames as f64 / sample_rate as f64;
    let window_secs = CALIBRATION_WINDOW_SECS.min(clip_secs);
    let window_frames = ((window_secs * sample_rate as f64) as usize).min(total_frames);

    let chunk_frames = ((CHUNK_SECS * sample_rate as f64) as usize).max(1);
    let window = &samples[..window_frames * channels as usize];

    let mut ambient_energy = 0.0f32;
    let mut chunks = 0usize;
    for chunk in window.chunks(chunk_frames * channels as usize) {
        ambient_energy += rms_energy(chunk);
        chunks += 1;
    }
    if chunks > 0 {
        ambient_energy /= chunks as f32;
    }

    let energy_threshold = base_energy_threshold.max(ambient_energy * DYNAMIC_ENERGY_RATIO);

    tracing::debug!(
        window_secs,
        ambient_energy,
        energy_threshold,
        "Ambient noise calibration complete"
    );

    NoiseProfile {
        energy_threshold,
        consumed_frames: window_frames,
        window_secs,
    }
}

/// RMS energy of one interleaved frame chunk, in raw 16-bit sample units.
pub fn rms_energy(samples: &[i16]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum_sq / samples.len() as f64).sqrt() as f32
}
