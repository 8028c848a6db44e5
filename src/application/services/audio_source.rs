use std::io::Cursor;

/// Engine-private view of one canonical PCM WAV clip.
///
/// Materializes the request bytes into memory so the engine gets
/// random-access and duration-query semantics without touching disk; the
/// buffer is dropped with the source on every exit path.
pub struct AudioSource {
    samples: Vec<i16>,
    sample_rate: u32,
    channels: u16,
}

impl AudioSource {
    pub fn open(wav_bytes: &[u8]) -> Result<Self, AudioSourceError> {
        let mut reader = hound::WavReader::new(Cursor::new(wav_bytes))
            .map_err(|e| AudioSourceError::Unreadable(e.to_string()))?;

        let spec = reader.spec();
        if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
            return Err(AudioSourceError::Unreadable(format!(
                "expected 16-bit PCM, got {}-bit {:?}",
                spec.bits_per_sample, spec.sample_format
            )));
        }
        // Declared-WAV uploads reach this point unvalidated; a zero rate or
        // channel count would make duration meaningless and break re-encoding.
        if spec.sample_rate == 0 || spec.channels == 0 {
            return Err(AudioSourceError::Unreadable(format!(
                "invalid wav header: {} Hz, {} channels",
                spec.sample_rate, spec.channels
            )));
        }

        let samples: Vec<i16> = reader
            .samples::<i16>()
            .collect::<Result<_, _>>()
            .map_err(|e| AudioSourceError::Unreadable(e.to_string()))?;

        Ok(Self {
            samples,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Interleaved samples across all channels.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn duration_secs(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Re-encode everything from `frame_offset` to end of stream as canonical
    /// WAV bytes — the utterance payload submitted for recognition. An offset
    /// at or past the end yields a valid empty-data clip.
    pub fn utterance_from(&self, frame_offset: usize) -> Result<Vec<u8>, AudioSourceError> {
        let start = (frame_offset * self.channels as usize).min(self.samples.len());
        let spec = hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec)
                .map_err(|e| AudioSourceError::Encode(e.to_string()))?;
            for &sample in &self.samples[start..] {
                writer
                    .write_sample(sample)
                    .map_err(|e| AudioSourceError::Encode(e.to_string()))?;
            }
            writer
                .finalize()
                .map_err(|e| AudioSourceError::Encode(e.to_string()))?;
        }

        Ok(cursor.into_inner())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AudioSourceError {
    #[error("unreadable canonical audio: {0}")]
    Unreadable(String),
    #[error("utterance encoding failed: {0}")]
    Encode(String),
}
