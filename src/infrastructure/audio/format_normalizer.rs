use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::domain::AudioFormat;

const CANONICAL_BITS_PER_SAMPLE: u16 = 16;

/// Convert an uploaded clip to the canonical container: 16-bit PCM WAV at
/// the source sample rate, mono or stereo.
///
/// Bytes already declared as WAV pass through unchanged, byte-for-byte, with
/// no validation. Every other tag dispatches to exactly one decode path; a
/// failed specific decoder is never retried through the auto-detecting one.
pub fn normalize(data: &[u8], declared_format: AudioFormat) -> Result<Vec<u8>, FormatError> {
    if declared_format == AudioFormat::Wav {
        return Ok(data.to_vec());
    }

    let mut hint = Hint::new();
    match declared_format {
        AudioFormat::Mp3 => {
            hint.with_extension("mp3");
        }
        AudioFormat::Ogg => {
            hint.with_extension("ogg");
        }
        AudioFormat::Flac => {
            hint.with_extension("flac");
        }
        AudioFormat::M4a => {
            hint.with_extension("m4a");
        }
        AudioFormat::Other => {
            // No hint; let the probe auto-detect the container.
        }
        AudioFormat::Wav => unreachable!("wav passthrough handled above"),
    }

    let decoded = decode_to_pcm(data, hint)?;
    encode_wav(&decoded)
}

struct DecodedPcm {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

fn decode_to_pcm(data: &[u8], hint: Hint) -> Result<DecodedPcm, FormatError> {
    let cursor = Cursor::new(data.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let format_opts = FormatOptions::default();
    let metadata_opts = MetadataOptions::default();
    let decoder_opts = DecoderOptions::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &format_opts, &metadata_opts)
        .map_err(|e| FormatError::DecodeFailed(format!("probe: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| FormatError::DecodeFailed("no audio track found".to_string()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let sample_rate = codec_params
        .sample_rate
        .ok_or_else(|| FormatError::DecodeFailed("unknown sample rate".to_string()))?;
    let source_channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &decoder_opts)
        .map_err(|e| FormatError::DecodeFailed(format!("codec: {}", e)))?;

    // Mono and stereo are kept as-is; anything wider is downmixed to mono.
    let out_channels: usize = if source_channels <= 2 { source_channels } else { 1 };

    let mut all_samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(FormatError::DecodeFailed(format!("packet: {}", e)));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
                continue;
            }
            Err(e) => {
                return Err(FormatError::DecodeFailed(format!("decode: {}", e)));
            }
        };

        let spec = *decoded.spec();
        let num_frames = decoded.frames();
        if num_frames == 0 {
            continue;
        }

        let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        let samples = sample_buf.samples();

        if source_channels == out_channels {
            all_samples.extend_from_slice(samples);
        } else {
            for frame in samples.chunks(source_channels) {
                let mono: f32 = frame.iter().sum::<f32>() / source_channels as f32;
                all_samples.push(mono);
            }
        }
    }

    if all_samples.is_empty() {
        return Err(FormatError::DecodeFailed(
            "no audio samples decoded".to_string(),
        ));
    }

    tracing::debug!(
        samples = all_samples.len(),
        sample_rate,
        channels = out_channels,
        duration_secs = all_samples.len() as f64 / (sample_rate as f64 * out_channels as f64),
        "Audio decoded to PCM"
    );

    Ok(DecodedPcm {
        samples: all_samples,
        sample_rate,
        channels: out_channels as u16,
    })
}

fn encode_wav(pcm: &DecodedPcm) -> Result<Vec<u8>, FormatError> {
    let spec = hound::WavSpec {
        channels: pcm.channels,
        sample_rate: pcm.sample_rate,
        bits_per_sample: CANONICAL_BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|e| FormatError::EncodeFailed(e.to_string()))?;
        for &sample in &pcm.samples {
            let quantized = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer
                .write_sample(quantized)
                .map_err(|e| FormatError::EncodeFailed(e.to_string()))?;
        }
        writer
            .finalize()
            .map_err(|e| FormatError::EncodeFailed(e.to_string()))?;
    }

    Ok(cursor.into_inner())
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("audio decoding failed: {0}")]
    DecodeFailed(String),
    #[error("audio encoding failed: {0}")]
    EncodeFailed(String),
}
