/// Declared format of an uploaded audio clip, derived from the filename
/// extension at the system boundary. Anything unrecognized maps to `Other`
/// and is handled by the auto-detecting decode path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Mp3,
    Wav,
    Ogg,
    Flac,
    M4a,
    Other,
}

impl AudioFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "mp3" => AudioFormat::Mp3,
            "wav" => AudioFormat::Wav,
            "ogg" => AudioFormat::Ogg,
            "flac" => AudioFormat::Flac,
            "m4a" => AudioFormat::M4a,
            _ => AudioFormat::Other,
        }
    }

    pub fn from_filename(filename: &str) -> Self {
        match filename.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => AudioFormat::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
            AudioFormat::Ogg => "ogg",
            AudioFormat::Flac => "flac",
            AudioFormat::M4a => "m4a",
            AudioFormat::Other => "other",
        }
    }
}
