use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{RecognizerError, SpeechRecognizer, TranscriptCandidate};
use crate::domain::Language;

const DEFAULT_BASE_URL: &str = "http://www.google.com/speech-api/v2";
const DEFAULT_MAX_ALTERNATIVES: usize = 5;

/// Google web-speech API adapter. The same endpoint serves both recognition
/// modes; only the requested alternative count differs.
pub struct GoogleSpeechRecognizer {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    max_alternatives: usize,
}

impl GoogleSpeechRecognizer {
    pub fn new(api_key: String, base_url: Option<String>, max_alternatives: Option<usize>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            max_alternatives: max_alternatives.unwrap_or(DEFAULT_MAX_ALTERNATIVES),
        }
    }

    async fn recognize(
        &self,
        audio_wav: &[u8],
        language: Language,
        max_alternatives: usize,
    ) -> Result<Vec<TranscriptCandidate>, RecognizerError> {
        let url = format!("{}/recognize", self.base_url.trim_end_matches('/'));

        tracing::debug!(
            bytes = audio_wav.len(),
            language = %language,
            max_alternatives,
            "Sending utterance to speech recognition API"
        );

        let max_alternatives_param = max_alternatives.to_string();
        let response = self
            .client
            .post(&url)
            .query(&[
                ("client", "chromium"),
                ("lang", language.as_tag()),
                ("key", self.api_key.as_str()),
                ("maxAlternatives", max_alternatives_param.as_str()),
            ])
            .header("Content-Type", "audio/wav")
            .body(audio_wav.to_vec())
            .send()
            .await
            .map_err(|e| RecognizerError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognizerError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| RecognizerError::ApiRequestFailed(format!("parse response: {}", e)))?;

        let candidates: Vec<TranscriptCandidate> = result
            .result
            .into_iter()
            .flat_map(|r| r.alternative)
            .map(|a| TranscriptCandidate {
                transcript: a.transcript.trim().to_string(),
                confidence: a.confidence,
            })
            .collect();

        tracing::debug!(candidates = candidates.len(), "Recognition response parsed");

        Ok(candidates)
    }
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    result: Vec<RecognizeResult>,
}

#[derive(Deserialize)]
struct RecognizeResult {
    #[serde(default)]
    alternative: Vec<RecognizeAlternative>,
}

#[derive(Deserialize)]
struct RecognizeAlternative {
    transcript: String,
    #[serde(default)]
    confidence: Option<f32>,
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechRecognizer {
    async fn recognize_best(
        &self,
        audio_wav: &[u8],
        language: Language,
    ) -> Result<String, RecognizerError> {
        let candidates = self.recognize(audio_wav, language, 1).await?;
        match candidates.into_iter().next() {
            Some(c) if !c.transcript.is_empty() => {
                tracing::info!(chars = c.transcript.len(), "Best-guess transcription completed");
                Ok(c.transcript)
            }
            _ => Err(RecognizerError::NoSpeechDetected),
        }
    }

    async fn recognize_candidates(
        &self,
        audio_wav: &[u8],
        language: Language,
    ) -> Result<Vec<TranscriptCandidate>, RecognizerError> {
        self.recognize(audio_wav, language, self.max_alternatives)
            .await
    }
}
