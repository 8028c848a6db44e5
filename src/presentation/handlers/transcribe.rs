use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::SpeechRecognizer;
use crate::domain::{AudioFormat, Language, TranscriptionOutcome};
use crate::infrastructure::audio;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub success: bool,
    pub text: String,
    pub duration_secs: f64,
    pub confidence: String,
    pub language: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            duration_secs: None,
        }
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<R>(
    State(state): State<AppState<R>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    R: SpeechRecognizer + 'static,
{
    let mut audio_bytes: Option<Vec<u8>> = None;
    let mut declared_format = AudioFormat::Other;
    let mut filename = String::from("unknown");
    let mut language = Language::EnUs;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!("Failed to read multipart: {}", e))),
                )
                    .into_response();
            }
        };

        let field_name = field.name().map(str::to_owned);
        match field_name.as_deref() {
            Some("file") => {
                filename = field.file_name().unwrap_or("unknown").to_string();
                declared_format = AudioFormat::from_filename(&filename);
                match field.bytes().await {
                    Ok(data) => audio_bytes = Some(data.to_vec()),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse::new(format!("Failed to read file: {}", e))),
                        )
                            .into_response();
                    }
                }
            }
            Some("language") => {
                let tag = match field.text().await {
                    Ok(t) => t,
                    Err(e) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse::new(format!(
                                "Failed to read language field: {}",
                                e
                            ))),
                        )
                            .into_response();
                    }
                };
                language = match tag.parse() {
                    Ok(l) => l,
                    Err(e) => {
                        tracing::warn!(tag = %tag, "Unsupported language tag");
                        return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e)))
                            .into_response();
                    }
                };
            }
            _ => continue,
        }
    }

    let audio_bytes = match audio_bytes {
        Some(b) => b,
        None => {
            tracing::warn!("Transcription request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("No file uploaded")),
            )
                .into_response();
        }
    };

    tracing::debug!(
        filename = %filename,
        format = declared_format.as_str(),
        bytes = audio_bytes.len(),
        language = %language,
        "Processing audio upload"
    );

    let canonical = match audio::normalize(&audio_bytes, declared_format) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(error = %e, format = declared_format.as_str(), "Audio normalization failed");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::new(format!("Error converting audio: {}", e))),
            )
                .into_response();
        }
    };

    match state
        .transcription_service
        .transcribe(&canonical, language)
        .await
    {
        TranscriptionOutcome::Success {
            text,
            duration_secs,
            confidence,
        } => {
            tracing::info!(
                filename = %filename,
                duration_secs,
                confidence = confidence.as_str(),
                "Transcription complete"
            );
            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    success: true,
                    text,
                    duration_secs,
                    confidence: confidence.as_str().to_string(),
                    language: language.as_tag().to_string(),
                }),
            )
                .into_response()
        }
        TranscriptionOutcome::Failure {
            reason,
            duration_secs,
        } => {
            tracing::warn!(filename = %filename, reason = %reason, "Transcription failed");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: reason,
                    duration_secs,
                }),
            )
                .into_response()
        }
    }
}
