use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use parlance::application::services::{DEFAULT_ENERGY_THRESHOLD, TranscriptionService};
use parlance::infrastructure::recognition::{MockBehavior, MockSpeechRecognizer};
use parlance::presentation::{AppState, create_router};

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

fn build_wav(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let num_samples = samples.len() as u32;
    let byte_rate = sample_rate * 2;
    let data_size = num_samples * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

fn test_clip() -> Vec<u8> {
    let samples: Vec<i16> = (0..32_000)
        .map(|i| ((i as f64 * 0.1).sin() * 4000.0) as i16)
        .collect();
    build_wav(16_000, &samples)
}

fn multipart_body(filename: &str, file_bytes: &[u8], language: Option<&str>) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: audio/wav\r\n\r\n");
    body.extend_from_slice(file_bytes);
    body.extend_from_slice(b"\r\n");
    if let Some(lang) = language {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"language\"\r\n\r\n");
        body.extend_from_slice(lang.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn app(behavior: MockBehavior) -> axum::Router {
    let recognizer = Arc::new(MockSpeechRecognizer::new(behavior));
    let transcription_service = Arc::new(TranscriptionService::new(
        recognizer,
        DEFAULT_ENERGY_THRESHOLD,
    ));
    create_router(AppState {
        transcription_service,
    })
}

fn transcribe_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/transcribe")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn given_healthy_server_when_getting_health_then_returns_ok() {
    let app = app(MockBehavior::NothingRecognized);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "parlance");
}

#[tokio::test]
async fn given_language_listing_when_getting_languages_then_returns_all_twelve() {
    let app = app(MockBehavior::NothingRecognized);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/languages")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    let languages = json["languages"].as_array().unwrap();
    assert_eq!(languages.len(), 12);
    assert!(languages.iter().any(|l| l["tag"] == "en-US"));
    assert!(languages.iter().any(|l| l["name"] == "Japanese"));
}

#[tokio::test]
async fn given_wav_upload_when_primary_recognition_succeeds_then_returns_high_confidence_json() {
    let app = app(MockBehavior::Recognize("hello world".to_string()));
    let body = multipart_body("clip.wav", &test_clip(), Some("en-US"));

    let response = app.oneshot(transcribe_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["text"], "hello world");
    assert_eq!(json["confidence"], "High");
    assert_eq!(json["language"], "en-US");
    assert!(json["duration_secs"].as_f64().unwrap() > 1.9);
}

#[tokio::test]
async fn given_wav_upload_when_nothing_recognized_then_returns_unprocessable_with_duration() {
    let app = app(MockBehavior::NothingRecognized);
    let body = multipart_body("clip.wav", &test_clip(), Some("en-US"));

    let response = app.oneshot(transcribe_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = json_body(response).await;
    assert_eq!(json["error"], "Could not understand audio");
    assert!(json["duration_secs"].as_f64().is_some());
}

#[tokio::test]
async fn given_upload_without_language_field_when_transcribing_then_defaults_to_en_us() {
    let app = app(MockBehavior::Recognize("default language".to_string()));
    let body = multipart_body("clip.wav", &test_clip(), None);

    let response = app.oneshot(transcribe_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["language"], "en-US");
}

#[tokio::test]
async fn given_unknown_language_tag_when_transcribing_then_returns_bad_request() {
    let app = app(MockBehavior::Recognize("never".to_string()));
    let body = multipart_body("clip.wav", &test_clip(), Some("xx-XX"));

    let response = app.oneshot(transcribe_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_request_without_file_when_transcribing_then_returns_bad_request() {
    let app = app(MockBehavior::Recognize("never".to_string()));
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    let response = app.oneshot(transcribe_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_corrupt_upload_with_mp3_extension_when_transcribing_then_returns_conversion_error() {
    let app = app(MockBehavior::Recognize("never".to_string()));
    let body = multipart_body("clip.mp3", b"not an mp3 stream at all", Some("en-US"));

    let response = app.oneshot(transcribe_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = json_body(response).await;
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .starts_with("Error converting audio:")
    );
}
