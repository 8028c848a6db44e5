use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::Language;

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageEntry>,
}

#[derive(Serialize)]
pub struct LanguageEntry {
    pub tag: String,
    pub name: String,
}

/// The fixed set of locales the recognizer accepts, for client selectors.
pub async fn languages_handler() -> impl IntoResponse {
    let languages = Language::ALL
        .iter()
        .map(|l| LanguageEntry {
            tag: l.as_tag().to_string(),
            name: l.display_name().to_string(),
        })
        .collect();

    (StatusCode::OK, Json(LanguagesResponse { languages }))
}
