use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Liveness only; the remote recognizer is not probed here, since an
/// unreachable recognition API surfaces per request as an `API error`
/// failure rather than making the whole server unhealthy.
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: "parlance".to_string(),
        }),
    )
}
