use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::SpeechRecognizer;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, languages_handler, transcribe_handler};
use crate::presentation::state::AppState;

pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: SpeechRecognizer + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/transcribe", post(transcribe_handler::<R>))
        .route("/api/v1/languages", get(languages_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
