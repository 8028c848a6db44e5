use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use parlance::application::services::TranscriptionService;
use parlance::infrastructure::observability::{TracingConfig, init_tracing};
use parlance::infrastructure::recognition::GoogleSpeechRecognizer;
use parlance::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    let mut tracing_config = TracingConfig::default();
    tracing_config.environment = settings.environment.to_string();
    if settings.environment.is_prod() {
        tracing_config.json_format = true;
    }
    init_tracing(tracing_config, settings.server.port);

    let recognizer = Arc::new(GoogleSpeechRecognizer::new(
        settings.recognizer.api_key.clone(),
        settings.recognizer.base_url.clone(),
        Some(settings.recognizer.max_alternatives),
    ));

    let transcription_service = Arc::new(TranscriptionService::new(
        Arc::clone(&recognizer),
        settings.calibration.base_energy_threshold,
    ));

    let state = AppState {
        transcription_service,
    };

    let router = create_router(state);

    let host: std::net::IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::from((host, settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
