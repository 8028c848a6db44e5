use crate::application::services::DEFAULT_ENERGY_THRESHOLD;

use super::environment::Environment;

/// Server-side settings, all env-driven. The pipeline itself takes no
/// configuration beyond what the caller passes per request; these cover the
/// HTTP boundary and the recognition adapter.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub recognizer: RecognizerSettings,
    pub calibration: CalibrationSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct RecognizerSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub max_alternatives: usize,
}

#[derive(Debug, Clone)]
pub struct CalibrationSettings {
    pub base_energy_threshold: f32,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT")
                .unwrap_or_else(|_| "local".to_string())
                .try_into()
                .unwrap_or(Environment::Local),
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            recognizer: RecognizerSettings {
                api_key: std::env::var("SPEECH_API_KEY").unwrap_or_default(),
                base_url: std::env::var("SPEECH_API_BASE_URL").ok(),
                max_alternatives: std::env::var("SPEECH_MAX_ALTERNATIVES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            },
            calibration: CalibrationSettings {
                base_energy_threshold: std::env::var("ENERGY_THRESHOLD")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_ENERGY_THRESHOLD),
            },
        }
    }
}
