mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{CalibrationSettings, RecognizerSettings, ServerSettings, Settings};
