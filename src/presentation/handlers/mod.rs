mod health;
mod languages;
mod transcribe;

pub use health::health_handler;
pub use languages::languages_handler;
pub use transcribe::{ErrorResponse, TranscribeResponse, transcribe_handler};
