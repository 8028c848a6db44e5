mod google_speech_recognizer;
mod mock_recognizer;

pub use google_speech_recognizer::GoogleSpeechRecognizer;
pub use mock_recognizer::{MockBehavior, MockSpeechRecognizer};
