use std::sync::Arc;

use crate::application::ports::SpeechRecognizer;
use crate::application::services::TranscriptionService;

pub struct AppState<R>
where
    R: SpeechRecognizer,
{
    pub transcription_service: Arc<TranscriptionService<R>>,
}

impl<R> Clone for AppState<R>
where
    R: SpeechRecognizer,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
        }
    }
}
