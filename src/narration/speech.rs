//! Text-to-speech playback.

use crate::{error::AppError, Result};
use std::thread;
use std::time::Duration;
use tts::Tts;

/// How often playback completion is polled
const PLAYBACK_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Speech synthesis adapter over the platform TTS backend
pub struct SpeechEngine {
    tts: Tts,
}

impl SpeechEngine {
    /// Create a speech engine using the platform default backend
    pub fn new() -> Result<Self> {
        let tts = Tts::default()
            .map_err(|e| AppError::Speech(format!("Failed to initialize speech engine: {e}")))?;
        Ok(Self { tts })
    }

    /// Speak an utterance, blocking until playback completes.
    ///
    /// Must only be called off the control loop's thread.
    pub fn say(&mut self, utterance: &str) -> Result<()> {
        self.tts
            .speak(utterance, false)
            .map_err(|e| AppError::Speech(format!("Failed to enqueue utterance: {e}")))?;

        loop {
            match self.tts.is_speaking() {
                Ok(true) => thread::sleep(PLAYBACK_POLL_INTERVAL),
                Ok(false) => break,
                Err(e) => {
                    return Err(AppError::Speech(format!("Failed to query playback state: {e}")));
                }
            }
        }

        Ok(())
    }
}
