//! Narration coordinator: speaks what sits under the cursor.
//!
//! On MOVE events the dispatcher submits the smoothed cursor position here.
//! A single worker thread resolves a label for the position (screen capture
//! plus OCR) and speaks "You are on {label}". The handoff is a rendezvous
//! channel, so a request is accepted only while the worker is idle and
//! anything submitted while a narration is in flight is dropped. One worker
//! owning the speech engine means utterances never overlap.
//!
//! Failures inside the worker are logged and never reach the control loop.

pub mod capture;
pub mod ocr;
pub mod speech;

use crate::mapping::ScreenPoint;
use crate::Result;
use log::{debug, warn};
use std::sync::mpsc::{self, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};

use capture::ScreenCapture;
use ocr::OcrEngine;
use speech::SpeechEngine;

/// Resolves a short text label for a screen position
pub trait TextResolver: Send {
    fn resolve(&mut self, position: ScreenPoint) -> Result<String>;
}

/// Plays back one utterance, blocking until done
pub trait Speaker: Send {
    fn say(&mut self, utterance: &str) -> Result<()>;
}

impl Speaker for SpeechEngine {
    fn say(&mut self, utterance: &str) -> Result<()> {
        SpeechEngine::say(self, utterance)
    }
}

/// Production resolver: capture a small region around the position and OCR it
pub struct OcrResolver {
    capture: ScreenCapture,
    ocr: OcrEngine,
    capture_size: u16,
}

impl OcrResolver {
    pub fn new(language: &str, capture_size: u16) -> Result<Self> {
        Ok(Self {
            capture: ScreenCapture::new()?,
            ocr: OcrEngine::new(language)?,
            capture_size,
        })
    }
}

impl TextResolver for OcrResolver {
    fn resolve(&mut self, position: ScreenPoint) -> Result<String> {
        let region = self.capture.capture_around(position, self.capture_size)?;
        self.ocr.extract(&region)
    }
}

/// The message consumed by the narration worker
#[derive(Debug, Clone, Copy)]
pub struct NarrationRequest {
    pub position: ScreenPoint,
}

/// Format the spoken utterance for a resolved label.
///
/// Empty or whitespace-only labels produce no utterance.
#[must_use]
pub fn utterance_for(label: &str) -> Option<String> {
    let label = label.trim();
    if label.is_empty() {
        None
    } else {
        Some(format!("You are on {label}"))
    }
}

/// Handle to the narration worker thread
pub struct Narrator {
    sender: Option<SyncSender<NarrationRequest>>,
    worker: Option<JoinHandle<()>>,
}

impl Narrator {
    /// Spawn the worker with the given collaborators.
    pub fn spawn<R, S>(mut resolver: R, mut speaker: S) -> Self
    where
        R: TextResolver + 'static,
        S: Speaker + 'static,
    {
        // Rendezvous channel: try_send succeeds only while the worker is
        // parked in recv, which is exactly the at-most-one-in-flight rule.
        let (sender, receiver) = mpsc::sync_channel::<NarrationRequest>(0);

        let worker = thread::Builder::new()
            .name("narration".to_string())
            .spawn(move || {
                while let Ok(request) = receiver.recv() {
                    match resolver.resolve(request.position) {
                        Ok(label) => {
                            if let Some(utterance) = utterance_for(&label) {
                                debug!("Narrating: {utterance}");
                                if let Err(e) = speaker.say(&utterance) {
                                    warn!("Narration playback failed: {e}");
                                }
                            }
                        }
                        Err(e) => warn!("Narration label resolution failed: {e}"),
                    }
                }
            });

        match worker {
            Ok(handle) => Self {
                sender: Some(sender),
                worker: Some(handle),
            },
            Err(e) => {
                warn!("Failed to spawn narration worker: {e}");
                Self {
                    sender: None,
                    worker: None,
                }
            }
        }
    }

    /// Spawn with the production screen-capture, OCR and TTS collaborators
    pub fn with_defaults(language: &str, capture_size: u16) -> Result<Self> {
        let resolver = OcrResolver::new(language, capture_size)?;
        let speaker = SpeechEngine::new()?;
        Ok(Self::spawn(resolver, speaker))
    }

    /// Submit a narration request for a cursor position.
    ///
    /// Returns false when the request was dropped because a narration is
    /// already in flight.
    pub fn request(&self, position: ScreenPoint) -> bool {
        let Some(sender) = &self.sender else {
            return false;
        };
        match sender.try_send(NarrationRequest { position }) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                debug!("Narration busy, dropping request for ({}, {})", position.x, position.y);
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!("Narration worker is gone");
                false
            }
        }
    }
}

impl Drop for Narrator {
    fn drop(&mut self) {
        // Closing the channel lets the worker finish its current utterance
        // and exit; an accepted narration is never cancelled.
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("Narration worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utterance_format() {
        assert_eq!(utterance_for("Documents"), Some("You are on Documents".to_string()));
    }

    #[test]
    fn test_empty_label_has_no_utterance() {
        assert_eq!(utterance_for(""), None);
        assert_eq!(utterance_for("   \n\t"), None);
    }

    #[test]
    fn test_label_is_trimmed() {
        assert_eq!(utterance_for("  Trash \n"), Some("You are on Trash".to_string()));
    }
}
