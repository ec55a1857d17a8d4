//! Narration coordinator gating and single-slot behavior

use hand_gesture_control::mapping::ScreenPoint;
use hand_gesture_control::narration::{utterance_for, Narrator, Speaker, TextResolver};
use hand_gesture_control::Result;
use std::sync::mpsc::{Receiver, SyncSender};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Resolver that always returns the same label
struct FixedResolver {
    label: String,
}

impl TextResolver for FixedResolver {
    fn resolve(&mut self, _position: ScreenPoint) -> Result<String> {
        Ok(self.label.clone())
    }
}

/// Resolver that blocks until released, simulating slow OCR
struct BlockingResolver {
    release: Receiver<()>,
    label: String,
}

impl TextResolver for BlockingResolver {
    fn resolve(&mut self, _position: ScreenPoint) -> Result<String> {
        let _ = self.release.recv();
        Ok(self.label.clone())
    }
}

/// Resolver that always fails, simulating a broken collaborator
struct FailingResolver;

impl TextResolver for FailingResolver {
    fn resolve(&mut self, _position: ScreenPoint) -> Result<String> {
        Err(hand_gesture_control::Error::Ocr("no display".to_string()))
    }
}

/// Speaker that records every utterance it receives
struct RecordingSpeaker {
    spoken: Arc<Mutex<Vec<String>>>,
}

impl Speaker for RecordingSpeaker {
    fn say(&mut self, utterance: &str) -> Result<()> {
        self.spoken.lock().unwrap().push(utterance.to_string());
        Ok(())
    }
}

fn recording_speaker() -> (RecordingSpeaker, Arc<Mutex<Vec<String>>>) {
    let spoken = Arc::new(Mutex::new(Vec::new()));
    (RecordingSpeaker { spoken: spoken.clone() }, spoken)
}

/// Retry until the worker is idle and accepts the request
fn submit_until_accepted(narrator: &Narrator, position: ScreenPoint) -> bool {
    for _ in 0..200 {
        if narrator.request(position) {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    false
}

#[test]
fn test_nonempty_label_speaks_exactly_once() {
    let (speaker, spoken) = recording_speaker();
    let narrator = Narrator::spawn(
        FixedResolver {
            label: "Documents".to_string(),
        },
        speaker,
    );

    assert!(submit_until_accepted(&narrator, ScreenPoint::new(100, 100)));
    drop(narrator); // joins the worker

    let spoken = spoken.lock().unwrap();
    assert_eq!(spoken.as_slice(), ["You are on Documents"]);
}

#[test]
fn test_empty_label_produces_no_utterance() {
    let (speaker, spoken) = recording_speaker();
    let narrator = Narrator::spawn(
        FixedResolver {
            label: "   \n".to_string(),
        },
        speaker,
    );

    assert!(submit_until_accepted(&narrator, ScreenPoint::new(100, 100)));
    drop(narrator);

    assert!(spoken.lock().unwrap().is_empty());
}

#[test]
fn test_requests_are_dropped_while_worker_is_busy() {
    let (speaker, spoken) = recording_speaker();
    let (release, release_rx): (SyncSender<()>, Receiver<()>) = mpsc::sync_channel(1);
    let narrator = Narrator::spawn(
        BlockingResolver {
            release: release_rx,
            label: "Trash".to_string(),
        },
        speaker,
    );

    // First request is accepted and blocks the worker in resolve()
    assert!(submit_until_accepted(&narrator, ScreenPoint::new(10, 10)));

    // Subsequent requests find no idle worker and are dropped
    assert!(!narrator.request(ScreenPoint::new(20, 20)));
    assert!(!narrator.request(ScreenPoint::new(30, 30)));

    release.send(()).unwrap();
    drop(narrator);

    // Only the accepted request was narrated
    let spoken = spoken.lock().unwrap();
    assert_eq!(spoken.as_slice(), ["You are on Trash"]);
}

#[test]
fn test_resolver_failure_is_contained() {
    let (speaker, spoken) = recording_speaker();
    let narrator = Narrator::spawn(FailingResolver, speaker);

    assert!(submit_until_accepted(&narrator, ScreenPoint::new(100, 100)));
    drop(narrator);

    // The failure was logged inside the worker; nothing was spoken and
    // nothing escaped to the caller
    assert!(spoken.lock().unwrap().is_empty());
}

#[test]
fn test_worker_recovers_after_an_utterance() {
    let (speaker, spoken) = recording_speaker();
    let narrator = Narrator::spawn(
        FixedResolver {
            label: "Desktop".to_string(),
        },
        speaker,
    );

    assert!(submit_until_accepted(&narrator, ScreenPoint::new(1, 1)));
    assert!(submit_until_accepted(&narrator, ScreenPoint::new(2, 2)));
    drop(narrator);

    let spoken = spoken.lock().unwrap();
    assert_eq!(spoken.as_slice(), ["You are on Desktop", "You are on Desktop"]);
}

#[test]
fn test_utterance_formatting() {
    assert_eq!(utterance_for("Firefox"), Some("You are on Firefox".to_string()));
    assert_eq!(utterance_for(" Firefox \n"), Some("You are on Firefox".to_string()));
    assert_eq!(utterance_for(""), None);
    assert_eq!(utterance_for(" \t "), None);
}
