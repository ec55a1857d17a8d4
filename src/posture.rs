//! Finger posture classification from hand landmarks.
//!
//! A finger counts as raised when its tip sits above its own DIP joint in
//! image space (image y decreases upward). Comparing two joints of the same
//! finger makes the test insensitive to hand size and camera distance. The
//! classification is purely frame-local; no state is carried.

use crate::constants::{INDEX_FINGER_DIP, INDEX_FINGER_TIP, MIDDLE_FINGER_DIP, MIDDLE_FINGER_TIP};
use crate::hand_detection::Landmark;

/// (tip, dip) landmark index pair identifying one finger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerJoints {
    pub tip: usize,
    pub dip: usize,
}

/// Index finger joint pair
pub const INDEX_FINGER: FingerJoints = FingerJoints {
    tip: INDEX_FINGER_TIP,
    dip: INDEX_FINGER_DIP,
};

/// Middle finger joint pair
pub const MIDDLE_FINGER: FingerJoints = FingerJoints {
    tip: MIDDLE_FINGER_TIP,
    dip: MIDDLE_FINGER_DIP,
};

/// Whether the given finger is raised this frame.
///
/// Strict inequality: a tip level with its DIP joint is not raised.
#[must_use]
pub fn is_finger_raised(landmarks: &[Landmark], finger: FingerJoints) -> bool {
    match (landmarks.get(finger.tip), landmarks.get(finger.dip)) {
        (Some(tip), Some(dip)) => tip.y < dip.y,
        _ => false,
    }
}

/// Frame-local per-finger raised flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Posture {
    pub index_raised: bool,
    pub middle_raised: bool,
}

impl Posture {
    /// Classify the reference finger vocabulary for one frame's landmarks
    #[must_use]
    pub fn from_landmarks(landmarks: &[Landmark]) -> Self {
        Self {
            index_raised: is_finger_raised(landmarks, INDEX_FINGER),
            middle_raised: is_finger_raised(landmarks, MIDDLE_FINGER),
        }
    }
}
