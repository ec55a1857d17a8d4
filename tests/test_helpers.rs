//! Helper functions and fixtures for tests

use hand_gesture_control::constants::{
    INDEX_FINGER_DIP, INDEX_FINGER_TIP, MIDDLE_FINGER_DIP, MIDDLE_FINGER_TIP, NUM_HAND_LANDMARKS,
};
use hand_gesture_control::hand_detection::Landmark;

/// A neutral 21-landmark hand with every point at the image center
#[must_use]
pub fn neutral_hand() -> Vec<Landmark> {
    vec![Landmark { x: 0.5, y: 0.5, z: 0.0 }; NUM_HAND_LANDMARKS]
}

/// Build a hand with the given tip/DIP heights for index and middle fingers
#[must_use]
pub fn hand_with_fingers(index_tip_y: f32, index_dip_y: f32, middle_tip_y: f32, middle_dip_y: f32) -> Vec<Landmark> {
    let mut landmarks = neutral_hand();
    landmarks[INDEX_FINGER_TIP].y = index_tip_y;
    landmarks[INDEX_FINGER_DIP].y = index_dip_y;
    landmarks[MIDDLE_FINGER_TIP].y = middle_tip_y;
    landmarks[MIDDLE_FINGER_DIP].y = middle_dip_y;
    landmarks
}
