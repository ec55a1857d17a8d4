//! Constants used throughout the application

/// Number of landmarks produced per detected hand
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Index finger tip landmark (MediaPipe hand topology)
pub const INDEX_FINGER_TIP: usize = 8;

/// Index finger DIP joint landmark
pub const INDEX_FINGER_DIP: usize = 6;

/// Middle finger tip landmark
pub const MIDDLE_FINGER_TIP: usize = 12;

/// Middle finger DIP joint landmark
pub const MIDDLE_FINGER_DIP: usize = 10;

/// Hand landmark model input resolution (square)
pub const LANDMARK_INPUT_SIZE: i32 = 224;

/// Hand landmark model output values (21 points x 3 coordinates)
pub const LANDMARK_OUTPUT_VALUES: usize = 63;

/// Default minimum confidence for fresh hand detection
pub const DEFAULT_DETECTION_CONFIDENCE: f32 = 0.7;

/// Default minimum confidence while tracking an already-detected hand
pub const DEFAULT_TRACKING_CONFIDENCE: f32 = 0.7;

/// Default cursor sensitivity multiplier
pub const DEFAULT_CURSOR_SENSITIVITY: f64 = 1.0;

/// Default exponential smoothing factor
pub const DEFAULT_SMOOTHING_ALPHA: f64 = 0.5;

/// Default side length of the square capture region used for narration OCR
pub const DEFAULT_CAPTURE_SIZE: u16 = 100;

/// Default frames per second assumption
pub const DEFAULT_FPS: f64 = 30.0;
