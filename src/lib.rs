//! Hand gesture cursor control library.
//!
//! This library turns a live hand-landmark stream into continuous cursor
//! motion and discrete click events, with spoken narration of what sits
//! under the cursor:
//! 1. Hand landmark detection via `ONNX` Runtime (21 normalized keypoints)
//! 2. Coordinate mapping and exponential smoothing of the index-tip target
//! 3. Per-frame finger posture classification into MOVE / CLICK / IDLE
//! 4. X11 cursor and click injection
//! 5. An off-loop narration worker (screen capture + OCR + TTS)
//!
//! # Examples
//!
//! ## Mapping, smoothing and gesture classification
//!
//! ```
//! use hand_gesture_control::{
//!     gesture::Action,
//!     mapping::ScreenMapper,
//!     posture::Posture,
//!     smoothing::CursorSmoother,
//! };
//! use hand_gesture_control::hand_detection::Landmark;
//! use hand_gesture_control::constants::{INDEX_FINGER_DIP, INDEX_FINGER_TIP, NUM_HAND_LANDMARKS};
//!
//! // A hand with only the index finger raised
//! let mut landmarks = vec![Landmark { x: 0.5, y: 0.5, z: 0.0 }; NUM_HAND_LANDMARKS];
//! landmarks[INDEX_FINGER_TIP].y = 0.3;
//! landmarks[INDEX_FINGER_DIP].y = 0.5;
//!
//! let posture = Posture::from_landmarks(&landmarks);
//! assert_eq!(Action::classify(posture), Action::Move);
//!
//! // Map the index tip to screen pixels and smooth it
//! let mapper = ScreenMapper::new(1.0);
//! let mut smoother = CursorSmoother::new(0.5);
//! let raw = mapper.map(0.5, 0.3, 1920, 1080);
//! let (x, y) = smoother.apply(raw);
//! assert_eq!((x, y), (480.0, 162.0));
//! ```
//!
//! ## Running the full application
//!
//! ```no_run
//! use hand_gesture_control::app::{AppConfig, GuiMode, HandGestureApp, VideoSource};
//! use hand_gesture_control::config::Config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig {
//!     video_source: VideoSource::Camera(0),
//!     gui_mode: GuiMode::Camera,
//!     cursor_enabled: true,
//!     narration_enabled: true,
//!     config: Config::default(),
//! };
//!
//! let mut app = HandGestureApp::new(config)?;
//! app.run()?;
//! # Ok(())
//! # }
//! ```

/// Hand landmark detection module (21 normalized keypoints per hand)
pub mod hand_detection;

/// Finger posture classification from landmarks
pub mod posture;

/// Posture-to-action dispatch and injection driving
pub mod gesture;

/// Normalized-to-screen coordinate mapping
pub mod mapping;

/// Exponential smoothing for cursor motion
pub mod smoothing;

/// Cursor and click injection for X11 systems
pub mod cursor_control;

/// Asynchronous narration of what sits under the cursor
pub mod narration;

/// Main application module
pub mod app;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

/// Utility functions
pub mod utils;

pub use error::{Error, Result};
