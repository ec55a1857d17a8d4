//! Coordinate mapping from normalized landmark space to screen pixels.

use crate::constants::DEFAULT_CURSOR_SENSITIVITY;
use crate::utils::safe_cast::f64_to_i32;

/// An absolute screen pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Maps normalized [0,1] landmark coordinates to screen pixel targets.
///
/// The mapper never clamps: with a sensitivity above 1 the result may land
/// past the screen edge. Clamping is the injection boundary's job, so the
/// smoother sees the raw trajectory.
pub struct ScreenMapper {
    sensitivity: f64,
}

impl ScreenMapper {
    /// Create a mapper with the given sensitivity multiplier
    #[must_use]
    pub fn new(sensitivity: f64) -> Self {
        assert!(sensitivity > 0.0, "Sensitivity must be positive");
        Self { sensitivity }
    }

    /// Map a normalized position to screen pixels.
    ///
    /// Screen dimensions are supplied per call; callers must query them
    /// fresh from the injection collaborator rather than caching them.
    #[must_use]
    pub fn map(&self, x: f64, y: f64, screen_width: u16, screen_height: u16) -> ScreenPoint {
        let mapped_x = (x * f64::from(screen_width) * self.sensitivity).round();
        let mapped_y = (y * f64::from(screen_height) * self.sensitivity).round();
        ScreenPoint::new(f64_to_i32(mapped_x).unwrap_or(0), f64_to_i32(mapped_y).unwrap_or(0))
    }
}

impl Default for ScreenMapper {
    fn default() -> Self {
        Self::new(DEFAULT_CURSOR_SENSITIVITY)
    }
}
