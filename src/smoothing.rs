//! Exponential smoothing for cursor motion.

use crate::constants::DEFAULT_SMOOTHING_ALPHA;
use crate::mapping::ScreenPoint;

/// Exponential moving average over successive mapped cursor targets.
///
/// This is the only state the pipeline carries across frames. It is owned
/// by the dispatcher and mutated exclusively on the control loop's thread.
/// State is kept as f64 per axis; rounding to integer pixels happens at the
/// injection boundary, not here.
pub struct CursorSmoother {
    alpha: f64,
    previous: (f64, f64),
}

impl CursorSmoother {
    /// Create a smoother with the given smoothing factor
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        assert!(alpha > 0.0 && alpha <= 1.0, "Alpha must be in (0, 1]");
        Self {
            alpha,
            previous: (0.0, 0.0),
        }
    }

    /// Apply one smoothing step to this frame's raw mapped point.
    ///
    /// Must be called at most once per frame, with that frame's single
    /// authoritative raw point. Pure arithmetic: identical input sequences
    /// from identical initial state reproduce bit for bit.
    pub fn apply(&mut self, raw: ScreenPoint) -> (f64, f64) {
        let smooth_x = self.previous.0 + (f64::from(raw.x) - self.previous.0) * self.alpha;
        let smooth_y = self.previous.1 + (f64::from(raw.y) - self.previous.1) * self.alpha;
        self.previous = (smooth_x, smooth_y);
        (smooth_x, smooth_y)
    }

    /// Reset the retained state to the origin
    pub fn reset(&mut self) {
        self.previous = (0.0, 0.0);
    }

    /// The last smoothed output
    #[must_use]
    pub const fn previous(&self) -> (f64, f64) {
        self.previous
    }
}

impl Default for CursorSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING_ALPHA)
    }
}
