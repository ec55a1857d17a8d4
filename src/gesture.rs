//! Gesture dispatch: posture vector to cursor action.

use crate::constants::INDEX_FINGER_TIP;
use crate::cursor_control::CursorController;
use crate::hand_detection::Landmark;
use crate::mapping::{ScreenMapper, ScreenPoint};
use crate::narration::Narrator;
use crate::posture::Posture;
use crate::smoothing::CursorSmoother;
use crate::utils::safe_cast::f64_to_i32;
use log::warn;

/// Discrete cursor action derived from one frame's posture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move,
    Click,
    Idle,
}

impl Action {
    /// Posture-to-action transition table, re-evaluated every frame.
    ///
    /// Index alone moves, index plus middle clicks, a lowered index is
    /// always idle. There is no persisted state and no default arm.
    #[must_use]
    pub const fn classify(posture: Posture) -> Self {
        match (posture.index_raised, posture.middle_raised) {
            (true, false) => Self::Move,
            (true, true) => Self::Click,
            (false, _) => Self::Idle,
        }
    }

    /// Display label for the debug overlay
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Move => "MOVE",
            Self::Click => "CLICK",
            Self::Idle => "IDLE",
        }
    }
}

/// Drives cursor and click injection from per-frame hand landmarks.
///
/// Owns the mapper, the smoother state and the optional injection and
/// narration collaborators. Injection failures are logged and never fatal.
pub struct GestureDispatcher {
    mapper: ScreenMapper,
    smoother: CursorSmoother,
    controller: Option<CursorController>,
    narrator: Option<Narrator>,
}

impl GestureDispatcher {
    #[must_use]
    pub fn new(
        mapper: ScreenMapper,
        smoother: CursorSmoother,
        controller: Option<CursorController>,
        narrator: Option<Narrator>,
    ) -> Self {
        Self {
            mapper,
            smoother,
            controller,
            narrator,
        }
    }

    /// Process one frame's landmarks and perform the resulting action
    pub fn dispatch(&mut self, landmarks: &[Landmark]) -> Action {
        let posture = Posture::from_landmarks(landmarks);
        let action = Action::classify(posture);
        match action {
            Action::Move => self.handle_move(landmarks),
            Action::Click => self.handle_click(),
            Action::Idle => {}
        }
        action
    }

    /// A frame without a detected hand: idle, nothing mapped or smoothed
    pub fn dispatch_no_hand(&mut self) -> Action {
        Action::Idle
    }

    fn handle_move(&mut self, landmarks: &[Landmark]) {
        let Some(controller) = &self.controller else {
            return;
        };
        let Some(tip) = landmarks.get(INDEX_FINGER_TIP) else {
            return;
        };

        // Screen size is queried fresh each frame; see ScreenMapper::map
        let (width, height) = match controller.screen_size() {
            Ok(size) => size,
            Err(e) => {
                warn!("Failed to query screen size: {e}");
                return;
            }
        };

        let raw = self.mapper.map(f64::from(tip.x), f64::from(tip.y), width, height);
        let (smooth_x, smooth_y) = self.smoother.apply(raw);
        let target = ScreenPoint::new(
            f64_to_i32(smooth_x.round()).unwrap_or(0),
            f64_to_i32(smooth_y.round()).unwrap_or(0),
        );

        if let Err(e) = controller.move_to(target) {
            warn!("Cursor move failed: {e}");
        }

        // Fire and forget; the narrator drops the request when busy
        if let Some(narrator) = &self.narrator {
            narrator.request(target);
        }
    }

    fn handle_click(&mut self) {
        let Some(controller) = &self.controller else {
            return;
        };
        if let Err(e) = controller.click() {
            warn!("Click injection failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn posture(index_raised: bool, middle_raised: bool) -> Posture {
        Posture {
            index_raised,
            middle_raised,
        }
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(Action::classify(posture(true, false)), Action::Move);
        assert_eq!(Action::classify(posture(true, true)), Action::Click);
        assert_eq!(Action::classify(posture(false, false)), Action::Idle);
        assert_eq!(Action::classify(posture(false, true)), Action::Idle);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Action::Move.label(), "MOVE");
        assert_eq!(Action::Click.label(), "CLICK");
        assert_eq!(Action::Idle.label(), "IDLE");
    }
}
