//! Sampled player input for one tick.
//!
//! The crate does not talk to input devices. The host samples its own input
//! system once per rendered frame and hands the controller an [`InputSample`]:
//! raw movement axes plus edge-triggered jump and dash flags ("pressed this
//! frame", not "held").

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One tick's worth of player input.
///
/// Axes are raw values in `[-1, 1]` (clamped on construction); `jump` and
/// `dash` are key-down edges, expected to be true for exactly the tick the
/// key was pressed.
///
/// # Example
///
/// ```
/// use warren_core::input::InputSample;
///
/// let input = InputSample::axes(1.0, 0.0).with_jump();
/// assert!(input.jump);
/// assert!(!input.dash);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputSample {
    /// Raw horizontal/vertical movement axes in `[-1, 1]`.
    pub movement: Vec2,
    /// Jump key pressed this tick (edge, not level).
    pub jump: bool,
    /// Dash key pressed this tick (edge, not level).
    pub dash: bool,
}

impl InputSample {
    /// A sample with no movement and no triggers.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Creates a sample from raw axis values, clamping each to `[-1, 1]`.
    ///
    /// Non-finite axis values are treated as zero rather than poisoning the
    /// state machine.
    #[must_use]
    pub fn axes(horizontal: f32, vertical: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        Self {
            movement: Vec2::new(sanitize(horizontal), sanitize(vertical)),
            jump: false,
            dash: false,
        }
    }

    /// Returns this sample with the jump trigger set.
    #[must_use]
    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }

    /// Returns this sample with the dash trigger set.
    #[must_use]
    pub fn with_dash(mut self) -> Self {
        self.dash = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_has_no_triggers() {
        let input = InputSample::idle();
        assert_eq!(input.movement, Vec2::ZERO);
        assert!(!input.jump);
        assert!(!input.dash);
    }

    #[test]
    fn axes_are_clamped() {
        let input = InputSample::axes(3.0, -2.0);
        assert_eq!(input.movement, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn non_finite_axes_become_zero() {
        let input = InputSample::axes(f32::NAN, f32::NEG_INFINITY);
        assert_eq!(input.movement, Vec2::ZERO);
    }

    #[test]
    fn builders_set_triggers() {
        let input = InputSample::axes(0.5, 0.0).with_jump().with_dash();
        assert!(input.jump);
        assert!(input.dash);
        assert!((input.movement.x - 0.5).abs() < f32::EPSILON);
    }
}
