//! Locomotion state: mode, overlay flags, and cooperative timers.
//!
//! The reference behavior was expressed as independent booleans
//! (`isJumping`, `isDashing`, `doubleJumped`) with the jumping/dashing
//! exclusivity maintained by convention. Here the primary state is a tagged
//! [`LocomotionMode`] so that jumping-while-dashing is unrepresentable, and
//! the per-jump/per-facing bits live in [`LocomotionFlags`] as overlays.
//!
//! Timed actions (the double-jump spin, the dash lifetime) are plain timer
//! values advanced by the input tick rather than suspended coroutines. This
//! keeps the whole machine steppable and inspectable in tests.

use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary locomotion mode.
///
/// `Jumping` and `Dashing` are mutually exclusive by construction; the
/// double-jump spin is an overlay on `Jumping` (see [`SpinTimer`]), not a
/// mode of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LocomotionMode {
    /// In contact with a walkable surface; walking and idling live here.
    #[default]
    Grounded,
    /// Airborne from a jump; ends on the landing threshold or a ground collision.
    Jumping,
    /// Mid-dash; ends only when the dash timer expires.
    Dashing,
}

impl fmt::Display for LocomotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grounded => write!(f, "Grounded"),
            Self::Jumping => write!(f, "Jumping"),
            Self::Dashing => write!(f, "Dashing"),
        }
    }
}

bitflags! {
    /// Overlay flags carried alongside [`LocomotionMode`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct LocomotionFlags: u8 {
        /// The airborne double jump has been spent for the current jump.
        /// Cleared when the next jump starts from the ground.
        const DOUBLE_JUMPED = 1 << 0;
        /// Last nonzero horizontal input pointed right. Holds its previous
        /// value while horizontal input is zero (no snap-back to neutral).
        const FACING_RIGHT = 1 << 1;
    }
}

/// Timed full-turn body rotation played during a double jump.
///
/// Lerps the body's Z rotation from the angle at spin start to one full turn
/// away (signed by facing), over a fixed duration. Advanced once per input
/// tick; cancelled outright when the body lands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinTimer {
    start_deg: f32,
    target_deg: f32,
    duration: f32,
    elapsed: f32,
}

impl SpinTimer {
    /// Starts a spin from `start_deg`, one full turn in the facing direction.
    ///
    /// Facing right spins negative (clockwise), mirroring the sprite flip.
    #[must_use]
    pub fn new(start_deg: f32, facing_right: bool, duration: f32) -> Self {
        let turn = if facing_right { -360.0 } else { 360.0 };
        Self {
            start_deg,
            target_deg: start_deg + turn,
            duration,
            elapsed: 0.0,
        }
    }

    /// Advances the timer by `dt` seconds and returns the rotation to apply.
    ///
    /// Once the duration has elapsed the target angle is returned exactly
    /// (no overshoot); callers should then drop the timer.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt;
        if self.finished() {
            self.target_deg
        } else {
            let t = self.elapsed / self.duration;
            self.start_deg + (self.target_deg - self.start_deg) * t
        }
    }

    /// True once the full duration has elapsed.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Complete mutable state of one player's locomotion.
///
/// Created once at spawn with zeroed defaults and mutated in place by the
/// controller for the lifetime of the player. Serializable so a harness can
/// snapshot and replay it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocomotionState {
    /// Current primary mode.
    pub mode: LocomotionMode,
    /// Overlay flags (double-jump spent, facing direction).
    pub flags: LocomotionFlags,
    /// Horizontal launch speed; persists across jumps so chained jumps can
    /// escalate it. Magnitude never exceeds the configured cap.
    pub horizontal_speed: f32,
    /// Movement axes from the most recent grounded input sample.
    pub movement: Vec2,
    /// Seconds spent grounded since the last landing; frozen while jumping.
    pub time_since_landing: f32,
    /// Y position captured at jump start; the landing threshold.
    pub launch_y: f32,
    /// Active double-jump spin, if one is playing.
    pub spin: Option<SpinTimer>,
    /// Seconds left on the current dash; meaningful only while `Dashing`.
    pub dash_remaining: f32,
}

impl LocomotionState {
    /// True while the last nonzero horizontal input pointed right.
    #[must_use]
    pub fn facing_right(&self) -> bool {
        self.flags.contains(LocomotionFlags::FACING_RIGHT)
    }

    /// True once the double jump has been spent for the current jump.
    #[must_use]
    pub fn double_jumped(&self) -> bool {
        self.flags.contains(LocomotionFlags::DOUBLE_JUMPED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_grounded_and_idle() {
        let state = LocomotionState::default();
        assert_eq!(state.mode, LocomotionMode::Grounded);
        assert!(state.flags.is_empty());
        assert_eq!(state.horizontal_speed, 0.0);
        assert!(state.spin.is_none());
    }

    #[test]
    fn spin_lerps_toward_full_turn() {
        // Facing left spins positive.
        let mut spin = SpinTimer::new(10.0, false, 0.5);
        let quarter = spin.advance(0.125);
        assert!((quarter - (10.0 + 90.0)).abs() < 0.001);
        assert!(!spin.finished());
    }

    #[test]
    fn spin_facing_right_goes_clockwise() {
        let mut spin = SpinTimer::new(0.0, true, 0.5);
        let half = spin.advance(0.25);
        assert!((half - (-180.0)).abs() < 0.001);
    }

    #[test]
    fn spin_snaps_to_target_on_expiry() {
        let mut spin = SpinTimer::new(25.0, false, 0.5);
        let end = spin.advance(0.75);
        assert!(spin.finished());
        assert!((end - 385.0).abs() < 0.001);
    }

    #[test]
    fn mode_display_names() {
        assert_eq!(LocomotionMode::Grounded.to_string(), "Grounded");
        assert_eq!(LocomotionMode::Jumping.to_string(), "Jumping");
        assert_eq!(LocomotionMode::Dashing.to_string(), "Dashing");
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = LocomotionState {
            mode: LocomotionMode::Jumping,
            flags: LocomotionFlags::FACING_RIGHT,
            horizontal_speed: 6.0,
            launch_y: 1.5,
            spin: Some(SpinTimer::new(25.0, true, 0.5)),
            ..LocomotionState::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: LocomotionState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
