//! Tuning parameters for locomotion and camera behavior.
//!
//! All gameplay-facing constants live here so they can be loaded from data
//! files (serde) and validated once at startup. Runtime stepping never
//! revalidates: a [`LocomotionConfig`] that passed [`LocomotionConfig::validate`]
//! is good for the lifetime of the controller.
//!
//! # Example
//!
//! ```
//! use warren_core::config::LocomotionConfig;
//!
//! let config = LocomotionConfig::default();
//! assert!(config.validate().is_ok());
//! assert!((config.bunny_hop_window - 0.2).abs() < f32::EPSILON);
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure for a tuning parameter.
///
/// Produced by [`LocomotionConfig::validate`] and [`CameraConfig::validate`].
/// These are the only fallible operations in the crate; per-tick stepping is
/// infallible by design.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A parameter is NaN or infinite.
    #[error("parameter `{0}` must be finite")]
    NonFinite(&'static str),

    /// A parameter that must be strictly positive is zero or negative.
    #[error("parameter `{0}` must be positive")]
    NonPositive(&'static str),

    /// A parameter that must be non-negative is negative.
    #[error("parameter `{0}` must not be negative")]
    Negative(&'static str),

    /// `max_speed` is below `move_speed`, which would make every jump launch
    /// faster than the cap allows.
    #[error("max_speed ({max_speed}) must be at least move_speed ({move_speed})")]
    MaxSpeedBelowWalkSpeed {
        /// The configured horizontal speed cap.
        max_speed: f32,
        /// The configured base walk speed.
        move_speed: f32,
    },

    /// `bunny_hop_multiplier` below 1.0 would make chained jumps decelerate,
    /// violating the escalation invariant.
    #[error("bunny_hop_multiplier ({0}) must be at least 1.0")]
    MultiplierBelowOne(f32),
}

/// Tuning parameters for the locomotion state machine.
///
/// Defaults match the reference tuning: walk at 5 units/s, jumps launch with
/// a vertical force of 5, chained jumps within 0.2 s escalate horizontal
/// speed by 1.2x up to a cap of 15.
///
/// Angles are in degrees, durations in seconds, speeds in world units per
/// second. `gravity` is a signed acceleration (negative pulls down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Base walk speed, also the horizontal speed a non-chained jump launches with.
    pub move_speed: f32,
    /// Vertical launch velocity for jumps and double jumps.
    pub jump_force: f32,
    /// Gravitational acceleration applied while airborne (negative is down).
    pub gravity: f32,
    /// Horizontal speed multiplier for a jump chained within the bunny-hop window.
    pub bunny_hop_multiplier: f32,
    /// Maximum grounded time (seconds) between landing and the next jump for
    /// the bunny-hop bonus to apply.
    pub bunny_hop_window: f32,
    /// Symmetric cap on horizontal launch speed magnitude.
    pub max_speed: f32,
    /// Body tilt (degrees) applied at jump start, signed by facing.
    pub jump_body_angle: f32,
    /// Duration (seconds) of the full-turn spin played on a double jump.
    pub double_jump_spin_duration: f32,
    /// Speed of the dash impulse.
    pub dash_speed: f32,
    /// Dash lifetime (seconds); the dash timer always runs to completion.
    pub dash_duration: f32,
    /// Body tilt (degrees) held for the duration of a dash, signed by facing.
    pub dash_angle: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_force: 5.0,
            gravity: -9.81,
            bunny_hop_multiplier: 1.2,
            bunny_hop_window: 0.2,
            max_speed: 15.0,
            jump_body_angle: 25.0,
            double_jump_spin_duration: 0.5,
            dash_speed: 20.0,
            dash_duration: 0.2,
            dash_angle: 45.0,
        }
    }
}

impl LocomotionConfig {
    /// Checks the configuration for values the state machine cannot run with.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending parameter:
    /// non-finite values, non-positive speeds/durations, a negative bunny-hop
    /// window, a cap below the walk speed, or a multiplier below 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite_checks = [
            (self.move_speed, "move_speed"),
            (self.jump_force, "jump_force"),
            (self.gravity, "gravity"),
            (self.bunny_hop_multiplier, "bunny_hop_multiplier"),
            (self.bunny_hop_window, "bunny_hop_window"),
            (self.max_speed, "max_speed"),
            (self.jump_body_angle, "jump_body_angle"),
            (self.double_jump_spin_duration, "double_jump_spin_duration"),
            (self.dash_speed, "dash_speed"),
            (self.dash_duration, "dash_duration"),
            (self.dash_angle, "dash_angle"),
        ];
        for (value, name) in finite_checks {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }

        let positive_checks = [
            (self.move_speed, "move_speed"),
            (self.jump_force, "jump_force"),
            (self.max_speed, "max_speed"),
            (self.double_jump_spin_duration, "double_jump_spin_duration"),
            (self.dash_speed, "dash_speed"),
            (self.dash_duration, "dash_duration"),
        ];
        for (value, name) in positive_checks {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive(name));
            }
        }

        if self.bunny_hop_window < 0.0 {
            return Err(ConfigError::Negative("bunny_hop_window"));
        }
        if self.max_speed < self.move_speed {
            return Err(ConfigError::MaxSpeedBelowWalkSpeed {
                max_speed: self.max_speed,
                move_speed: self.move_speed,
            });
        }
        if self.bunny_hop_multiplier < 1.0 {
            return Err(ConfigError::MultiplierBelowOne(self.bunny_hop_multiplier));
        }

        Ok(())
    }
}

/// Tuning for the offset-follow camera rig.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Fixed offset added to the target position every frame.
    pub offset: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            // Pulled back along -Z so a 2D scene stays in front of the camera.
            offset: Vec3::new(0.0, 0.0, -10.0),
        }
    }
}

impl CameraConfig {
    /// Checks that the offset is finite.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFinite`] if any offset component is NaN or
    /// infinite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.offset.is_finite() {
            return Err(ConfigError::NonFinite("offset"));
        }
        Ok(())
    }
}
