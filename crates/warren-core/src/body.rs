//! Kinematic body standing in for the host engine's physics collaborators.
//!
//! The controller needs four things from the engine: a rigidbody (position,
//! velocity), a transform Z rotation, a sprite flip flag, and collision-enter
//! notifications tagged with a layer. [`Body`] bundles the mutable pieces
//! into one struct the controller writes through; the host is expected to
//! mirror it into its real physics/render objects each frame.
//!
//! Collision detection itself stays with the host: it calls
//! [`LocomotionController::on_collision_enter`](crate::controller::LocomotionController::on_collision_enter)
//! with the [`CollisionLayer`] of whatever the body started touching.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layer tag delivered with a collision-enter notification.
///
/// Only [`CollisionLayer::Ground`] ends a jump; every other layer is ignored
/// by the locomotion machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionLayer {
    /// Walkable surface; contact ends a jump immediately.
    Ground,
    /// Decorative scenery; no locomotion effect.
    Scenery,
    /// Damaging volume; handled elsewhere, no locomotion effect.
    Hazard,
}

impl fmt::Display for CollisionLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ground => write!(f, "Ground"),
            Self::Scenery => write!(f, "Scenery"),
            Self::Hazard => write!(f, "Hazard"),
        }
    }
}

/// The player's kinematic body.
///
/// Rotation is the transform's Z angle in degrees; `flip_x` is the sprite
/// renderer's horizontal mirror flag (true when the sprite faces right).
/// The crate only ever sets velocities and snaps positions; actual
/// integration of `position += velocity * dt` belongs to the host's physics
/// step, except for the gravity term the controller applies while airborne.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    /// World position.
    pub position: Vec2,
    /// Linear velocity.
    pub velocity: Vec2,
    /// Transform Z rotation in degrees.
    pub rotation_deg: f32,
    /// Sprite horizontal flip; true when facing right.
    pub flip_x: bool,
}

impl Body {
    /// Creates a body at rest at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a body at rest at `position`.
    #[must_use]
    pub fn at_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Integrates `position += velocity * dt`.
    ///
    /// Provided for harnesses without a real physics engine; hosts with one
    /// should let it integrate instead and mirror the result back.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}
