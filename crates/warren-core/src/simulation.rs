//! Frame-loop driver for the locomotion core.
//!
//! [`Simulation`] plays the role the host engine's loop would: one input
//! tick per rendered frame, zero or more fixed physics ticks depending on
//! how much real time has accumulated, then the camera follow. It owns the
//! body, controller, and camera rig, and integrates body positions itself so
//! tests and headless harnesses need no physics engine.
//!
//! # Timestep Model
//!
//! Render frames carry a variable `dt`; physics runs on a fixed timestep.
//! The accumulator pattern decouples them: a long frame drains into several
//! physics ticks, a short one into none. Within one physics tick the
//! controller updates velocities (and performs the landing check) against
//! the pre-step position, then the position integrates — the same ordering
//! as an engine's fixed-update-then-simulate step.
//!
//! # Example
//!
//! ```
//! use warren_core::config::{CameraConfig, LocomotionConfig};
//! use warren_core::input::InputSample;
//! use warren_core::simulation::Simulation;
//!
//! let mut sim = Simulation::new(LocomotionConfig::default(), CameraConfig::default()).unwrap();
//! for _ in 0..10 {
//!     sim.frame(&InputSample::axes(1.0, 0.0), 1.0 / 60.0);
//! }
//! assert!(sim.body().position.x > 0.0);
//! assert_eq!(sim.frames(), 10);
//! ```

use tracing::trace;

use crate::body::{Body, CollisionLayer};
use crate::camera::CameraRig;
use crate::config::{CameraConfig, ConfigError, LocomotionConfig};
use crate::controller::LocomotionController;
use crate::input::InputSample;

/// Default fixed physics timestep (1/60 second).
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Owns one player's body, controller, and camera, and drives them through
/// the input/physics/camera phases of each frame.
#[derive(Debug, Clone)]
pub struct Simulation {
    body: Body,
    controller: LocomotionController,
    camera: CameraRig,
    fixed_dt: f32,
    accumulator: f32,
    frames: u64,
}

impl Simulation {
    /// Creates a simulation with the default fixed timestep.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either config fails validation.
    pub fn new(
        locomotion: LocomotionConfig,
        camera: CameraConfig,
    ) -> Result<Self, ConfigError> {
        camera.validate()?;
        Ok(Self {
            body: Body::new(),
            controller: LocomotionController::new(locomotion)?,
            camera: CameraRig::new(camera),
            fixed_dt: FIXED_DT,
            accumulator: 0.0,
            frames: 0,
        })
    }

    /// Overrides the fixed physics timestep. Useful for coarse test ticks.
    #[must_use]
    pub fn with_fixed_dt(mut self, fixed_dt: f32) -> Self {
        self.fixed_dt = fixed_dt;
        self
    }

    /// Runs one rendered frame: input tick, accumulated physics ticks, then
    /// the camera follow.
    ///
    /// `dt` is the elapsed real time since the previous frame. A frame may
    /// run zero physics ticks (when `dt` leaves the accumulator short of a
    /// full timestep) or several (after a long frame).
    pub fn frame(&mut self, input: &InputSample, dt: f32) {
        self.controller.tick_input(input, dt, &mut self.body);

        self.accumulator += dt;
        while self.accumulator >= self.fixed_dt {
            self.controller.tick_physics(self.fixed_dt, &mut self.body);
            self.body.integrate(self.fixed_dt);
            self.accumulator -= self.fixed_dt;
        }

        self.camera.follow(Some(self.body.position.extend(0.0)));
        self.frames += 1;
        trace!(
            frame = self.frames,
            mode = %self.controller.state().mode,
            position = ?self.body.position,
            "frame complete"
        );
    }

    /// Forwards a collision-enter notification to the controller.
    pub fn on_collision_enter(&mut self, layer: CollisionLayer) {
        self.controller.on_collision_enter(layer, &mut self.body);
    }

    /// The player's body.
    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable access to the body, for scenario setup.
    #[must_use]
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// The locomotion controller.
    #[must_use]
    pub fn controller(&self) -> &LocomotionController {
        &self.controller
    }

    /// The camera rig.
    #[must_use]
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// The fixed physics timestep in use.
    #[must_use]
    pub fn fixed_dt(&self) -> f32 {
        self.fixed_dt
    }

    /// Number of rendered frames run so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LocomotionMode;
    use glam::Vec2;

    fn sim() -> Simulation {
        Simulation::new(LocomotionConfig::default(), CameraConfig::default()).unwrap()
    }

    #[test]
    fn frame_advances_counter() {
        let mut sim = sim();
        sim.frame(&InputSample::idle(), FIXED_DT);
        sim.frame(&InputSample::idle(), FIXED_DT);
        assert_eq!(sim.frames(), 2);
    }

    #[test]
    fn long_frame_runs_multiple_physics_ticks() {
        let mut sim = sim();
        sim.frame(&InputSample::axes(1.0, 0.0), 2.5 * FIXED_DT);

        // Two full physics ticks drained; half a tick left in the accumulator.
        let expected = 5.0 * 2.0 * FIXED_DT;
        assert!((sim.body().position.x - expected).abs() < 0.0001);
    }

    #[test]
    fn short_frame_runs_no_physics_tick() {
        let mut sim = sim();
        sim.frame(&InputSample::axes(1.0, 0.0), 0.25 * FIXED_DT);
        assert_eq!(sim.body().position, Vec2::ZERO);

        // The remainder carries over and triggers a tick next frame.
        sim.frame(&InputSample::axes(1.0, 0.0), 0.8 * FIXED_DT);
        assert!(sim.body().position.x > 0.0);
    }

    #[test]
    fn camera_follows_after_movement() {
        let mut sim = sim();
        for _ in 0..10 {
            sim.frame(&InputSample::axes(1.0, 0.0), FIXED_DT);
        }
        let expected = sim.body().position.extend(0.0) + CameraConfig::default().offset;
        assert_eq!(sim.camera().position(), expected);
    }

    #[test]
    fn full_jump_arc_returns_to_launch_height() {
        let mut sim = sim();

        // Settle outside the bunny window so the jump launches at walk speed.
        for _ in 0..20 {
            sim.frame(&InputSample::idle(), FIXED_DT);
        }
        sim.frame(&InputSample::axes(1.0, 0.0).with_jump(), FIXED_DT);
        assert_eq!(sim.controller().state().mode, LocomotionMode::Jumping);

        let mut peaked = false;
        for _ in 0..120 {
            sim.frame(&InputSample::axes(1.0, 0.0), FIXED_DT);
            peaked |= sim.body().position.y > 0.5;
            if sim.controller().state().mode == LocomotionMode::Grounded {
                break;
            }
        }

        assert!(peaked, "jump never gained height");
        assert_eq!(sim.controller().state().mode, LocomotionMode::Grounded);
        assert_eq!(sim.body().position.y, 0.0);
        assert_eq!(sim.body().velocity.y, 0.0);
    }

    #[test]
    fn collision_passthrough_ends_jump() {
        let mut sim = sim();
        for _ in 0..20 {
            sim.frame(&InputSample::idle(), FIXED_DT);
        }
        sim.frame(&InputSample::axes(1.0, 0.0).with_jump(), FIXED_DT);

        sim.on_collision_enter(CollisionLayer::Ground);
        assert_eq!(sim.controller().state().mode, LocomotionMode::Grounded);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let bad = LocomotionConfig {
            move_speed: 0.0,
            ..LocomotionConfig::default()
        };
        assert!(Simulation::new(bad, CameraConfig::default()).is_err());
    }
}
