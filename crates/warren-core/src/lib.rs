//! # Warren Core
//!
//! Deterministic 2D platformer locomotion core for Warren.
//!
//! This crate implements the player movement state machine — walking,
//! jumping, double jump, bunny-hop speed escalation, and dashing — plus a
//! fixed-offset follow camera, decoupled from any particular engine. The
//! host supplies input samples, collision notifications, and frame timing;
//! the crate supplies the state transitions and velocity/rotation updates.
//!
//! ## Architecture
//!
//! - **Controller**: [`controller::LocomotionController`] owns the state
//!   machine and mutates a [`body::Body`] through an explicit step
//!   interface (`tick_input` / `tick_physics` / `on_collision_enter`).
//! - **Driver**: [`simulation::Simulation`] runs the frame loop with a
//!   fixed-timestep accumulator, standing in for the engine.
//! - **Camera**: [`camera::CameraRig`] snaps to `target + offset` after
//!   movement each frame.
//!
//! Timed actions (the double-jump spin, the dash lifetime) are explicit
//! timers in [`state::LocomotionState`] advanced by the driver, so the whole
//! machine is pure and steppable in tests.
//!
//! ## Usage
//!
//! ```
//! use warren_core::config::{CameraConfig, LocomotionConfig};
//! use warren_core::input::InputSample;
//! use warren_core::simulation::Simulation;
//!
//! let mut sim = Simulation::new(LocomotionConfig::default(), CameraConfig::default())?;
//! sim.frame(&InputSample::axes(1.0, 0.0).with_jump(), 1.0 / 60.0);
//! # Ok::<(), warren_core::config::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod body;
pub mod camera;
pub mod config;
pub mod controller;
pub mod input;
pub mod simulation;
pub mod state;

// Re-exports for convenience
pub use body::{Body, CollisionLayer};
pub use camera::CameraRig;
pub use config::{CameraConfig, ConfigError, LocomotionConfig};
pub use controller::LocomotionController;
pub use input::InputSample;
pub use simulation::{Simulation, FIXED_DT};
pub use state::{LocomotionFlags, LocomotionMode, LocomotionState};

#[cfg(test)]
mod tests;
