//! The locomotion state machine.
//!
//! [`LocomotionController`] owns the player's [`LocomotionState`] and mutates
//! a [`Body`] through three entry points invoked by the driver:
//!
//! - [`tick_input`](LocomotionController::tick_input): once per rendered
//!   frame. Advances the cooperative timers, then evaluates transitions in
//!   fixed priority order (double jump, walking, jump, dash), then accrues
//!   grounded time.
//! - [`tick_physics`](LocomotionController::tick_physics): once per fixed
//!   timestep. Applies grounded walk velocity, airborne gravity, and the
//!   landing threshold check.
//! - [`on_collision_enter`](LocomotionController::on_collision_enter): on a
//!   physics contact notification. A ground-layer contact ends a jump
//!   immediately, independent of the threshold check.
//!
//! # Invariants
//!
//! - Jumping and dashing never overlap (enforced by [`LocomotionMode`]).
//! - `horizontal_speed` magnitude never exceeds `max_speed`.
//! - The double jump fires at most once per airborne period.
//! - `time_since_landing` is frozen while jumping, so the bunny-hop window
//!   measures grounded time only.

use glam::Vec2;
use tracing::debug;

use crate::body::{Body, CollisionLayer};
use crate::config::{ConfigError, LocomotionConfig};
use crate::input::InputSample;
use crate::state::{LocomotionFlags, LocomotionMode, LocomotionState, SpinTimer};

/// Player movement controller: walking, jump, double jump, bunny-hop, dash.
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use warren_core::body::Body;
/// use warren_core::config::LocomotionConfig;
/// use warren_core::controller::LocomotionController;
/// use warren_core::input::InputSample;
/// use warren_core::state::LocomotionMode;
///
/// let mut controller = LocomotionController::new(LocomotionConfig::default()).unwrap();
/// let mut body = Body::new();
///
/// controller.tick_input(&InputSample::axes(1.0, 0.0).with_jump(), 1.0 / 60.0, &mut body);
/// assert_eq!(controller.state().mode, LocomotionMode::Jumping);
/// assert!(body.velocity.y > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct LocomotionController {
    config: LocomotionConfig,
    state: LocomotionState,
}

impl LocomotionController {
    /// Creates a controller with the given tuning and zeroed spawn state.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the tuning fails validation.
    pub fn new(config: LocomotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: LocomotionState::default(),
        })
    }

    /// Returns the tuning this controller runs with.
    #[must_use]
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Returns the current locomotion state for inspection.
    #[must_use]
    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    // =========================================================================
    // Input tick
    // =========================================================================

    /// Processes one frame of input.
    ///
    /// `dt` is the elapsed real time since the previous input tick. Timers
    /// started this tick begin counting on the next one, matching the
    /// frame-boundary suspension of the reference behavior.
    pub fn tick_input(&mut self, input: &InputSample, dt: f32, body: &mut Body) {
        self.advance_timers(dt, body);

        self.handle_double_jump(input, body);
        self.handle_walking(input, body);
        self.handle_jump(input, body);
        self.handle_dash(input, body);

        // Bunny-hop window measures grounded time only.
        if self.state.mode != LocomotionMode::Jumping {
            self.state.time_since_landing += dt;
        }
    }

    /// Advances the double-jump spin and the dash lifetime by `dt`.
    fn advance_timers(&mut self, dt: f32, body: &mut Body) {
        if let Some(spin) = self.state.spin.as_mut() {
            body.rotation_deg = spin.advance(dt);
            if spin.finished() {
                self.state.spin = None;
            }
        }

        if self.state.mode == LocomotionMode::Dashing {
            self.state.dash_remaining -= dt;
            if self.state.dash_remaining <= 0.0 {
                self.state.dash_remaining = 0.0;
                self.state.mode = LocomotionMode::Grounded;
                body.rotation_deg = 0.0;
                debug!("dash ended");
            }
        }
    }

    /// Airborne second jump: once per jump, re-launches and starts the spin.
    fn handle_double_jump(&mut self, input: &InputSample, body: &mut Body) {
        if self.state.mode != LocomotionMode::Jumping || self.state.double_jumped() || !input.jump
        {
            return;
        }
        self.state.flags.insert(LocomotionFlags::DOUBLE_JUMPED);
        body.velocity = Vec2::new(self.config.move_speed, self.config.jump_force);
        self.state.spin = Some(SpinTimer::new(
            body.rotation_deg,
            self.state.facing_right(),
            self.config.double_jump_spin_duration,
        ));
        debug!(rotation = body.rotation_deg, "double jump");
    }

    /// Samples movement axes and facing. Skipped while jumping, so the axes
    /// are frozen for the duration of a jump.
    fn handle_walking(&mut self, input: &InputSample, body: &mut Body) {
        if self.state.mode == LocomotionMode::Jumping {
            return;
        }
        self.state.movement = input.movement;
        // Facing holds its previous value on zero input.
        if input.movement.x > 0.0 {
            self.state.flags.insert(LocomotionFlags::FACING_RIGHT);
        } else if input.movement.x < 0.0 {
            self.state.flags.remove(LocomotionFlags::FACING_RIGHT);
        }
        body.flip_x = self.state.facing_right();
    }

    /// Grounded jump start: computes the launch speed (bunny-hop escalation
    /// or reset to walk speed), records the landing threshold, and launches.
    fn handle_jump(&mut self, input: &InputSample, body: &mut Body) {
        if self.state.mode != LocomotionMode::Grounded || !input.jump {
            return;
        }
        self.state.flags.remove(LocomotionFlags::DOUBLE_JUMPED);
        self.state.launch_y = body.position.y;

        let chained = self.state.time_since_landing <= self.config.bunny_hop_window;
        self.state.horizontal_speed = if chained {
            (self.state.horizontal_speed * self.config.bunny_hop_multiplier)
                .clamp(-self.config.max_speed, self.config.max_speed)
        } else {
            self.config.move_speed
        };
        // Launch in the direction currently held; zero input keeps the
        // previous jump's sign.
        let speed = self.state.horizontal_speed;
        if (speed > 0.0 && self.state.movement.x < 0.0)
            || (speed < 0.0 && self.state.movement.x > 0.0)
        {
            self.state.horizontal_speed = -speed;
        }

        self.state.time_since_landing = 0.0;
        body.velocity = Vec2::new(self.state.horizontal_speed, self.config.jump_force);
        self.state.mode = LocomotionMode::Jumping;
        body.rotation_deg = if self.state.facing_right() {
            self.config.jump_body_angle
        } else {
            -self.config.jump_body_angle
        };
        debug!(
            speed = self.state.horizontal_speed,
            chained, "jump started"
        );
    }

    /// Grounded dash start: fixed-speed impulse along the held movement
    /// direction. Zero input dashes in place (zero velocity, tilt still
    /// applied for the full duration).
    fn handle_dash(&mut self, input: &InputSample, body: &mut Body) {
        if self.state.mode != LocomotionMode::Grounded || !input.dash {
            return;
        }
        self.state.mode = LocomotionMode::Dashing;
        self.state.dash_remaining = self.config.dash_duration;
        body.velocity = self.state.movement.normalize_or_zero() * self.config.dash_speed;
        body.rotation_deg = if self.state.facing_right() {
            -self.config.dash_angle
        } else {
            self.config.dash_angle
        };
        debug!(velocity = ?body.velocity, "dash started");
    }

    // =========================================================================
    // Physics tick
    // =========================================================================

    /// Applies one fixed physics timestep.
    ///
    /// Grounded: velocity follows the movement axes. Jumping: horizontal
    /// velocity is the launch speed (or zero when no horizontal input was
    /// held), vertical velocity integrates gravity, and the landing threshold
    /// is checked. Dashing: the dash velocity is left for the host to
    /// integrate untouched.
    pub fn tick_physics(&mut self, fixed_dt: f32, body: &mut Body) {
        match self.state.mode {
            LocomotionMode::Grounded => {
                body.velocity = self.state.movement * self.config.move_speed;
            }
            LocomotionMode::Dashing => {}
            LocomotionMode::Jumping => {
                let horizontal = if self.state.movement.x == 0.0 {
                    0.0
                } else {
                    self.state.horizontal_speed
                };
                body.velocity = Vec2::new(
                    horizontal,
                    body.velocity.y + self.config.gravity * fixed_dt,
                );

                // Falling back through the launch height means we landed.
                if body.velocity.y <= 0.0 && body.position.y <= self.state.launch_y {
                    body.velocity.y = 0.0;
                    body.position.y = self.state.launch_y;
                    self.land(body);
                    debug!(y = body.position.y, "landed at threshold");
                }
            }
        }
    }

    // =========================================================================
    // Collision
    // =========================================================================

    /// Reacts to a collision-enter notification from the host's physics.
    ///
    /// A [`CollisionLayer::Ground`] contact ends a jump immediately and
    /// squares the body up, without the position snap of the threshold path.
    /// Other layers are ignored; a dash in progress is unaffected either way.
    pub fn on_collision_enter(&mut self, layer: CollisionLayer, body: &mut Body) {
        if layer != CollisionLayer::Ground {
            return;
        }
        if self.state.mode == LocomotionMode::Jumping {
            self.land(body);
            debug!("landed on contact");
        } else {
            // Ground contact squares the body up even outside a jump.
            self.state.spin = None;
            body.rotation_deg = 0.0;
        }
    }

    /// Common landing bookkeeping: back to grounded, upright, spin cancelled.
    fn land(&mut self, body: &mut Body) {
        self.state.mode = LocomotionMode::Grounded;
        self.state.spin = None;
        body.rotation_deg = 0.0;
    }
}

// =============================================================================
// Tests
// =============================================================================
