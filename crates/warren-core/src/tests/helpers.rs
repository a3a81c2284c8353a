//! Shared setup utilities for driving the controller in tests.

use glam::Vec2;

use crate::body::Body;
use crate::config::LocomotionConfig;
use crate::controller::LocomotionController;
use crate::input::InputSample;

/// Input tick length used throughout the scenario and property tests.
pub const DT: f32 = 1.0 / 60.0;

/// A controller on the default (reference) tuning, plus a fresh body.
pub fn grounded_player() -> (LocomotionController, Body) {
    let controller = LocomotionController::new(LocomotionConfig::default()).unwrap();
    (controller, Body::new())
}

/// Idles for roughly `seconds` of input ticks (rounded up to whole ticks).
pub fn idle_for(controller: &mut LocomotionController, body: &mut Body, seconds: f32) {
    let ticks = (seconds / DT).ceil() as usize;
    for _ in 0..ticks {
        controller.tick_input(&InputSample::idle(), DT, body);
    }
}

/// Idles long enough that the next jump falls outside the bunny-hop window.
pub fn settle(controller: &mut LocomotionController, body: &mut Body) {
    idle_for(controller, body, controller.config().bunny_hop_window + 0.1);
}

/// Presses jump for one tick while holding the given horizontal axis.
pub fn press_jump(controller: &mut LocomotionController, body: &mut Body, horizontal: f32) {
    controller.tick_input(&InputSample::axes(horizontal, 0.0).with_jump(), DT, body);
}

/// Forces an immediate threshold landing: points the body downward at its
/// launch height and runs one physics tick.
pub fn land_now(controller: &mut LocomotionController, body: &mut Body) {
    body.velocity = Vec2::new(body.velocity.x, -1.0);
    body.position.y = controller.state().launch_y;
    controller.tick_physics(DT, body);
}
