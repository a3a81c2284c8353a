//! Test module for scenario and property tests.
//!
//! Unit tests live next to the code they cover; this module holds the
//! cross-cutting tests:
//! - **Scenario tests**: the reference locomotion sequences end to end
//! - **Property tests**: proptest checks of the state machine invariants
//! - **Helper functions**: shared setup for driving the controller

mod helpers;

pub use helpers::*;
