//! Fixed-offset follow camera.
//!
//! Stateless beyond its own position: every post-movement frame the rig
//! snaps to `target + offset`. No interpolation, no smoothing; a missing
//! target is a silent no-op rather than an error.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::CameraConfig;

/// Offset-follow camera rig.
///
/// # Example
///
/// ```
/// use glam::Vec3;
/// use warren_core::camera::CameraRig;
/// use warren_core::config::CameraConfig;
///
/// let mut rig = CameraRig::new(CameraConfig::default());
/// rig.follow(Some(Vec3::new(4.0, 2.0, 0.0)));
/// assert_eq!(rig.position(), Vec3::new(4.0, 2.0, -10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraRig {
    config: CameraConfig,
    position: Vec3,
}

impl CameraRig {
    /// Creates a rig at the origin with the given offset config.
    #[must_use]
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            position: Vec3::ZERO,
        }
    }

    /// Snaps the rig to `target + offset`; `None` leaves it where it is.
    pub fn follow(&mut self, target: Option<Vec3>) {
        if let Some(target) = target {
            self.position = target + self.config.offset;
        }
    }

    /// Current rig position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_applies_offset() {
        let config = CameraConfig {
            offset: Vec3::new(1.0, 2.0, -5.0),
        };
        let mut rig = CameraRig::new(config);

        rig.follow(Some(Vec3::new(10.0, 0.0, 0.0)));
        assert_eq!(rig.position(), Vec3::new(11.0, 2.0, -5.0));
    }

    #[test]
    fn absent_target_is_a_no_op() {
        let mut rig = CameraRig::new(CameraConfig::default());
        rig.follow(Some(Vec3::new(3.0, 3.0, 0.0)));
        let held = rig.position();

        rig.follow(None);
        assert_eq!(rig.position(), held);
    }

    #[test]
    fn tracks_a_moving_target_exactly() {
        let mut rig = CameraRig::new(CameraConfig::default());
        for i in 0..5 {
            let target = Vec3::new(i as f32, 0.5, 0.0);
            rig.follow(Some(target));
            assert_eq!(rig.position(), target + CameraConfig::default().offset);
        }
    }
}
