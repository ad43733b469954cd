//! Yaw the body toward the anchor while swinging.

use glam::{Quat, Vec3};

use tether_core::config::SwingConfig;
use tether_core::types::{flatten, move_towards_angle, yaw_of};

/// Returns the new body rotation. Skipped when the anchor is (nearly) straight
/// above or below the body.
pub fn run(rotation: Quat, position: Vec3, anchor: Vec3, swing: &SwingConfig, dt: f32) -> Quat {
    let flat = flatten(anchor - position);
    if flat.length() < swing.min_turn_distance {
        return rotation;
    }
    let current = yaw_of(rotation * Vec3::Z);
    let yaw = move_towards_angle(current, yaw_of(flat), swing.turn_rate * dt);
    Quat::from_rotation_y(yaw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_turn_is_rate_limited() {
        let swing = SwingConfig::default();
        // Anchor off to +X: target yaw is +PI/2
        let rotation = run(Quat::IDENTITY, Vec3::ZERO, Vec3::new(10.0, 5.0, 0.0), &swing, 0.02);
        let yaw = yaw_of(rotation * Vec3::Z);
        assert_relative_eq!(yaw, swing.turn_rate * 0.02, epsilon = 1e-4);
    }

    #[test]
    fn test_converges_on_anchor_heading() {
        let swing = SwingConfig::default();
        let mut rotation = Quat::IDENTITY;
        for _ in 0..100 {
            rotation = run(rotation, Vec3::ZERO, Vec3::new(-10.0, 5.0, 0.0), &swing, 0.02);
        }
        assert_relative_eq!(yaw_of(rotation * Vec3::Z), -std::f32::consts::FRAC_PI_2, epsilon = 1e-4);
    }

    #[test]
    fn test_directly_below_anchor_keeps_rotation() {
        let swing = SwingConfig::default();
        let start = Quat::from_rotation_y(0.7);
        let rotation = run(start, Vec3::ZERO, Vec3::new(0.0, 30.0, 0.01), &swing, 0.02);
        assert_eq!(rotation, start);
    }
}
