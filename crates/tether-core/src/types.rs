//! Fundamental geometric and simulation types.
//!
//! World space is Y-up. A body at yaw 0 faces +Z.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One of the two tethers a body carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TetherSide {
    Left,
    Right,
}

impl TetherSide {
    /// Both sides, in index order.
    pub const ALL: [TetherSide; 2] = [TetherSide::Left, TetherSide::Right];

    /// Slot index (Left = 0, Right = 1).
    pub fn index(self) -> usize {
        match self {
            TetherSide::Left => 0,
            TetherSide::Right => 1,
        }
    }

    /// Lateral sign used when spreading aim directions (Left = -1, Right = +1).
    pub fn sign(self) -> f32 {
        match self {
            TetherSide::Left => -1.0,
            TetherSide::Right => 1.0,
        }
    }
}

/// Simulation time tracking. Advances once per physics step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Physics step number.
    pub tick: u64,
    /// Elapsed simulated seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one physics step of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += f64::from(dt);
    }
}

/// Camera-space aiming frame supplied by the host each step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimFrame {
    pub origin: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub right: Vec3,
}

impl Default for AimFrame {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            forward: Vec3::Z,
            up: Vec3::Y,
            right: Vec3::NEG_X,
        }
    }
}

/// Drop the vertical component.
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Linearly remap `value` from `[in_min, in_max]` to `[out_min, out_max]`, clamping to the output range.
pub fn remap_clamped(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span.abs() <= f32::EPSILON {
        return out_min;
    }
    let t = ((value - in_min) / span).clamp(0.0, 1.0);
    out_min + (out_max - out_min) * t
}

/// Hermite smoothstep of `x` between the two edges. Returns 0..=1.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let span = edge1 - edge0;
    if span.abs() <= f32::EPSILON {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / span).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Yaw angle (radians) of a horizontal direction, 0 = +Z, positive toward +X.
pub fn yaw_of(direction: Vec3) -> f32 {
    direction.x.atan2(direction.z)
}

/// Step `current` toward `target` by at most `max_delta` radians along the shortest arc.
pub fn move_towards_angle(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = wrap_angle(target - current);
    if delta.abs() <= max_delta {
        target
    } else {
        current + max_delta.copysign(delta)
    }
}

/// Wrap an angle into `(-PI, PI]`.
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
