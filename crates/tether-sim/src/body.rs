//! The narrow capability the engine needs from the body it drives.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use tether_core::enums::MovementState;
use tether_core::types::{AimFrame, TetherSide};

/// Everything the engine reads from the body, sampled once per physics step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySample {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Quat,
    pub grounded: bool,
    /// Desired horizontal movement direction; zero when there is no input.
    pub movement_intent: Vec3,
    pub aim: AimFrame,
    /// Tether emission points, indexed by `TetherSide::index()`.
    pub sockets: [Vec3; 2],
}

impl BodySample {
    pub fn socket(&self, side: TetherSide) -> Vec3 {
        self.sockets[side.index()]
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

/// What the engine writes back after a physics step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMotion {
    pub velocity: Vec3,
    pub rotation: Quat,
}

pub trait TraversalBody {
    fn sample(&self) -> BodySample;

    fn apply(&mut self, motion: &BodyMotion);

    /// Fire-and-forget request to the host's movement state machine.
    fn request_movement_state(&mut self, state: MovementState);
}

/// Point-mass body with gravity and a flat floor.
///
/// Stands in for a host physics body in tests and the replay tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinematicBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Quat,
    pub grounded: bool,
    pub movement_intent: Vec3,
    /// Camera look direction (independent of body yaw).
    pub aim_forward: Vec3,
    pub eye_height: f32,
    /// Socket offsets in body space, indexed by side.
    pub socket_offsets: [Vec3; 2],
    pub gravity: f32,
    pub floor_y: f32,
    /// Every state the engine asked for, oldest first.
    pub requested_states: Vec<MovementState>,
}

impl KinematicBody {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            grounded: position.y <= 0.0,
            movement_intent: Vec3::ZERO,
            aim_forward: Vec3::Z,
            eye_height: 1.6,
            socket_offsets: [Vec3::new(0.4, 1.2, 0.0), Vec3::new(-0.4, 1.2, 0.0)],
            gravity: 9.81,
            floor_y: 0.0,
            requested_states: Vec::new(),
        }
    }

    /// Semi-implicit Euler step with floor contact.
    pub fn integrate(&mut self, dt: f32) {
        self.velocity.y -= self.gravity * dt;
        self.position += self.velocity * dt;
        if self.position.y <= self.floor_y {
            self.position.y = self.floor_y;
            if self.velocity.y < 0.0 {
                self.velocity.y = 0.0;
            }
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }

    /// Body yaw in radians (0 = facing +Z).
    pub fn yaw(&self) -> f32 {
        let forward = self.rotation * Vec3::Z;
        forward.x.atan2(forward.z)
    }
}

impl TraversalBody for KinematicBody {
    fn sample(&self) -> BodySample {
        let forward = self.aim_forward.try_normalize().unwrap_or(Vec3::Z);
        let right = forward.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::NEG_X);
        let up = right.cross(forward);
        BodySample {
            position: self.position,
            velocity: self.velocity,
            rotation: self.rotation,
            grounded: self.grounded,
            movement_intent: self.movement_intent,
            aim: AimFrame {
                origin: self.position + Vec3::Y * self.eye_height,
                forward,
                up,
                right,
            },
            sockets: [
                self.position + self.rotation * self.socket_offsets[0],
                self.position + self.rotation * self.socket_offsets[1],
            ],
        }
    }

    fn apply(&mut self, motion: &BodyMotion) {
        self.velocity = motion.velocity;
        self.rotation = motion.rotation;
    }

    fn request_movement_state(&mut self, state: MovementState) {
        self.requested_states.push(state);
    }
}
