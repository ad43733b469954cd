//! Traversal snapshot: the complete observable state after each physics step.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{CuePhase, TetherPhase};
use crate::events::{CameraCue, TraversalEvent};
use crate::types::{SimTime, TetherSide};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraversalSnapshot {
    pub time: SimTime,
    /// Indexed by `TetherSide::index()`.
    pub tethers: [TetherView; 2],
    pub aims: [AimView; 2],
    /// True when aim separation is below threshold and both tethers share one target.
    pub prediction_combined: bool,

    pub fuel: f32,
    /// Fuel normalized to [0, 1].
    pub fuel_level: f32,
    pub energy: f32,
    /// Energy normalized to [0, 1].
    pub energy_level: f32,

    pub is_reeling: bool,
    pub properly_hooked: bool,
    pub is_orbiting: bool,
    pub is_boosting: bool,

    pub events: Vec<TraversalEvent>,
    pub camera_cues: Vec<CameraCue>,
}

impl TraversalSnapshot {
    pub fn tether(&self, side: TetherSide) -> &TetherView {
        &self.tethers[side.index()]
    }

    pub fn aim(&self, side: TetherSide) -> &AimView {
        &self.aims[side.index()]
    }
}

/// One tether for display, audio and telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TetherView {
    pub side: TetherSide,
    pub phase: TetherPhase,
    /// Present only while launching or attached.
    pub anchor: Option<Vec3>,
    pub origin: Vec3,
    /// Visible tip position (equals origin when idle).
    pub tip: Vec3,
    pub cooldown_remaining: f32,
    pub durability_remaining: f32,
    /// Durability normalized to [0, 1]; meaningful only while attached.
    pub durability_level: f32,
    /// Last computed reel force magnitude.
    pub reel_force: f32,
    pub cue: CuePhase,
    pub audio: ReelAudio,
}

impl Default for TetherView {
    fn default() -> Self {
        Self {
            side: TetherSide::Left,
            phase: TetherPhase::Idle,
            anchor: None,
            origin: Vec3::ZERO,
            tip: Vec3::ZERO,
            cooldown_remaining: 0.0,
            durability_remaining: 0.0,
            durability_level: 0.0,
            reel_force: 0.0,
            cue: CuePhase::Released,
            audio: ReelAudio::default(),
        }
    }
}

/// Continuous reel sound targets, recomputed every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReelAudio {
    pub pitch: f32,
    pub volume: f32,
}

/// Aim reticle for one tether. World-space; projecting to screen is the UI's job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AimView {
    pub point: Option<Vec3>,
}

impl AimView {
    pub fn visible(&self) -> bool {
        self.point.is_some()
    }
}
