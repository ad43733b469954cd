//! ECS components for the attachment world.
//!
//! Every attached tether owns exactly one `ElasticLink` entity and one
//! `AttachMarker` entity. Releasing the tether despawns both.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use tether_core::types::TetherSide;

/// One-sided elastic distance constraint between the body and an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElasticLink {
    pub side: TetherSide,
    pub anchor: Vec3,
    pub max_length: f32,
    pub stiffness: f32,
    pub damping: f32,
    /// Stretch allowed before the link pushes back.
    pub tolerance: f32,
    pub mass_scale: f32,
}

impl ElasticLink {
    /// Installed slack; the constraint system tunes it from the next step on.
    pub fn slack(side: TetherSide, anchor: Vec3, max_length: f32) -> Self {
        Self {
            side,
            anchor,
            max_length,
            stiffness: 0.0,
            damping: 0.0,
            tolerance: 0.0,
            mass_scale: 1.0,
        }
    }
}

/// Attach-point visual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttachMarker {
    pub side: TetherSide,
    pub position: Vec3,
}
