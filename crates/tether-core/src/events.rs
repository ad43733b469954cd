//! Events emitted by the engine for audio, VFX and camera feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{OrbitDirection, ReleaseReason};
use crate::types::TetherSide;

/// Discrete triggers for audio/VFX collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TraversalEvent {
    TetherFired { side: TetherSide },
    TetherAttached { side: TetherSide },
    TetherReleased {
        side: TetherSide,
        reason: ReleaseReason,
    },
    DashPerformed {
        /// False when the dash fell back to a vertical dodge.
        horizontal: bool,
    },
    OrbitPerformed { direction: OrbitDirection },
    BoostPerformed {
        /// True when the boost pulled toward an anchor, false when it requested a dash state.
        hooked: bool,
    },
}

/// One-shot calls for the camera collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CameraCue {
    FovBurst { magnitude: f32 },
    DistanceBurst { magnitude: f32 },
}
