//! Player intent delivered to the engine.
//!
//! Commands are queued and drained at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::enums::OrbitDirection;
use crate::types::TetherSide;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TraversalCommand {
    // --- Tethers ---
    /// Fire a tether at its current aim candidate.
    FireTether { side: TetherSide },
    /// Release a tether (no-op when idle).
    ReleaseTether { side: TetherSide },
    /// Angular separation between the two aim directions, 0..=1.
    SetAimSeparation { value: f32 },

    // --- Maneuvers ---
    /// Start holding (Some) or let go of (None) an orbit direction.
    SetOrbit { direction: Option<OrbitDirection> },
    /// Dash input edge.
    Dash,
    /// Boost button went down.
    BoostPressed,
    /// Boost button went up.
    BoostReleased,
}
