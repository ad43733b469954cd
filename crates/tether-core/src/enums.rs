//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Coarse tether lifecycle phase, as reported to collaborators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TetherPhase {
    #[default]
    Idle,
    /// Tip in flight toward the anchor.
    Launching,
    /// Fixed to the anchor; constraint active, durability counting down.
    Attached,
}

/// Sound/visual phase marker carried per tether.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CuePhase {
    Launching,
    Attached,
    #[default]
    Released,
}

/// Which reel-in force applies this step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReelTier {
    #[default]
    Normal,
    /// Boost input held: resource-boosted reel, passive constraint goes slack.
    Boosted,
    /// Inside the post-dash window.
    Dash,
}

/// Why a tether went back to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseReason {
    /// Explicit player release.
    Input,
    /// Durability ran out while attached.
    DurabilityExpired,
    /// The fuel pool could not fund another reel step.
    FuelExhausted,
    /// The live origin-to-anchor distance exceeded max range mid-flight.
    RangeExceeded,
}

/// Directional intent for the orbit maneuver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitDirection {
    Left,
    Right,
    Up,
    Down,
}

/// States of the host's movement state machine the engine may request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementState {
    Ground,
    #[default]
    Air,
    Dash,
    Slide,
}
