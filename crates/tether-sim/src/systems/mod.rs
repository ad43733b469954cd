//! Systems run by the engine once per physics step, in this order:
//! targeting, lifecycle, constraint, economy, maneuver, orientation.
//!
//! Systems own no state. Everything they touch is passed in by the engine.

pub mod constraint;
pub mod economy;
pub mod feedback;
pub mod lifecycle;
pub mod maneuver;
pub mod orientation;
pub mod snapshot;
pub mod targeting;

use tether_core::events::{CameraCue, TraversalEvent};

/// Events and camera cues collected during one physics step.
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    pub events: Vec<TraversalEvent>,
    pub camera_cues: Vec<CameraCue>,
}

impl Outbox {
    pub fn event(&mut self, event: TraversalEvent) {
        self.events.push(event);
    }

    pub fn cue(&mut self, cue: CameraCue) {
        self.camera_cues.push(cue);
    }
}
