//! Snapshot system: assembles a `TraversalSnapshot` from engine state.
//!
//! Read-only; never modifies the tethers or pools.

use tether_core::state::{AimView, ReelAudio, TetherView, TraversalSnapshot};
use tether_core::types::SimTime;
use tether_rules::pools::{EnergyPool, ResourcePool};

use crate::slot::TetherSlot;
use crate::systems::targeting::AimCandidates;
use crate::systems::Outbox;

/// Derived traversal flags for this step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepFlags {
    pub reeling: bool,
    pub orbiting: bool,
    pub boosting: bool,
}

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    time: SimTime,
    slots: &[TetherSlot; 2],
    aims: &AimCandidates,
    fuel: &ResourcePool,
    energy: &EnergyPool,
    durability_max: f32,
    audio: &[ReelAudio; 2],
    flags: StepFlags,
    outbox: Outbox,
) -> TraversalSnapshot {
    TraversalSnapshot {
        time,
        tethers: [
            build_tether(&slots[0], durability_max, audio[0]),
            build_tether(&slots[1], durability_max, audio[1]),
        ],
        aims: aims.points.map(|point| AimView { point }),
        prediction_combined: aims.combined,
        fuel: fuel.value(),
        fuel_level: fuel.level(),
        energy: energy.value(),
        energy_level: energy.level(),
        is_reeling: flags.reeling,
        properly_hooked: flags.reeling,
        is_orbiting: flags.orbiting,
        is_boosting: flags.boosting,
        events: outbox.events,
        camera_cues: outbox.camera_cues,
    }
}

fn build_tether(slot: &TetherSlot, durability_max: f32, audio: ReelAudio) -> TetherView {
    let tether = &slot.tether;
    let durability = tether.durability_remaining();
    TetherView {
        side: tether.side,
        phase: tether.phase(),
        anchor: tether.anchor(),
        origin: tether.origin,
        tip: tether.tip,
        cooldown_remaining: tether.cooldown_remaining,
        durability_remaining: durability,
        durability_level: if durability_max > 0.0 {
            (durability / durability_max).clamp(0.0, 1.0)
        } else {
            0.0
        },
        reel_force: tether.reel_force_current,
        cue: tether.cue,
        audio,
    }
}
