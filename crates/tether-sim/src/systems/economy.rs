//! Resource economy post-pass.
//!
//! Runs after the constraint solver: the global fuel sweep first, then energy
//! regeneration. Kept apart from the per-tether lifecycle so the transition
//! table in `tether_rules` stays pure.

use hecs::World;

use tether_core::enums::ReleaseReason;
use tether_rules::pools::{EnergyPool, ResourcePool};

use crate::slot::TetherSlot;
use crate::systems::lifecycle::release_slot;
use crate::systems::Outbox;

/// Force-release every non-idle tether once fuel can no longer fund reeling.
pub fn sweep(
    slots: &mut [TetherSlot; 2],
    world: &mut World,
    fuel: &ResourcePool,
    unfunded: bool,
    cooldown: f32,
    outbox: &mut Outbox,
) {
    if !fuel.is_empty() && !unfunded {
        return;
    }
    for slot in slots.iter_mut() {
        if slot.tether.is_idle() {
            continue;
        }
        release_slot(slot, world, ReleaseReason::FuelExhausted, cooldown, outbox);
    }
}

pub fn regenerate(energy: &mut EnergyPool, dt: f32, grounded: bool) {
    energy.regenerate(dt, grounded);
}
