//! Tether lifecycle system.
//!
//! Drives the pure state machine in `tether_rules::tether` and owns its side
//! effects: spawning the `ElasticLink`/`AttachMarker` pair on attach,
//! despawning it on every release path, and reporting events.

use hecs::World;

use tether_core::config::TraversalConfig;
use tether_core::enums::ReleaseReason;
use tether_core::events::{CameraCue, TraversalEvent};
use tether_core::types::TetherSide;
use tether_rules::pools::ResourcePool;
use tether_rules::tether::{self, FireContext, FireOutcome, StepContext, Transition};

use crate::body::BodySample;
use crate::components::{AttachMarker, ElasticLink};
use crate::input::InputLatch;
use crate::slot::TetherSlot;
use crate::systems::targeting::AimCandidates;
use crate::systems::Outbox;

/// Release inputs, then fire inputs, then one lifecycle step per tether.
#[allow(clippy::too_many_arguments)]
pub fn run(
    slots: &mut [TetherSlot; 2],
    world: &mut World,
    input: &mut InputLatch,
    candidates: &AimCandidates,
    sample: &BodySample,
    fuel: &ResourcePool,
    config: &TraversalConfig,
    dt: f32,
    outbox: &mut Outbox,
) {
    for side in TetherSide::ALL {
        if input.take_release(side) {
            release_slot(
                &mut slots[side.index()],
                world,
                ReleaseReason::Input,
                config.tether.cooldown,
                outbox,
            );
        }
    }

    for side in TetherSide::ALL {
        if !input.take_fire(side) {
            continue;
        }
        let slot = &mut slots[side.index()];
        slot.tether.origin = sample.socket(side);
        let outcome = tether::fire(
            &mut slot.tether,
            &FireContext {
                candidate: candidates.get(side),
                fuel: fuel.value(),
                eject_speed: config.tether.eject_speed,
                cooldown: config.tether.cooldown,
            },
        );
        match outcome {
            FireOutcome::Fired => {
                tracing::debug!(?side, anchor = ?slot.tether.anchor(), "tether fired");
                outbox.event(TraversalEvent::TetherFired { side });
                outbox.cue(CameraCue::FovBurst {
                    magnitude: config.feedback.hook_fov_burst,
                });
                outbox.cue(CameraCue::DistanceBurst {
                    magnitude: config.feedback.hook_distance_burst,
                });
            }
            rejected => tracing::trace!(?side, ?rejected, "fire ignored"),
        }
    }

    for side in TetherSide::ALL {
        let slot = &mut slots[side.index()];
        let transition = tether::step(
            &mut slot.tether,
            &StepContext {
                origin: sample.socket(side),
                body_position: sample.position,
                dt,
                max_range: config.targeting.max_range,
                durability_max: config.tether.durability_max,
                max_length_factor: config.swing.max_length_factor,
                cooldown: config.tether.cooldown,
            },
        );
        match transition {
            Transition::None => {}
            Transition::Attached => attach_slot(slot, world, outbox),
            Transition::Released(reason) => finish_release(slot, world, reason, outbox),
        }
    }
}

/// Force a tether back to idle. A no-op for an idle tether.
pub fn release_slot(
    slot: &mut TetherSlot,
    world: &mut World,
    reason: ReleaseReason,
    cooldown: f32,
    outbox: &mut Outbox,
) {
    if let Transition::Released(reason) = tether::release(&mut slot.tether, reason, cooldown) {
        finish_release(slot, world, reason, outbox);
    }
}

fn attach_slot(slot: &mut TetherSlot, world: &mut World, outbox: &mut Outbox) {
    let side = slot.tether.side;
    let Some(attachment) = slot.tether.attachment().copied() else {
        return;
    };
    despawn_handles(slot, world);
    slot.link = Some(world.spawn((ElasticLink::slack(
        side,
        attachment.anchor,
        attachment.max_length,
    ),)));
    slot.marker = Some(world.spawn((AttachMarker {
        side,
        position: attachment.anchor,
    },)));
    tracing::debug!(?side, anchor = ?attachment.anchor, max_length = attachment.max_length, "tether attached");
    outbox.event(TraversalEvent::TetherAttached { side });
}

fn finish_release(
    slot: &mut TetherSlot,
    world: &mut World,
    reason: ReleaseReason,
    outbox: &mut Outbox,
) {
    let side = slot.tether.side;
    despawn_handles(slot, world);
    tracing::debug!(?side, ?reason, "tether released");
    outbox.event(TraversalEvent::TetherReleased { side, reason });
}

fn despawn_handles(slot: &mut TetherSlot, world: &mut World) {
    for entity in [slot.link.take(), slot.marker.take()].into_iter().flatten() {
        let _ = world.despawn(entity);
    }
}
