//! Swing constraint solver.
//!
//! Each attached tether contributes two velocity changes per step: the
//! one-sided elastic link (tuned from body speed) and the reel-in blend
//! toward the anchor. Reeling is funded per tether per step from fuel.

use glam::Vec3;
use hecs::World;

use tether_core::config::{SwingConfig, TraversalConfig};
use tether_core::enums::ReelTier;
use tether_core::events::CameraCue;
use tether_core::types::{remap_clamped, smoothstep};
use tether_rules::pools::ResourcePool;

use crate::body::BodySample;
use crate::components::ElasticLink;
use crate::slot::TetherSlot;
use crate::systems::Outbox;

/// Result of one solver pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingOutcome {
    pub velocity: Vec3,
    /// At least one tether attached this step.
    pub reeling: bool,
    /// Some tether's reel debit was rejected; the economy sweep releases everything.
    pub unfunded: bool,
}

/// Dash window beats a held boost.
pub fn select_tier(boost_held: bool, dash_window: f32) -> ReelTier {
    if dash_window > 0.0 {
        ReelTier::Dash
    } else if boost_held {
        ReelTier::Boosted
    } else {
        ReelTier::Normal
    }
}

pub fn reel_force(tier: ReelTier, swing: &SwingConfig) -> f32 {
    match tier {
        ReelTier::Normal => swing.reel_force_normal,
        ReelTier::Boosted => swing.reel_force_boosted,
        ReelTier::Dash => swing.reel_force_dash,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    slots: &mut [TetherSlot; 2],
    world: &mut World,
    sample: &BodySample,
    tier: ReelTier,
    was_reeling: bool,
    fuel: &mut ResourcePool,
    config: &TraversalConfig,
    dt: f32,
    outbox: &mut Outbox,
) -> SwingOutcome {
    let swing = &config.swing;
    let speed_sq = sample.velocity.length_squared();
    let mut velocity = sample.velocity;
    let mut reeling = false;
    let mut unfunded = false;

    for slot in slots.iter_mut() {
        let Some(attachment) = slot.tether.attachment().copied() else {
            continue;
        };
        reeling = true;

        let cost = reel_cost(tier, config);
        if !fuel.try_debit(cost) {
            tracing::trace!(side = ?slot.tether.side, cost, fuel = fuel.value(), "reel debit rejected");
            slot.tether.reel_force_current = 0.0;
            unfunded = true;
            continue;
        }

        let to_anchor = attachment.anchor - sample.position;
        let distance = to_anchor.length();
        let Some(direction) = to_anchor.try_normalize() else {
            continue;
        };

        if let Some(entity) = slot.link {
            if let Ok(mut link) = world.get::<&mut ElasticLink>(entity) {
                tune_link(&mut link, distance, speed_sq, tier, swing);
                velocity += spring_impulse(&link, sample.position, velocity, dt);
            }
        }

        let force = reel_force(tier, swing);
        let divider = reel_divider(distance, config.targeting.max_range, swing);
        let target = direction * force * divider;
        velocity = velocity.lerp(target, (swing.reel_blend_rate * dt).min(1.0));
        slot.tether.reel_force_current = force;
    }

    if reeling && !was_reeling {
        velocity.y += swing.reel_start_lift;
    }
    if reeling && sample.grounded {
        velocity.y += swing.grounded_lift * dt;
    }
    if reeling && tier == ReelTier::Boosted {
        outbox.cue(CameraCue::FovBurst {
            magnitude: config.feedback.reel_fov_burst,
        });
        outbox.cue(CameraCue::DistanceBurst {
            magnitude: config.feedback.reel_distance_burst,
        });
    }

    SwingOutcome {
        velocity,
        reeling,
        unfunded,
    }
}

fn reel_cost(tier: ReelTier, config: &TraversalConfig) -> f32 {
    let economy = &config.economy;
    match tier {
        ReelTier::Boosted => economy.reel_fuel_per_step + economy.boosted_reel_fuel_per_step,
        ReelTier::Normal | ReelTier::Dash => economy.reel_fuel_per_step,
    }
}

/// Closer anchor, smaller divider, gentler pull.
pub fn reel_divider(distance: f32, max_range: f32, swing: &SwingConfig) -> f32 {
    let t = smoothstep(0.0, max_range, distance);
    swing.reel_divider_min + (swing.reel_divider_max - swing.reel_divider_min) * t
}

/// Remap link stiffness, damping and mass scale from squared speed, or go slack.
pub fn tune_link(link: &mut ElasticLink, distance: f32, speed_sq: f32, tier: ReelTier, swing: &SwingConfig) {
    if distance <= swing.slack_distance || tier == ReelTier::Boosted {
        link.stiffness = 0.0;
        link.damping = 0.0;
        link.tolerance = 0.0;
        return;
    }
    let (lo, hi) = (swing.speed_sq_min, swing.speed_sq_max);
    link.stiffness = remap_clamped(speed_sq, lo, hi, swing.stiffness_min, swing.stiffness_max);
    link.damping = remap_clamped(speed_sq, lo, hi, swing.damping_min, swing.damping_max);
    link.mass_scale = remap_clamped(speed_sq, lo, hi, swing.mass_scale_slow, swing.mass_scale_fast);
    link.tolerance = swing.tolerance;
}

/// Velocity change from a stretched link. Zero while within max length plus tolerance.
pub fn spring_impulse(link: &ElasticLink, position: Vec3, velocity: Vec3, dt: f32) -> Vec3 {
    if link.stiffness <= 0.0 {
        return Vec3::ZERO;
    }
    let to_anchor = link.anchor - position;
    let distance = to_anchor.length();
    let stretch = distance - link.max_length;
    if stretch <= link.tolerance {
        return Vec3::ZERO;
    }
    let Some(direction) = to_anchor.try_normalize() else {
        return Vec3::ZERO;
    };
    let separating = (-velocity.dot(direction)).max(0.0);
    let magnitude = (link.stiffness * stretch + link.damping * separating) * link.mass_scale * dt;
    direction * magnitude
}
