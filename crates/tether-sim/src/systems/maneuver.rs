//! Maneuver layer: orbit, air dash and double-tap boost.
//!
//! Every maneuver pays its `ActionCost` up front through `try_pay`; a cost
//! that cannot be covered rejects the maneuver with no effect.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use tether_core::config::TraversalConfig;
use tether_core::enums::{MovementState, OrbitDirection};
use tether_core::events::{CameraCue, TraversalEvent};
use tether_core::types::flatten;
use tether_rules::pools::{try_pay, EnergyPool, ResourcePool};

use crate::body::{BodySample, TraversalBody};
use crate::input::InputLatch;
use crate::slot::{hooked_anchor, TetherSlot};
use crate::systems::Outbox;

/// Timers and latches the maneuver layer carries between steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ManeuverState {
    pub dash_cooldown: f32,
    /// While open, reeling uses the dash tier.
    pub dash_window: f32,
    /// Set only by a boost that actually executed.
    pub was_boosting: bool,
    /// Orbit direction applied last step, for edge-triggered events.
    pub last_orbit: Option<OrbitDirection>,
}

impl ManeuverState {
    /// Frame-rate timer upkeep.
    pub fn tick(&mut self, dt: f32) {
        self.dash_cooldown = (self.dash_cooldown - dt).max(0.0);
        self.dash_window = (self.dash_window - dt).max(0.0);
    }
}

/// Mutable resources a maneuver may draw on.
pub struct Pools<'a> {
    pub fuel: &'a mut ResourcePool,
    pub energy: &'a mut EnergyPool,
}

/// Runs orbit, then dash, then boost. Returns whether the body is orbiting.
#[allow(clippy::too_many_arguments)]
pub fn run(
    state: &mut ManeuverState,
    velocity: &mut Vec3,
    slots: &[TetherSlot; 2],
    input: &mut InputLatch,
    sample: &BodySample,
    body: &mut dyn TraversalBody,
    mut pools: Pools<'_>,
    config: &TraversalConfig,
    outbox: &mut Outbox,
) -> bool {
    let anchor = hooked_anchor(slots);
    let reeling = anchor.is_some();
    let orbiting = input.orbit().is_some() && reeling;

    if let (Some(direction), Some(center)) = (input.orbit(), anchor) {
        orbit(state, velocity, direction, center, sample, &mut pools, config, outbox);
    } else {
        state.last_orbit = None;
    }

    if input.take_dash() {
        if orbiting || reeling || state.dash_cooldown > 0.0 {
            tracing::trace!(orbiting, reeling, cooldown = state.dash_cooldown, "dash gated");
        } else {
            dash(state, velocity, sample, &mut pools, config, outbox);
        }
    }

    let boosting = input.boosting();
    if boosting && !state.was_boosting {
        match anchor {
            Some(center) => {
                hooked_boost(state, velocity, center, sample, &mut pools, config, outbox)
            }
            None => unhooked_boost(state, body, &mut pools, config, outbox),
        }
    } else if !boosting {
        state.was_boosting = false;
    }

    orbiting
}

#[allow(clippy::too_many_arguments)]
fn orbit(
    state: &mut ManeuverState,
    velocity: &mut Vec3,
    direction: OrbitDirection,
    center: Vec3,
    sample: &BodySample,
    pools: &mut Pools<'_>,
    config: &TraversalConfig,
    outbox: &mut Outbox,
) {
    let maneuver = &config.maneuver;
    let tangent = orbit_tangent(direction, center, sample);
    if tangent == Vec3::ZERO {
        tracing::trace!(?direction, "orbit skipped, body on the orbit axis");
        return;
    }
    if !try_pay(pools.fuel, pools.energy, maneuver.orbit_cost) {
        tracing::trace!(?direction, "orbit rejected, cost not covered");
        return;
    }
    *velocity += tangent * maneuver.orbit_force;
    if state.last_orbit != Some(direction) {
        tracing::debug!(?direction, "orbit");
        outbox.event(TraversalEvent::OrbitPerformed { direction });
    }
    state.last_orbit = Some(direction);
}

fn dash(
    state: &mut ManeuverState,
    velocity: &mut Vec3,
    sample: &BodySample,
    pools: &mut Pools<'_>,
    config: &TraversalConfig,
    outbox: &mut Outbox,
) {
    let maneuver = &config.maneuver;
    if !try_pay(pools.fuel, pools.energy, maneuver.dash_cost) {
        tracing::trace!(energy = pools.energy.value(), "dash rejected, cost not covered");
        return;
    }

    let horizontal = match flatten(sample.movement_intent).try_normalize() {
        Some(direction) => {
            *velocity += direction * maneuver.dash_force;
            true
        }
        None => {
            *velocity += sample.up() * maneuver.dodge_force;
            false
        }
    };
    state.dash_cooldown = maneuver.dash_cooldown;
    state.dash_window = maneuver.dash_reel_window;

    tracing::debug!(horizontal, "dash");
    outbox.event(TraversalEvent::DashPerformed { horizontal });
    dash_cues(config, outbox);
}

fn hooked_boost(
    state: &mut ManeuverState,
    velocity: &mut Vec3,
    center: Vec3,
    sample: &BodySample,
    pools: &mut Pools<'_>,
    config: &TraversalConfig,
    outbox: &mut Outbox,
) {
    let maneuver = &config.maneuver;
    if !try_pay(pools.fuel, pools.energy, maneuver.boost_cost) {
        tracing::trace!(energy = pools.energy.value(), "boost rejected, cost not covered");
        return;
    }
    let direction = (center - sample.position)
        .try_normalize()
        .unwrap_or(sample.aim.forward);
    *velocity += direction * maneuver.boost_force;
    state.was_boosting = true;

    tracing::debug!(hooked = true, "boost");
    outbox.event(TraversalEvent::BoostPerformed { hooked: true });
}

fn unhooked_boost(
    state: &mut ManeuverState,
    body: &mut dyn TraversalBody,
    pools: &mut Pools<'_>,
    config: &TraversalConfig,
    outbox: &mut Outbox,
) {
    let maneuver = &config.maneuver;
    if !try_pay(pools.fuel, pools.energy, maneuver.unhooked_boost_cost) {
        tracing::trace!(fuel = pools.fuel.value(), "unhooked boost rejected, cost not covered");
        return;
    }
    body.request_movement_state(MovementState::Dash);
    state.dash_cooldown = maneuver.dash_cooldown;
    state.dash_window = maneuver.dash_reel_window;
    state.was_boosting = true;

    tracing::debug!(hooked = false, "boost");
    outbox.event(TraversalEvent::BoostPerformed { hooked: false });
    dash_cues(config, outbox);
}

fn dash_cues(config: &TraversalConfig, outbox: &mut Outbox) {
    outbox.cue(CameraCue::FovBurst {
        magnitude: config.feedback.dash_fov_burst,
    });
    outbox.cue(CameraCue::DistanceBurst {
        magnitude: config.feedback.dash_distance_burst,
    });
}

/// Unit tangent for an orbit impulse around `center`, or zero when degenerate.
pub fn orbit_tangent(direction: OrbitDirection, center: Vec3, sample: &BodySample) -> Vec3 {
    let right = sample.aim.right.try_normalize().unwrap_or(Vec3::NEG_X);
    let (axis, reference) = match direction {
        OrbitDirection::Left => (Vec3::Y, -right),
        OrbitDirection::Right => (Vec3::Y, right),
        OrbitDirection::Up => (right, Vec3::Y),
        OrbitDirection::Down => (right, Vec3::NEG_Y),
    };
    let tangent = axis.cross(sample.position - center).normalize_or_zero();
    if tangent.dot(reference) < 0.0 {
        -tangent
    } else {
        tangent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;
    use tether_core::types::AimFrame;

    fn sample_at(position: Vec3) -> BodySample {
        BodySample {
            position,
            velocity: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            grounded: false,
            movement_intent: Vec3::ZERO,
            aim: AimFrame::default(),
            sockets: [position; 2],
        }
    }

    #[test]
    fn test_orbit_tangent_follows_intent() {
        // Anchor straight ahead and above; aim right is -X
        let center = Vec3::new(0.0, 20.0, 20.0);
        let sample = sample_at(Vec3::ZERO);

        let right = orbit_tangent(OrbitDirection::Right, center, &sample);
        let left = orbit_tangent(OrbitDirection::Left, center, &sample);
        let up = orbit_tangent(OrbitDirection::Up, center, &sample);
        let down = orbit_tangent(OrbitDirection::Down, center, &sample);

        assert!(right.x < 0.0);
        assert!(left.x > 0.0);
        assert!(up.y > 0.0);
        assert!(down.y < 0.0);
        for tangent in [right, left, up, down] {
            assert!((tangent.length() - 1.0).abs() < 1e-4);
            // Tangent to the sphere around the anchor
            assert!(tangent.dot(sample.position - center).abs() < 1e-3);
        }
    }

    #[test]
    fn test_orbit_tangent_degenerate_on_axis() {
        // Directly below the anchor: no horizontal tangent exists
        let sample = sample_at(Vec3::ZERO);
        let tangent = orbit_tangent(OrbitDirection::Left, Vec3::new(0.0, 10.0, 0.0), &sample);
        assert_eq!(tangent, Vec3::ZERO);
    }

    #[test]
    fn test_timers_count_down_to_zero() {
        let mut state = ManeuverState {
            dash_cooldown: 0.05,
            dash_window: 0.01,
            ..Default::default()
        };
        state.tick(0.02);
        assert!((state.dash_cooldown - 0.03).abs() < 1e-6);
        assert_eq!(state.dash_window, 0.0);
    }
}
