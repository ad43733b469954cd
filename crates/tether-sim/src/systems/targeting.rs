//! Aim prediction: one candidate anchor per tether, refreshed every step.

use glam::{Quat, Vec3};

use tether_core::config::TargetingConfig;
use tether_core::probe::{ProbeHit, SurfaceKind, WorldProbe};
use tether_core::types::{AimFrame, TetherSide};

/// This step's aim candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AimCandidates {
    /// Indexed by `TetherSide::index()`.
    pub points: [Option<Vec3>; 2],
    /// Separation below threshold: both tethers share one target.
    pub combined: bool,
}

impl AimCandidates {
    pub fn get(&self, side: TetherSide) -> Option<Vec3> {
        self.points[side.index()]
    }
}

/// Refresh both candidates from the current aim frame.
pub fn run(
    probe: &dyn WorldProbe,
    aim: &AimFrame,
    separation: f32,
    config: &TargetingConfig,
) -> AimCandidates {
    let Some(forward) = aim.forward.try_normalize() else {
        tracing::warn!(forward = ?aim.forward, "degenerate aim frame, targeting skipped");
        return AimCandidates::default();
    };

    if separation < config.combined_threshold {
        let point = predict(probe, aim.origin, forward, config);
        return AimCandidates {
            points: [point, point],
            combined: true,
        };
    }

    let angle = separation.clamp(0.0, 1.0) * config.max_spread_angle;
    let mut points = [None; 2];
    for side in TetherSide::ALL {
        let direction = tether_direction(forward, aim.up, angle, side);
        points[side.index()] = predict(probe, aim.origin, direction, config);
    }
    AimCandidates {
        points,
        combined: false,
    }
}

/// Forward swung toward the tether's side about the aim-up axis. A positive
/// turn about up carries forward away from aim right, so Left turns positive.
pub fn tether_direction(forward: Vec3, up: Vec3, angle: f32, side: TetherSide) -> Vec3 {
    let Some(up) = up.try_normalize() else {
        return forward;
    };
    let turn = Quat::from_axis_angle(up, -side.sign() * angle);
    (turn * forward).try_normalize().unwrap_or(forward)
}

/// Ray first, sphere cast as fallback, then the occlusion check.
fn predict(
    probe: &dyn WorldProbe,
    origin: Vec3,
    direction: Vec3,
    config: &TargetingConfig,
) -> Option<Vec3> {
    let grappleable = |hit: &ProbeHit| hit.surface == SurfaceKind::Grappleable;

    let hit = probe
        .raycast(origin, direction, config.max_range)
        .filter(grappleable)
        .or_else(|| {
            probe.sphere_cast(
                origin,
                config.probe_radius,
                direction,
                config.max_range,
                SurfaceKind::Grappleable,
            )
        })?;

    if probe.segment_blocked(origin, hit.point, SurfaceKind::Occluder) {
        return None;
    }
    Some(hit.point)
}
