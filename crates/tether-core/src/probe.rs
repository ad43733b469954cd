//! Collision-query seam between the engine and whatever owns world geometry.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Surface classification relevant to targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// A tether may anchor here.
    Grappleable,
    /// Blocks line of sight; never an anchor.
    Occluder,
}

/// Nearest surface found by a cast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbeHit {
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
    pub surface: SurfaceKind,
}

/// Geometry queries used by aim prediction. `direction` is always normalized.
pub trait WorldProbe {
    /// Nearest surface of any kind along a thin ray.
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<ProbeHit>;

    /// Nearest surface of `kind` swept by a sphere of `radius`. Other kinds
    /// are ignored, so a wide sweep grazing an occluder still finds a target.
    fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        kind: SurfaceKind,
    ) -> Option<ProbeHit>;

    /// True if a surface of `kind` intersects the open segment `from..to`.
    fn segment_blocked(&self, from: Vec3, to: Vec3, kind: SurfaceKind) -> bool;
}
