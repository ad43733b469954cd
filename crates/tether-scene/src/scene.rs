//! Collider list implementing `WorldProbe`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use tether_core::probe::{ProbeHit, SurfaceKind, WorldProbe};

use crate::shape::{Contact, Shape};

/// Segment ends closer than this to a surface are not considered blocked by it.
const SEGMENT_END_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub shape: Shape,
    pub surface: SurfaceKind,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    colliders: Vec<Collider>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    pub fn add(&mut self, shape: Shape, surface: SurfaceKind) -> &mut Self {
        self.colliders.push(Collider { shape, surface });
        self
    }

    pub fn add_box(&mut self, min: Vec3, max: Vec3, surface: SurfaceKind) -> &mut Self {
        self.add(Shape::Box { min, max }, surface)
    }

    pub fn add_sphere(&mut self, center: Vec3, radius: f32, surface: SurfaceKind) -> &mut Self {
        self.add(Shape::Sphere { center, radius }, surface)
    }

    /// Horizontal floor at height `y`, solid below.
    pub fn add_floor(&mut self, y: f32, surface: SurfaceKind) -> &mut Self {
        self.add(
            Shape::Plane {
                normal: Vec3::Y,
                offset: y,
            },
            surface,
        )
    }

    /// Nearest contact over colliders accepted by `filter`.
    fn nearest(
        &self,
        filter: impl Fn(&Collider) -> bool,
        cast: impl Fn(&Shape) -> Option<Contact>,
    ) -> Option<ProbeHit> {
        self.colliders
            .iter()
            .filter(|c| filter(*c))
            .filter_map(|c| cast(&c.shape).map(|contact| (contact, c.surface)))
            .min_by(|(a, _), (b, _)| a.distance.total_cmp(&b.distance))
            .map(|(contact, surface)| ProbeHit {
                point: contact.point,
                normal: contact.normal,
                distance: contact.distance,
                surface,
            })
    }
}

impl WorldProbe for Scene {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<ProbeHit> {
        self.nearest(|_| true, |shape| shape.raycast(origin, direction, max_distance))
    }

    fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        kind: SurfaceKind,
    ) -> Option<ProbeHit> {
        self.nearest(
            |c| c.surface == kind,
            |shape| shape.sphere_cast(origin, radius, direction, max_distance),
        )
    }

    fn segment_blocked(&self, from: Vec3, to: Vec3, kind: SurfaceKind) -> bool {
        let delta = to - from;
        let length = delta.length();
        if length <= SEGMENT_END_EPSILON {
            return false;
        }
        let direction = delta / length;
        let reach = length - SEGMENT_END_EPSILON;
        self.nearest(
            |c| c.surface == kind,
            |shape| shape.raycast(from, direction, reach),
        )
        .is_some()
    }
}
