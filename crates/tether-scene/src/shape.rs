//! Primitive shapes and their cast intersections.
//!
//! Casts are one-sided: a ray starting inside a solid, or travelling along a
//! plane's normal, reports nothing.

use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned box.
    Box { min: Vec3, max: Vec3 },
    Sphere { center: Vec3, radius: f32 },
    /// Half-space boundary `normal · p = offset`, solid behind the normal.
    Plane { normal: Vec3, offset: f32 },
}

/// Surface contact along a cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Distance travelled by the cast origin.
    pub distance: f32,
    /// Point on the shape's surface.
    pub point: Vec3,
    pub normal: Vec3,
}

impl Shape {
    /// Thin ray. `direction` must be normalized.
    pub fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<Contact> {
        self.cast(origin, 0.0, direction, max_distance)
    }

    /// Sphere of `radius` swept along `direction`. Boxes are inflated without
    /// rounding their edges, which errs toward reporting a hit near corners.
    pub fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<Contact> {
        self.cast(origin, radius.max(0.0), direction, max_distance)
    }

    fn cast(&self, origin: Vec3, radius: f32, direction: Vec3, max_distance: f32) -> Option<Contact> {
        let contact = match *self {
            Shape::Box { min, max } => {
                let inflate = Vec3::splat(radius);
                let (distance, _) = ray_box(origin, direction, min - inflate, max + inflate)?;
                let center = origin + direction * distance;
                let point = center.clamp(min, max);
                let normal = (center - point).try_normalize().unwrap_or(-direction);
                Contact {
                    distance,
                    point,
                    normal,
                }
            }
            Shape::Sphere { center, radius: r } => {
                let distance = ray_sphere(origin, direction, center, r + radius)?;
                let normal = (origin + direction * distance - center)
                    .try_normalize()
                    .unwrap_or(-direction);
                Contact {
                    distance,
                    point: center + normal * r,
                    normal,
                }
            }
            Shape::Plane { normal, offset } => {
                let distance = ray_plane(origin, direction, normal, offset + radius)?;
                Contact {
                    distance,
                    point: origin + direction * distance - normal * radius,
                    normal,
                }
            }
        };
        (contact.distance <= max_distance).then_some(contact)
    }
}

/// Entry distance into an AABB, or None when missed or starting inside.
fn ray_box(origin: Vec3, direction: Vec3, min: Vec3, max: Vec3) -> Option<(f32, usize)> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut enter_axis = 0;

    for axis in 0..3 {
        let o = origin[axis];
        let d = direction[axis];
        if d.abs() < 1e-8 {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (min[axis] - o) * inv;
        let mut t1 = (max[axis] - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 > t_enter {
            t_enter = t0;
            enter_axis = axis;
        }
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_enter < 0.0 {
        return None;
    }
    Some((t_enter, enter_axis))
}

fn ray_sphere(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_origin = origin - center;
    let c = to_origin.length_squared() - radius * radius;
    if c < 0.0 {
        return None;
    }
    let b = to_origin.dot(direction);
    if b > 0.0 {
        return None;
    }
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    Some(-b - discriminant.sqrt())
}

fn ray_plane(origin: Vec3, direction: Vec3, normal: Vec3, offset: f32) -> Option<f32> {
    let denom = normal.dot(direction);
    if denom >= -1e-8 {
        return None;
    }
    let t = (offset - normal.dot(origin)) / denom;
    (t >= 0.0).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_hits_box_front_face() {
        let shape = Shape::Box {
            min: Vec3::new(-5.0, -5.0, 20.0),
            max: Vec3::new(5.0, 5.0, 22.0),
        };
        let contact = shape.raycast(Vec3::ZERO, Vec3::Z, 100.0).unwrap();
        assert_relative_eq!(contact.distance, 20.0);
        assert_eq!(contact.point, Vec3::new(0.0, 0.0, 20.0));
        assert_eq!(contact.normal, Vec3::NEG_Z);
    }

    #[test]
    fn test_ray_respects_max_distance() {
        let shape = Shape::Sphere {
            center: Vec3::new(0.0, 0.0, 30.0),
            radius: 2.0,
        };
        assert!(shape.raycast(Vec3::ZERO, Vec3::Z, 20.0).is_none());
        let contact = shape.raycast(Vec3::ZERO, Vec3::Z, 40.0).unwrap();
        assert_relative_eq!(contact.distance, 28.0);
    }

    #[test]
    fn test_ray_from_inside_reports_nothing() {
        let shape = Shape::Sphere {
            center: Vec3::ZERO,
            radius: 5.0,
        };
        assert!(shape.raycast(Vec3::ZERO, Vec3::Z, 100.0).is_none());
    }

    #[test]
    fn test_sphere_cast_grazes_what_ray_misses() {
        let shape = Shape::Sphere {
            center: Vec3::new(2.0, 0.0, 30.0),
            radius: 1.0,
        };
        assert!(shape.raycast(Vec3::ZERO, Vec3::Z, 100.0).is_none());

        let contact = shape.sphere_cast(Vec3::ZERO, 1.5, Vec3::Z, 100.0).unwrap();
        // Contact lies on the shape's own surface, not the inflated one
        assert_relative_eq!(contact.point.distance(Vec3::new(2.0, 0.0, 30.0)), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_sphere_cast_box_contact_on_surface() {
        let shape = Shape::Box {
            min: Vec3::new(1.0, -1.0, 10.0),
            max: Vec3::new(3.0, 1.0, 12.0),
        };
        let contact = shape.sphere_cast(Vec3::ZERO, 2.0, Vec3::Z, 100.0).unwrap();
        assert!(contact.point.x >= 1.0 && contact.point.x <= 3.0);
        assert!(contact.point.z >= 10.0 && contact.point.z <= 12.0);
    }

    #[test]
    fn test_plane_is_one_sided() {
        let floor = Shape::Plane {
            normal: Vec3::Y,
            offset: 0.0,
        };
        let down = floor.raycast(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, 100.0).unwrap();
        assert_relative_eq!(down.distance, 10.0);
        assert!(floor.raycast(Vec3::new(0.0, 10.0, 0.0), Vec3::Y, 100.0).is_none());
    }
}
