//! Ray, plane and sphere primitives used for picking and dragging.
//!
//! Thin wrappers over `glam::Vec3`; no scene knowledge.

use glam::Vec3;

/// Parallel-ness threshold for ray/plane tests.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A half-line in world space. `direction` is always unit length
/// (or zero for a degenerate ray, which intersects nothing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersect with a plane. `None` when the ray runs parallel to the
    /// plane or the plane lies behind the origin.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        let denom = plane.normal.dot(self.direction);
        if denom.abs() < PARALLEL_EPSILON {
            // A ray lying inside the plane touches it at its own origin.
            if plane.distance_to_point(self.origin).abs() < PARALLEL_EPSILON {
                return Some(self.origin);
            }
            return None;
        }
        let t = -(self.origin.dot(plane.normal) + plane.constant) / denom;
        if t < 0.0 {
            return None;
        }
        Some(self.at(t))
    }

    /// Distance along the ray to the first hit on a sphere, or `None`.
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let to_center = center - self.origin;
        let along = to_center.dot(self.direction);
        let perp_sq = to_center.length_squared() - along * along;
        let radius_sq = radius * radius;
        if perp_sq > radius_sq {
            return None;
        }
        let half_chord = (radius_sq - perp_sq).sqrt();
        let near = along - half_chord;
        let far = along + half_chord;
        if far < 0.0 {
            return None;
        }
        Some(if near < 0.0 { far } else { near })
    }
}

/// Infinite plane in Hessian normal form: `normal · p + constant = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub constant: f32,
}

impl Plane {
    /// Plane with the given normal passing through `point`.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            constant: -point.dot(normal),
        }
    }

    /// Signed distance from the plane to `point`.
    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }
}
