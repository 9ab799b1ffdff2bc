//! Ray picking against the draggable bodies of a scene.

use glam::Vec3;
use crate::api::types::BodyId;
use crate::core::math::Ray;
use crate::core::scene::{Body, Scene};

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub body: BodyId,
    /// Distance from the ray origin to the intersection.
    pub distance: f32,
    /// World-space intersection point.
    pub point: Vec3,
}

/// Distance along `ray` to the nearest surface of `body`, including its
/// child geometry.
fn pick_distance(ray: &Ray, body: &Body) -> Option<f32> {
    let own = ray.intersect_sphere(body.position, body.radius);
    body.children
        .iter()
        .filter_map(|child| ray.intersect_sphere(body.position + child.offset, child.radius))
        .chain(own)
        .min_by(|a, b| a.total_cmp(b))
}

/// Cast `ray` against `candidates` and return the nearest hit.
/// Equal distances resolve to the earlier candidate. Ids missing from the
/// scene are skipped.
pub fn hit_test(ray: &Ray, scene: &Scene, candidates: &[BodyId]) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for &id in candidates {
        let Some(body) = scene.get(id) else { continue };
        let Some(distance) = pick_distance(ray, body) else { continue };
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(Hit {
                body: id,
                distance,
                point: ray.at(distance),
            });
        }
    }
    best
}
