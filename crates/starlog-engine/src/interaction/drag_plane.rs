//! Camera-facing drag plane: keeps a dragged body sliding on a sheet
//! parallel to the screen instead of snapping onto the pointer ray.

use glam::Vec3;
use crate::core::math::{Plane, Ray};

/// Plane and grab offset for one drag. Fixed for the whole drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPlane {
    pub plane: Plane,
    /// Grab point minus body position at drag start.
    pub offset: Vec3,
}

impl DragPlane {
    /// Plane through `anchor` whose normal is the camera's forward direction.
    pub fn facing_camera(camera_forward: Vec3, anchor: Vec3) -> Plane {
        Plane::from_normal_and_point(camera_forward, anchor)
    }

    /// Start dragging a body at `body_position` grabbed along `ray`.
    /// If the ray misses the plane the grab point is taken as the body itself.
    pub fn begin(ray: &Ray, camera_forward: Vec3, body_position: Vec3) -> Self {
        let plane = Self::facing_camera(camera_forward, body_position);
        let offset = match ray.intersect_plane(&plane) {
            Some(grab) => grab - body_position,
            None => {
                log::debug!("drag start ray misses its plane; grabbing body center");
                Vec3::ZERO
            }
        };
        Self { plane, offset }
    }

    /// Body position for the current pointer ray, or `None` when the ray
    /// misses the plane (the body then stays where it is).
    pub fn solve(&self, ray: &Ray) -> Option<Vec3> {
        ray.intersect_plane(&self.plane).map(|point| point - self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grabbing_off_center_keeps_offset() {
        let forward = Vec3::NEG_Z;
        let body = Vec3::new(0.0, 0.0, -100.0);
        let grab_ray = Ray::new(Vec3::new(3.0, 2.0, 0.0), Vec3::NEG_Z);
        let drag = DragPlane::begin(&grab_ray, forward, body);
        assert!((drag.offset - Vec3::new(3.0, 2.0, 0.0)).length() < 1e-4);

        let move_ray = Ray::new(Vec3::new(13.0, 2.0, 0.0), Vec3::NEG_Z);
        let pos = drag.solve(&move_ray).unwrap();
        assert!((pos - Vec3::new(10.0, 0.0, -100.0)).length() < 1e-4, "pos = {pos}");
    }

    #[test]
    fn plane_faces_camera() {
        let forward = Vec3::new(0.0, -0.6, -0.8);
        let anchor = Vec3::new(5.0, 5.0, 5.0);
        let plane = DragPlane::facing_camera(forward, anchor);
        assert!(plane.distance_to_point(anchor).abs() < 1e-4);
        assert!((plane.normal - forward.normalize()).length() < 1e-6);
    }

    #[test]
    fn parallel_ray_is_skipped() {
        let drag = DragPlane::begin(
            &Ray::new(Vec3::ZERO, Vec3::NEG_Z),
            Vec3::NEG_Z,
            Vec3::new(0.0, 0.0, -10.0),
        );
        let sideways = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(drag.solve(&sideways).is_none());
    }

    #[test]
    fn missed_grab_uses_body_center() {
        // Ray pointing away from the plane.
        let drag = DragPlane::begin(
            &Ray::new(Vec3::ZERO, Vec3::Z),
            Vec3::NEG_Z,
            Vec3::new(0.0, 0.0, -10.0),
        );
        assert_eq!(drag.offset, Vec3::ZERO);
    }
}
