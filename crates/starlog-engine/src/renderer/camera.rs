use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use crate::core::math::Ray;

/// Perspective camera mirroring the one the JS renderer draws with.
/// The engine only needs it for picking: projection, forward direction
/// and NDC-to-ray unprojection.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// Serializable camera placement, part of the cover configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_fov")]
    pub fov_y_degrees: f32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,
    #[serde(default = "default_position")]
    pub position: [f32; 3],
    #[serde(default)]
    pub look_at: [f32; 3],
}

fn default_fov() -> f32 {
    75.0
}

fn default_near() -> f32 {
    0.1
}

fn default_far() -> f32 {
    4000.0
}

fn default_position() -> [f32; 3] {
    [0.0, 150.0, 400.0]
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: default_fov(),
            near: default_near(),
            far: default_far(),
            position: default_position(),
            look_at: [0.0, 0.0, 0.0],
        }
    }
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            fov_y_degrees,
            aspect,
            near,
            far,
        }
    }

    /// Build a camera from configuration for a viewport aspect ratio.
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self::new(config.fov_y_degrees, aspect, config.near, config.far);
        camera.position = Vec3::from_array(config.position);
        camera.look_at(Vec3::from_array(config.look_at));
        camera
    }

    /// Aim the camera at a world point.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Update the aspect ratio (e.g. on window resize).
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Unit vector the camera faces in world space.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// OpenGL-style clip space (z in [-1, 1]), matching the JS renderer.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to normalized device coordinates.
    /// `z` is the clip-space depth; points behind the eye have |z| > 1.
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }

    /// Ray from the eye through an NDC point (x, y in [-1, 1], Y up).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        // Built in view space and rotated out, which stays precise where
        // unprojecting through the depth range would not.
        let half_height = (self.fov_y_degrees.to_radians() * 0.5).tan();
        let view_dir = Vec3::new(ndc.x * half_height * self.aspect, ndc.y * half_height, -1.0);
        let world_dir = self.view_matrix().inverse().transform_vector3(view_dir);
        Ray::new(self.position, world_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_camera() -> PerspectiveCamera {
        PerspectiveCamera::from_config(&CameraConfig::default(), 16.0 / 9.0)
    }

    #[test]
    fn center_ray_follows_forward() {
        let camera = site_camera();
        let ray = camera.ray_from_ndc(Vec2::ZERO);
        assert!((ray.direction - camera.forward()).length() < 1e-4);
        assert_eq!(ray.origin, camera.position);
    }

    #[test]
    fn target_projects_to_center() {
        let camera = site_camera();
        let ndc = camera.project(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4, "ndc = {ndc}");
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn unprojected_ray_passes_through_projected_point() {
        let camera = site_camera();
        let point = Vec3::new(120.0, -40.0, -90.0);
        let ndc = camera.project(point);
        let ray = camera.ray_from_ndc(Vec2::new(ndc.x, ndc.y));
        let to_point = point - ray.origin;
        let along = to_point.dot(ray.direction);
        let miss = (to_point - ray.direction * along).length();
        assert!(miss < 1e-2, "miss distance = {miss}");
    }

    #[test]
    fn upper_ndc_points_upward() {
        let camera = site_camera();
        let low = camera.ray_from_ndc(Vec2::new(0.0, -0.5));
        let high = camera.ray_from_ndc(Vec2::new(0.0, 0.5));
        assert!(high.direction.y > low.direction.y);
    }

    #[test]
    fn set_aspect_rejects_degenerate_values() {
        let mut camera = site_camera();
        camera.set_aspect(0.0);
        assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
        camera.set_aspect(f32::NAN);
        assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
        camera.set_aspect(2.0);
        assert_eq!(camera.aspect, 2.0);
    }
}
