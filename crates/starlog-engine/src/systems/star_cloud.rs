//! Background point cloud of the cover scene and its hyperspace warp.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use super::rng::Rng;

/// Star cloud parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarCloudConfig {
    pub count: usize,
    /// Edge length of the cube the points fill, centered on the origin.
    pub extent: f32,
    pub point_size: f32,
    pub opacity: f32,
    /// Y rotation added per tick, in radians.
    pub spin: f32,
    /// Point size gained over a full hyperspace warp.
    pub warp_size_gain: f32,
    /// Distance the cloud travels towards the camera over a full warp.
    pub warp_depth: f32,
}

impl Default for StarCloudConfig {
    fn default() -> Self {
        Self {
            count: 20_000,
            extent: 3000.0,
            point_size: 1.5,
            opacity: 0.9,
            spin: 0.0001,
            warp_size_gain: 30.0,
            warp_depth: 3000.0,
        }
    }
}

/// Point positions plus the transform and material values the renderer
/// reads each frame.
pub struct StarCloud {
    config: StarCloudConfig,
    points: Vec<Vec3>,
    rotation_y: f32,
    offset_z: f32,
    point_size: f32,
}

impl StarCloud {
    pub fn new(config: StarCloudConfig, rng: &mut Rng) -> Self {
        let half = config.extent * 0.5;
        let points = (0..config.count)
            .map(|_| {
                Vec3::new(
                    rng.range(-half, half),
                    rng.range(-half, half),
                    rng.range(-half, half),
                )
            })
            .collect();
        Self {
            config,
            points,
            rotation_y: 0.0,
            offset_z: 0.0,
            point_size: config.point_size,
        }
    }

    /// Per-tick spin about Y.
    pub fn tick(&mut self) {
        self.rotation_y += self.config.spin;
    }

    /// Stretch and push the cloud for warp progress `p` in [0, 1].
    pub fn apply_warp(&mut self, p: f32) {
        self.point_size = self.config.point_size + p * self.config.warp_size_gain;
        self.offset_z = p * self.config.warp_depth;
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn offset_z(&self) -> f32 {
        self.offset_z
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    pub fn opacity(&self) -> f32 {
        self.config.opacity
    }

    /// Raw pointer to xyz triples for the renderer.
    pub fn points_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<Vec3, f32>(&self.points).as_ptr()
    }

    pub fn point_count(&self) -> u32 {
        self.points.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_cloud() -> StarCloud {
        let config = StarCloudConfig { count: 500, ..StarCloudConfig::default() };
        StarCloud::new(config, &mut Rng::new(7))
    }

    #[test]
    fn points_fill_the_cube() {
        let cloud = small_cloud();
        assert_eq!(cloud.point_count(), 500);
        for p in cloud.points() {
            assert!(p.abs().max_element() <= 1500.0);
        }
    }

    #[test]
    fn spins_per_tick() {
        let mut cloud = small_cloud();
        for _ in 0..10 {
            cloud.tick();
        }
        assert!((cloud.rotation_y() - 0.001).abs() < 1e-6);
    }

    #[test]
    fn warp_scales_size_and_depth() {
        let mut cloud = small_cloud();
        assert_eq!(cloud.point_size(), 1.5);
        cloud.apply_warp(0.5);
        assert!((cloud.point_size() - 16.5).abs() < 1e-5);
        assert!((cloud.offset_z() - 1500.0).abs() < 1e-3);
        cloud.apply_warp(1.0);
        assert!((cloud.point_size() - 31.5).abs() < 1e-5);
        assert!((cloud.offset_z() - 3000.0).abs() < 1e-3);
    }
}
