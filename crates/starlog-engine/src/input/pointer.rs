//! Pointer geometry: viewport pixels → normalized device coordinates → world ray.

use glam::Vec2;
use crate::core::math::Ray;
use crate::renderer::camera::PerspectiveCamera;

/// Bounding rectangle of the interactive surface, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// The element pointer events arrive on. Its rectangle is queried on every
/// event, never cached: the element may have been resized or scrolled.
pub trait Surface {
    fn bounding_rect(&self) -> SurfaceRect;
}

impl Surface for SurfaceRect {
    fn bounding_rect(&self) -> SurfaceRect {
        *self
    }
}

/// Pointer position resolved against the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Normalized device coordinates, both axes in [-1, 1], Y up.
    pub ndc: Vec2,
    /// World-space ray from the camera through the pointer.
    pub ray: Ray,
}

/// Convert a client-space point to NDC. `None` for a zero-sized surface.
pub fn client_to_ndc(client: Vec2, rect: SurfaceRect) -> Option<Vec2> {
    if rect.is_degenerate() {
        return None;
    }
    Some(Vec2::new(
        (client.x - rect.left) / rect.width * 2.0 - 1.0,
        -(client.y - rect.top) / rect.height * 2.0 + 1.0,
    ))
}

/// Resolve a pointer position into NDC and a world ray.
pub fn sample_pointer<S: Surface + ?Sized>(
    client: Vec2,
    surface: &S,
    camera: &PerspectiveCamera,
) -> Option<PointerSample> {
    let ndc = client_to_ndc(client, surface.bounding_rect())?;
    Some(PointerSample {
        ndc,
        ray: camera.ray_from_ndc(ndc),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use crate::renderer::camera::CameraConfig;

    #[test]
    fn corners_map_to_ndc_extremes() {
        let rect = SurfaceRect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(client_to_ndc(Vec2::new(0.0, 0.0), rect), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(client_to_ndc(Vec2::new(800.0, 600.0), rect), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(client_to_ndc(Vec2::new(400.0, 300.0), rect), Some(Vec2::ZERO));
    }

    #[test]
    fn offset_surface_is_respected() {
        let rect = SurfaceRect::new(100.0, 50.0, 200.0, 100.0);
        let ndc = client_to_ndc(Vec2::new(150.0, 75.0), rect).unwrap();
        assert!((ndc.x + 0.5).abs() < 1e-6);
        assert!((ndc.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn degenerate_surface_yields_none() {
        let rect = SurfaceRect::new(0.0, 0.0, 0.0, 600.0);
        assert!(client_to_ndc(Vec2::new(10.0, 10.0), rect).is_none());
    }

    struct CountingSurface {
        rect: SurfaceRect,
        queries: Cell<u32>,
    }

    impl Surface for CountingSurface {
        fn bounding_rect(&self) -> SurfaceRect {
            self.queries.set(self.queries.get() + 1);
            self.rect
        }
    }

    #[test]
    fn rect_is_queried_per_sample() {
        let surface = CountingSurface {
            rect: SurfaceRect::new(0.0, 0.0, 800.0, 600.0),
            queries: Cell::new(0),
        };
        let camera = PerspectiveCamera::from_config(&CameraConfig::default(), 800.0 / 600.0);
        sample_pointer(Vec2::new(10.0, 10.0), &surface, &camera);
        sample_pointer(Vec2::new(20.0, 20.0), &surface, &camera);
        assert_eq!(surface.queries.get(), 2);
    }

    #[test]
    fn center_sample_looks_forward() {
        let camera = PerspectiveCamera::from_config(&CameraConfig::default(), 800.0 / 600.0);
        let rect = SurfaceRect::new(0.0, 0.0, 800.0, 600.0);
        let sample = sample_pointer(Vec2::new(400.0, 300.0), &rect, &camera).unwrap();
        assert!((sample.ray.direction - camera.forward()).length() < 1e-4);
    }
}
