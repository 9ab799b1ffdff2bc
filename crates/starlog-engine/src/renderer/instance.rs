use bytemuck::{Pod, Zeroable};
use crate::core::scene::Body;

/// Per-body render data written to a flat buffer for the JS renderer.
/// Must match the JS protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    /// World position.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Sphere radius in world units.
    pub radius: f32,
    /// Linear RGB.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Bit set of `BodyInstance::HOVERED`, `DRAGGING`, `WIREFRAME`, stored as f32.
    pub flags: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub const HOVERED: u32 = 1;
    pub const DRAGGING: u32 = 2;
    pub const WIREFRAME: u32 = 4;

    pub fn from_body(body: &Body, flags: u32) -> Self {
        let flags = if body.wireframe { flags | Self::WIREFRAME } else { flags };
        Self {
            x: body.position.x,
            y: body.position.y,
            z: body.position.z,
            radius: body.radius,
            r: body.color[0],
            g: body.color[1],
            b: body.color[2],
            flags: flags as f32,
        }
    }

    pub fn has_flag(&self, flag: u32) -> bool {
        (self.flags as u32) & flag != 0
    }
}

/// Body instances for one frame, in scene order.
pub struct InstanceBuffer {
    pub instances: Vec<BodyInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(16),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for JS reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rgb from a 0xRRGGBB hex color.
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::api::types::BodyId;
    use crate::core::scene::BodyKind;

    #[test]
    fn body_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), BodyInstance::STRIDE_BYTES);
    }

    #[test]
    fn wireframe_bodies_carry_flag() {
        let body = Body::new(BodyId(1), BodyKind::Star)
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_radius(15.0)
            .with_wireframe(true);
        let inst = BodyInstance::from_body(&body, BodyInstance::HOVERED);
        assert!(inst.has_flag(BodyInstance::WIREFRAME));
        assert!(inst.has_flag(BodyInstance::HOVERED));
        assert!(!inst.has_flag(BodyInstance::DRAGGING));
        assert_eq!((inst.x, inst.y, inst.z, inst.radius), (1.0, 2.0, 3.0, 15.0));
    }

    #[test]
    fn hex_colors_unpack() {
        assert_eq!(rgb_from_hex(0xff0000), [1.0, 0.0, 0.0]);
        let c = rgb_from_hex(0x66ccff);
        assert!((c[0] - 0.4).abs() < 1e-6 && (c[1] - 0.8).abs() < 1e-6 && c[2] == 1.0);
    }
}
