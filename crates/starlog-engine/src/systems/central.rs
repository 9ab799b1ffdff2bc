//! Central bodies of orbit systems. These are not draggable and move on a
//! periodic path driven by elapsed time rather than by tick count.

use std::f32::consts::PI;
use crate::api::types::BodyId;
use crate::core::scene::Scene;

/// One member of a binary pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryMember {
    pub body: BodyId,
    /// Phase added to `elapsed * rate`.
    pub phase: f32,
}

/// Two stars circling their common center in the group's XZ plane.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryPair {
    pub members: Vec<BinaryMember>,
    /// Distance of each star from the group origin.
    pub distance: f32,
    /// Radians per second.
    pub rate: f32,
}

impl BinaryPair {
    /// Two stars half a turn apart.
    pub fn new(first: BodyId, second: BodyId, distance: f32, rate: f32) -> Self {
        Self {
            members: vec![
                BinaryMember { body: first, phase: 0.0 },
                BinaryMember { body: second, phase: PI },
            ],
            distance,
            rate,
        }
    }

    /// Place every member for `elapsed` seconds since start.
    pub fn update(&self, elapsed: f32, scene: &mut Scene) {
        for member in &self.members {
            let a = elapsed * self.rate + member.phase;
            let local = glam::Vec3::new(a.cos() * self.distance, 0.0, a.sin() * self.distance);
            scene.set_local_position(member.body, local);
        }
    }
}
