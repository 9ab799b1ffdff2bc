//! Circular orbit motion for draggable bodies.
//!
//! Orbit parameters live in a table keyed by body id, separate from the
//! scene's render data. Each tick advances every body that is not being
//! dragged; a drag end re-derives radius and angle from the drop point.

use std::collections::HashMap;
use glam::Vec3;
use crate::api::types::BodyId;
use crate::core::scene::Scene;
use crate::interaction::events::{ControlEvent, ControlEventKind};

/// Orbit of one body in its group's local XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParams {
    /// Distance from the group origin.
    pub radius: f32,
    /// Current phase in radians. Never normalized; only sin/cos are taken.
    pub angle: f32,
    /// Radians per tick. The sign gives the direction.
    pub angular_speed: f32,
    /// Set while the user drags the body; the updater leaves it alone.
    pub dragging: bool,
}

impl OrbitParams {
    pub fn new(radius: f32, angle: f32, angular_speed: f32) -> Self {
        Self {
            radius,
            angle,
            angular_speed,
            dragging: false,
        }
    }

    /// Position on the orbit in the group's local frame.
    pub fn local_position(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.angle.cos(),
            0.0,
            self.radius * self.angle.sin(),
        )
    }

    /// Re-derive radius and angle from a local-frame point, keeping speed.
    pub fn rebase(&mut self, local: Vec3) {
        self.radius = (local.x * local.x + local.z * local.z).sqrt();
        self.angle = local.z.atan2(local.x);
    }
}

/// Owns the orbit table and applies it to the scene.
#[derive(Debug, Default)]
pub struct OrbitUpdater {
    orbits: HashMap<BodyId, OrbitParams>,
}

impl OrbitUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a body and place it on its orbit.
    pub fn register(&mut self, id: BodyId, params: OrbitParams, scene: &mut Scene) {
        self.orbits.insert(id, params);
        scene.set_local_position(id, params.local_position());
    }

    pub fn get(&self, id: BodyId) -> Option<&OrbitParams> {
        self.orbits.get(&id)
    }

    pub fn is_dragging(&self, id: BodyId) -> bool {
        self.orbits.get(&id).is_some_and(|o| o.dragging)
    }

    pub fn len(&self) -> usize {
        self.orbits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbits.is_empty()
    }

    /// Advance every body not being dragged by one tick and write its
    /// world position.
    pub fn tick(&mut self, scene: &mut Scene) {
        for (&id, orbit) in self.orbits.iter_mut() {
            if orbit.dragging {
                continue;
            }
            orbit.angle += orbit.angular_speed;
            scene.set_local_position(id, orbit.local_position());
        }
    }

    /// Hand the body over to the user.
    pub fn begin_drag(&mut self, id: BodyId) {
        if let Some(orbit) = self.orbits.get_mut(&id) {
            orbit.dragging = true;
        }
    }

    /// Take the body back from the user: its orbit continues from where it
    /// was dropped. No effect if the body is not being dragged.
    pub fn end_drag(&mut self, id: BodyId, scene: &Scene) {
        let Some(orbit) = self.orbits.get_mut(&id) else { return };
        if !orbit.dragging {
            return;
        }
        orbit.dragging = false;

        let Some(body) = scene.get(id) else { return };
        let local = match scene.group_of(id) {
            Some(group) => group.world_to_local(body.position),
            None => body.position,
        };
        orbit.rebase(local);
        log::info!(
            "orbit: {:?} dropped at radius {:.2}, angle {:.4}",
            id,
            orbit.radius,
            orbit.angle
        );
    }

    /// React to a drag-controls event.
    pub fn apply_event(&mut self, event: &ControlEvent, scene: &Scene) {
        match event.kind {
            ControlEventKind::DragStart => self.begin_drag(event.body),
            ControlEventKind::DragEnd => self.end_drag(event.body, scene),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::GroupId;
    use crate::core::scene::{Body, BodyKind, OrbitGroup};

    fn scene_with_group(origin: Vec3) -> Scene {
        let mut scene = Scene::new();
        scene.add_group(OrbitGroup::new(GroupId(1), origin));
        scene.spawn(Body::new(BodyId(1), BodyKind::Planet).with_group(GroupId(1)));
        scene
    }

    #[test]
    fn one_tick_advances_along_circle() {
        let mut scene = scene_with_group(Vec3::ZERO);
        let mut orbits = OrbitUpdater::new();
        orbits.register(BodyId(1), OrbitParams::new(60.0, 0.0, 0.002), &mut scene);
        orbits.tick(&mut scene);

        let pos = scene.get(BodyId(1)).unwrap().position;
        assert!((pos.x - 59.99988).abs() < 1e-3, "x = {}", pos.x);
        assert_eq!(pos.y, 0.0);
        assert!((pos.z - 0.12).abs() < 1e-4, "z = {}", pos.z);
    }

    #[test]
    fn positions_are_offset_by_group() {
        let origin = Vec3::new(350.0, -150.0, -250.0);
        let mut scene = scene_with_group(origin);
        let mut orbits = OrbitUpdater::new();
        orbits.register(BodyId(1), OrbitParams::new(80.0, 0.0, 0.0), &mut scene);
        let pos = scene.get(BodyId(1)).unwrap().position;
        assert!((pos - (origin + Vec3::new(80.0, 0.0, 0.0))).length() < 1e-3);
    }

    #[test]
    fn angle_moves_with_speed_sign() {
        let mut scene = scene_with_group(Vec3::ZERO);
        let mut orbits = OrbitUpdater::new();
        orbits.register(BodyId(1), OrbitParams::new(60.0, 1.0, -0.004), &mut scene);
        let mut previous = orbits.get(BodyId(1)).unwrap().angle;
        for _ in 0..500 {
            orbits.tick(&mut scene);
            let angle = orbits.get(BodyId(1)).unwrap().angle;
            assert!(angle < previous);
            previous = angle;
        }
    }

    #[test]
    fn dragged_body_is_not_advanced() {
        let mut scene = scene_with_group(Vec3::ZERO);
        let mut orbits = OrbitUpdater::new();
        orbits.register(BodyId(1), OrbitParams::new(60.0, 0.0, 0.01), &mut scene);
        orbits.begin_drag(BodyId(1));

        scene.get_mut(BodyId(1)).unwrap().position = Vec3::new(5.0, 5.0, 5.0);
        orbits.tick(&mut scene);
        assert_eq!(scene.get(BodyId(1)).unwrap().position, Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(orbits.get(BodyId(1)).unwrap().angle, 0.0);
    }

    #[test]
    fn drop_rebases_orbit() {
        let mut scene = scene_with_group(Vec3::ZERO);
        let mut orbits = OrbitUpdater::new();
        orbits.register(BodyId(1), OrbitParams::new(10.0, 0.0, 0.002), &mut scene);
        orbits.begin_drag(BodyId(1));
        scene.get_mut(BodyId(1)).unwrap().position = Vec3::new(20.0, 0.0, 5.0);
        orbits.end_drag(BodyId(1), &scene);

        let orbit = orbits.get(BodyId(1)).unwrap();
        assert!((orbit.radius - 20.6155).abs() < 1e-3, "radius = {}", orbit.radius);
        assert!((orbit.angle - 0.2450).abs() < 1e-3, "angle = {}", orbit.angle);
        assert!(!orbit.dragging);
        assert_eq!(orbit.angular_speed, 0.002);
    }

    #[test]
    fn drop_is_measured_in_group_frame() {
        let origin = Vec3::new(100.0, 0.0, 0.0);
        let mut scene = scene_with_group(origin);
        let mut orbits = OrbitUpdater::new();
        orbits.register(BodyId(1), OrbitParams::new(10.0, 0.0, 0.0), &mut scene);
        orbits.begin_drag(BodyId(1));
        scene.get_mut(BodyId(1)).unwrap().position = origin + Vec3::new(0.0, 0.0, 30.0);
        orbits.end_drag(BodyId(1), &scene);

        let orbit = orbits.get(BodyId(1)).unwrap();
        assert!((orbit.radius - 30.0).abs() < 1e-3);
        assert!((orbit.angle - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn second_drag_end_changes_nothing() {
        let mut scene = scene_with_group(Vec3::ZERO);
        let mut orbits = OrbitUpdater::new();
        orbits.register(BodyId(1), OrbitParams::new(10.0, 0.0, 0.002), &mut scene);
        orbits.begin_drag(BodyId(1));
        scene.get_mut(BodyId(1)).unwrap().position = Vec3::new(20.0, 0.0, 5.0);
        orbits.end_drag(BodyId(1), &scene);
        let first = *orbits.get(BodyId(1)).unwrap();

        scene.get_mut(BodyId(1)).unwrap().position = Vec3::new(-50.0, 0.0, 0.0);
        orbits.end_drag(BodyId(1), &scene);
        assert_eq!(*orbits.get(BodyId(1)).unwrap(), first);
    }
}
