use glam::{Affine3A, Quat, Vec3};
use crate::api::types::{BodyId, GroupId};

/// Extra pick geometry attached to a body, relative to the body position.
/// Hit testing treats these like child meshes of the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickSphere {
    pub offset: Vec3,
    pub radius: f32,
}

/// What a body represents in the cover scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Orbiting, draggable planet.
    Planet,
    /// Member of a system's central body (e.g. one star of a binary pair).
    Star,
}

/// A visual object owned by the scene. The renderer draws it from
/// `position`, `radius` and `color`; the engine owns the transform.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    /// Name for lookups and logs.
    pub tag: String,
    pub kind: BodyKind,
    /// Orbit group the body lives in (None = world root).
    pub group: Option<GroupId>,
    /// Position in world space.
    pub position: Vec3,
    /// Sphere radius in world units (render size and primary pick shape).
    pub radius: f32,
    /// Linear RGB in [0, 1].
    pub color: [f32; 3],
    pub wireframe: bool,
    /// Child geometry included in hit tests.
    pub children: Vec<PickSphere>,
}

impl Body {
    pub fn new(id: BodyId, kind: BodyKind) -> Self {
        Self {
            id,
            tag: String::new(),
            kind,
            group: None,
            position: Vec3::ZERO,
            radius: 1.0,
            color: [1.0, 1.0, 1.0],
            wireframe: false,
            children: Vec::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_wireframe(mut self, wireframe: bool) -> Self {
        self.wireframe = wireframe;
        self
    }

    pub fn with_child(mut self, child: PickSphere) -> Self {
        self.children.push(child);
        self
    }
}

/// A local coordinate frame bodies orbit within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitGroup {
    pub id: GroupId,
    pub translation: Vec3,
    pub rotation: Quat,
}

impl OrbitGroup {
    pub fn new(id: GroupId, translation: Vec3) -> Self {
        Self {
            id,
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Local-to-world transform.
    pub fn transform(&self) -> Affine3A {
        Affine3A::from_rotation_translation(self.rotation, self.translation)
    }

    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.transform().transform_point3(local)
    }

    pub fn world_to_local(&self, world: Vec3) -> Vec3 {
        self.transform().inverse().transform_point3(world)
    }
}

/// Flat storage for bodies and orbit groups.
/// Sized for a handful of systems, so lookups are linear scans.
pub struct Scene {
    bodies: Vec<Body>,
    groups: Vec<OrbitGroup>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(16),
            groups: Vec::with_capacity(4),
        }
    }

    /// Add a body to the scene.
    pub fn spawn(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Add an orbit group.
    pub fn add_group(&mut self, group: OrbitGroup) {
        self.groups.push(group);
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn group(&self, id: GroupId) -> Option<&OrbitGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// The orbit group owning a body, if any.
    pub fn group_of(&self, id: BodyId) -> Option<&OrbitGroup> {
        self.get(id).and_then(|b| b.group).and_then(|g| self.group(g))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Ids of all bodies of the given kind, in spawn order.
    pub fn ids_of_kind(&self, kind: BodyKind) -> Vec<BodyId> {
        self.bodies
            .iter()
            .filter(|b| b.kind == kind)
            .map(|b| b.id)
            .collect()
    }

    /// Place a body at a position given in its group's local frame.
    /// Bodies without a group treat `local` as world space.
    pub fn set_local_position(&mut self, id: BodyId, local: Vec3) {
        let world = match self.group_of(id) {
            Some(group) => group.local_to_world(local),
            None => local,
        };
        if let Some(body) = self.get_mut(id) {
            body.position = world;
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
