//! The cover scene: orbit systems, star cloud, camera and drag controls
//! wired into one per-frame update.

use glam::{Vec2, Vec3};
use crate::api::config::{CoverConfig, SystemConfig};
use crate::api::types::{BodyId, GroupId, WireEvent};
use crate::core::scene::{Body, BodyKind, OrbitGroup, Scene};
use crate::core::time::FrameClock;
use crate::input::cursor::CursorSink;
use crate::input::pointer::Surface;
use crate::interaction::controls::DragControls;
use crate::interaction::events::{ControlEvent, ControlEventKind, ListenerId};
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::instance::{rgb_from_hex, BodyInstance, InstanceBuffer};
use crate::systems::central::BinaryPair;
use crate::systems::orbit::{OrbitParams, OrbitUpdater};
use crate::systems::rng::Rng;
use crate::systems::star_cloud::StarCloud;

pub struct CoverScene {
    scene: Scene,
    camera: PerspectiveCamera,
    controls: DragControls,
    orbits: OrbitUpdater,
    binaries: Vec<BinaryPair>,
    clock: FrameClock,
    star_cloud: StarCloud,
    instances: InstanceBuffer,
    /// Events emitted since the last tick.
    pending_events: Vec<WireEvent>,
    /// Events published by the last tick, read by JS.
    frame_events: Vec<WireEvent>,
}

impl CoverScene {
    /// Build the cover for a viewport of `aspect` (width / height).
    pub fn new(
        config: &CoverConfig,
        aspect: f32,
        surface: Box<dyn Surface>,
        cursor_sink: Box<dyn CursorSink>,
    ) -> Self {
        let mut rng = Rng::new(config.seed);
        let star_cloud = StarCloud::new(config.star_cloud, &mut rng);

        let mut scene = Scene::new();
        let mut orbits = OrbitUpdater::new();
        let mut binaries = Vec::new();
        let mut planets = Vec::new();
        let mut next_id = 1u32;

        for (index, system) in config.systems.iter().enumerate() {
            let group = GroupId(index as u32 + 1);
            scene.add_group(OrbitGroup::new(group, Vec3::from_array(system.position)));
            if let Some(pair) = spawn_binary(&mut scene, group, index, system, &mut next_id) {
                binaries.push(pair);
            }
            for i in 0..system.planet_count {
                let id = BodyId(next_id);
                next_id += 1;
                let params = OrbitParams::new(
                    system.orbit_radius(i),
                    rng.range(0.0, std::f32::consts::TAU),
                    rng.range(system.angular_speed[0], system.angular_speed[1]) * rng.sign(),
                );
                scene.spawn(
                    Body::new(id, BodyKind::Planet)
                        .with_tag(format!("system{index}/planet{i}"))
                        .with_group(group)
                        .with_radius(rng.range(system.planet_radius[0], system.planet_radius[1]))
                        .with_color(rgb_from_hex(system.planet_color(i))),
                );
                orbits.register(id, params, &mut scene);
                planets.push(id);
            }
        }

        let mut cover = Self {
            camera: PerspectiveCamera::from_config(&config.camera, aspect),
            controls: DragControls::new(planets, surface, cursor_sink),
            scene,
            orbits,
            binaries,
            clock: FrameClock::new(),
            star_cloud,
            instances: InstanceBuffer::new(),
            pending_events: Vec::new(),
            frame_events: Vec::new(),
        };
        for pair in &cover.binaries {
            pair.update(0.0, &mut cover.scene);
        }
        cover.rebuild_instances();
        log::info!(
            "cover: {} systems, {} planets, {} stars in cloud",
            config.systems.len(),
            cover.orbits.len(),
            cover.star_cloud.point_count()
        );
        cover
    }

    // -- Pointer input --

    pub fn pointer_move(&mut self, client: Vec2) {
        self.controls.pointer_move(client, &self.camera, &mut self.scene);
        self.pump_events();
    }

    pub fn pointer_down(&mut self, client: Vec2) {
        self.controls.pointer_down(client, &self.camera, &mut self.scene);
        self.pump_events();
    }

    pub fn pointer_up(&mut self) {
        self.controls.pointer_up(&mut self.scene);
        self.pump_events();
    }

    // -- Frame --

    /// Advance one animation frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.clock.tick(dt);
        let elapsed = self.clock.elapsed();
        for pair in &self.binaries {
            pair.update(elapsed, &mut self.scene);
        }
        self.orbits.tick(&mut self.scene);
        self.star_cloud.tick();
        self.rebuild_instances();

        self.frame_events.clear();
        self.frame_events.append(&mut self.pending_events);
    }

    /// Viewport resized.
    pub fn resize(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.camera.set_aspect(width / height);
        }
    }

    /// Stretch the star cloud for enter-warp progress `p`.
    pub fn apply_warp(&mut self, p: f32) {
        self.star_cloud.apply_warp(p);
    }

    // -- Lifecycle --

    pub fn activate(&mut self) {
        self.controls.activate();
    }

    pub fn deactivate(&mut self) {
        self.controls.deactivate(&mut self.scene);
        self.pump_events();
    }

    pub fn dispose(&mut self) {
        self.controls.dispose(&mut self.scene);
        self.pump_events();
        log::info!("cover: controls disposed");
    }

    pub fn add_listener(
        &mut self,
        kind: ControlEventKind,
        callback: impl FnMut(&ControlEvent) + 'static,
    ) -> ListenerId {
        self.controls.add_listener(kind, callback)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.controls.remove_listener(id)
    }

    // -- Accessors --

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn controls(&self) -> &DragControls {
        &self.controls
    }

    pub fn orbits(&self) -> &OrbitUpdater {
        &self.orbits
    }

    pub fn star_cloud(&self) -> &StarCloud {
        &self.star_cloud
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn instances(&self) -> &[BodyInstance] {
        &self.instances.instances
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.instance_count()
    }

    /// Events published by the last tick.
    pub fn events(&self) -> &[WireEvent] {
        &self.frame_events
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.frame_events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.frame_events.len() as u32
    }

    // -- Internals --

    /// Route controller events to the orbit updater and the JS queue.
    fn pump_events(&mut self) {
        for event in self.controls.drain_events() {
            self.orbits.apply_event(&event, &self.scene);
            let position = self
                .scene
                .get(event.body)
                .map(|b| b.position)
                .unwrap_or(Vec3::ZERO);
            self.pending_events.push(WireEvent {
                kind: event.kind.code() as f32,
                body: event.body.0 as f32,
                x: position.x,
                y: position.y,
                z: position.z,
            });
        }
    }

    fn rebuild_instances(&mut self) {
        self.instances.clear();
        let hovered = self.controls.hovered();
        let selected = self.controls.selected();
        for body in self.scene.iter() {
            let mut flags = 0;
            if hovered == Some(body.id) {
                flags |= BodyInstance::HOVERED;
            }
            if selected == Some(body.id) {
                flags |= BodyInstance::DRAGGING;
            }
            self.instances.push(BodyInstance::from_body(body, flags));
        }
    }
}

fn spawn_binary(
    scene: &mut Scene,
    group: GroupId,
    index: usize,
    system: &SystemConfig,
    next_id: &mut u32,
) -> Option<BinaryPair> {
    let binary = system.central.as_ref()?;
    let mut ids = [BodyId(0); 2];
    for (j, star) in binary.stars.iter().enumerate() {
        let id = BodyId(*next_id);
        *next_id += 1;
        scene.spawn(
            Body::new(id, BodyKind::Star)
                .with_tag(format!("system{index}/star{j}"))
                .with_group(group)
                .with_radius(star.radius)
                .with_color(rgb_from_hex(star.color))
                .with_wireframe(star.wireframe),
        );
        ids[j] = id;
    }
    Some(BinaryPair::new(ids[0], ids[1], binary.distance, binary.rate))
}
