//! Drag controls: hover and drag state machine for the cover scene.
//!
//! Pointer handlers resolve the pointer into a world ray, pick against the
//! draggable bodies, move the selected body on its drag plane and emit
//! `hoveron` / `hoveroff` / `dragstart` / `drag` / `dragend`.

use glam::Vec2;
use crate::api::types::BodyId;
use crate::core::scene::Scene;
use crate::input::cursor::{Cursor, CursorSink};
use crate::input::pointer::{sample_pointer, PointerSample, Surface};
use crate::renderer::camera::PerspectiveCamera;
use super::drag_plane::DragPlane;
use super::events::{ControlEvent, ControlEventKind, EventDispatcher, ListenerId};
use super::hit::hit_test;

/// Where the controls are in the hover/drag cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    Idle,
    Hovering(BodyId),
    Dragging { body: BodyId, drag: DragPlane },
}

/// Whether pointer input is being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Active,
    Inactive,
    /// Permanently deactivated.
    Disposed,
}

/// Hover/drag controller for one interactive surface.
pub struct DragControls {
    /// Bodies eligible for picking.
    objects: Vec<BodyId>,
    state: InteractionState,
    lifecycle: Lifecycle,
    surface: Box<dyn Surface>,
    cursor_sink: Box<dyn CursorSink>,
    /// Last cursor pushed to the sink, to skip redundant writes.
    cursor: Cursor,
    /// Pointer state from the most recent move.
    last_sample: Option<PointerSample>,
    events: EventDispatcher,
}

impl DragControls {
    /// Create active controls over `objects`.
    pub fn new(
        objects: Vec<BodyId>,
        surface: Box<dyn Surface>,
        cursor_sink: Box<dyn CursorSink>,
    ) -> Self {
        Self {
            objects,
            state: InteractionState::Idle,
            lifecycle: Lifecycle::Active,
            surface,
            cursor_sink,
            cursor: Cursor::Default,
            last_sample: None,
            events: EventDispatcher::new(),
        }
    }

    // -- Lifecycle --

    /// Resume processing pointer input. No effect once disposed.
    pub fn activate(&mut self) {
        match self.lifecycle {
            Lifecycle::Inactive => self.lifecycle = Lifecycle::Active,
            Lifecycle::Active => {}
            Lifecycle::Disposed => log::warn!("drag controls: activate() after dispose() ignored"),
        }
    }

    /// Stop processing pointer input. An in-progress drag ends (with
    /// `dragend`) and any hover is released (with `hoveroff`).
    pub fn deactivate(&mut self, scene: &mut Scene) {
        if self.lifecycle != Lifecycle::Active {
            return;
        }
        self.release(scene);
        self.lifecycle = Lifecycle::Inactive;
    }

    /// Deactivate for good and drop all listeners. Closing events from the
    /// final release stay queued for `drain_events`.
    pub fn dispose(&mut self, scene: &mut Scene) {
        self.deactivate(scene);
        self.lifecycle = Lifecycle::Disposed;
        self.events.clear_listeners();
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    // -- Listeners --

    pub fn add_listener(
        &mut self,
        kind: ControlEventKind,
        callback: impl FnMut(&ControlEvent) + 'static,
    ) -> ListenerId {
        self.events.add_listener(kind, callback)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.events.remove_listener(id)
    }

    /// Events emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<ControlEvent> {
        self.events.drain()
    }

    // -- State queries --

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Body currently being dragged.
    pub fn selected(&self) -> Option<BodyId> {
        match self.state {
            InteractionState::Dragging { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Body currently hovered (not dragged).
    pub fn hovered(&self) -> Option<BodyId> {
        match self.state {
            InteractionState::Hovering(body) => Some(body),
            _ => None,
        }
    }

    pub fn is_dragging(&self, id: BodyId) -> bool {
        self.selected() == Some(id)
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn last_sample(&self) -> Option<PointerSample> {
        self.last_sample
    }

    pub fn objects(&self) -> &[BodyId] {
        &self.objects
    }

    // -- Pointer handlers --

    /// Pointer moved to `client` (viewport pixels).
    pub fn pointer_move(&mut self, client: Vec2, camera: &PerspectiveCamera, scene: &mut Scene) {
        if !self.is_active() {
            return;
        }
        let Some(sample) = sample_pointer(client, self.surface.as_ref(), camera) else {
            return;
        };
        self.last_sample = Some(sample);

        if let InteractionState::Dragging { body, drag } = self.state {
            if let Some(target) = drag.solve(&sample.ray) {
                if let Some(b) = scene.get_mut(body) {
                    b.position = target;
                }
            }
            self.emit(ControlEventKind::Drag, body);
            return;
        }

        let hit = hit_test(&sample.ray, scene, &self.objects).map(|h| h.body);
        match (self.state, hit) {
            (InteractionState::Idle, Some(body)) => {
                self.emit(ControlEventKind::HoverOn, body);
                self.set_cursor(Cursor::Pointer);
                self.state = InteractionState::Hovering(body);
            }
            (InteractionState::Hovering(current), Some(body)) if current != body => {
                self.emit(ControlEventKind::HoverOff, current);
                self.emit(ControlEventKind::HoverOn, body);
                self.set_cursor(Cursor::Pointer);
                self.state = InteractionState::Hovering(body);
            }
            (InteractionState::Hovering(current), None) => {
                self.emit(ControlEventKind::HoverOff, current);
                self.set_cursor(Cursor::Grab);
                self.state = InteractionState::Idle;
            }
            _ => {}
        }
    }

    /// Pointer pressed at `client`. Starts a drag when a body is under it.
    pub fn pointer_down(&mut self, client: Vec2, camera: &PerspectiveCamera, scene: &mut Scene) {
        if !self.is_active() {
            return;
        }
        let Some(sample) = sample_pointer(client, self.surface.as_ref(), camera) else {
            return;
        };
        self.last_sample = Some(sample);

        let Some(hit) = hit_test(&sample.ray, scene, &self.objects) else {
            return;
        };
        let Some(body_position) = scene.get(hit.body).map(|b| b.position) else {
            return;
        };

        // A press without an intervening release: close the old drag first.
        // A hover is taken over by the drag silently.
        if let InteractionState::Dragging { body, .. } = self.state {
            self.emit(ControlEventKind::DragEnd, body);
        }

        let drag = DragPlane::begin(&sample.ray, camera.forward(), body_position);
        self.state = InteractionState::Dragging { body: hit.body, drag };
        self.set_cursor(Cursor::Grabbing);
        self.emit(ControlEventKind::DragStart, hit.body);
    }

    /// Pointer released. Ends the drag, if any.
    pub fn pointer_up(&mut self, scene: &mut Scene) {
        if !self.is_active() {
            return;
        }
        match self.state {
            InteractionState::Dragging { body, .. } => {
                self.emit(ControlEventKind::DragEnd, body);
                self.state = InteractionState::Idle;
                self.set_cursor(Cursor::Grab);
                if let Some(b) = scene.get(body) {
                    log::debug!("drag controls: released {} at {}", b.tag, b.position);
                }
            }
            InteractionState::Idle | InteractionState::Hovering(_) => self.set_cursor(Cursor::Grab),
        }
    }

    // -- Internals --

    /// Leave whatever state we are in, emitting the closing event.
    fn release(&mut self, scene: &mut Scene) {
        match self.state {
            InteractionState::Dragging { .. } => self.pointer_up(scene),
            InteractionState::Hovering(body) => {
                self.emit(ControlEventKind::HoverOff, body);
                self.state = InteractionState::Idle;
            }
            InteractionState::Idle => {}
        }
        self.set_cursor(Cursor::Default);
    }

    fn emit(&mut self, kind: ControlEventKind, body: BodyId) {
        if kind != ControlEventKind::Drag {
            log::debug!("drag controls: {} {:?}", kind, body);
        }
        self.events.dispatch(ControlEvent { kind, body });
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.cursor_sink.set_cursor(cursor);
        }
    }
}
