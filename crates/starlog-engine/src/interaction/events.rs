//! Interaction events and their subscriber registry.
//!
//! Listeners register a callback per event kind. Every emitted event is also
//! queued so an owner can drain them as one tagged stream (the cover scene
//! does this to drive the orbit updater and the JS event buffer).

use std::fmt;
use crate::api::types::BodyId;

/// Named lifecycle events of the drag controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlEventKind {
    HoverOn,
    HoverOff,
    DragStart,
    Drag,
    DragEnd,
}

impl ControlEventKind {
    /// Event name as exposed to JavaScript listeners.
    pub fn name(self) -> &'static str {
        match self {
            ControlEventKind::HoverOn => "hoveron",
            ControlEventKind::HoverOff => "hoveroff",
            ControlEventKind::DragStart => "dragstart",
            ControlEventKind::Drag => "drag",
            ControlEventKind::DragEnd => "dragend",
        }
    }

    /// Numeric code used in the wire event buffer.
    pub fn code(self) -> u32 {
        match self {
            ControlEventKind::HoverOn => 1,
            ControlEventKind::HoverOff => 2,
            ControlEventKind::DragStart => 3,
            ControlEventKind::Drag => 4,
            ControlEventKind::DragEnd => 5,
        }
    }
}

impl fmt::Display for ControlEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An emitted event and the body it concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlEvent {
    pub kind: ControlEventKind,
    pub body: BodyId,
}

/// Handle for removing a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

type Callback = Box<dyn FnMut(&ControlEvent)>;

struct Listener {
    id: ListenerId,
    kind: ControlEventKind,
    callback: Callback,
}

/// Per-kind callback registry plus a drainable queue of emitted events.
#[derive(Default)]
pub struct EventDispatcher {
    listeners: Vec<Listener>,
    pending: Vec<ControlEvent>,
    next_id: u32,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for events of `kind`.
    pub fn add_listener(
        &mut self,
        kind: ControlEventKind,
        callback: impl FnMut(&ControlEvent) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            kind,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Queue the event and call every listener registered for its kind,
    /// in registration order.
    pub fn dispatch(&mut self, event: ControlEvent) {
        self.pending.push(event);
        for listener in self.listeners.iter_mut().filter(|l| l.kind == event.kind) {
            (listener.callback)(&event);
        }
    }

    /// Take all events emitted since the last drain.
    pub fn drain(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Drop every listener. Queued events stay until drained.
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }
}
