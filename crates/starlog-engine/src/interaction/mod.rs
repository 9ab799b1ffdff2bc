//! Pointer interaction with the cover scene: picking, drag planes,
//! the hover/drag state machine and its event registry.

pub mod controls;
pub mod drag_plane;
pub mod events;
pub mod hit;

pub use controls::{DragControls, InteractionState, Lifecycle};
pub use drag_plane::DragPlane;
pub use events::{ControlEvent, ControlEventKind, EventDispatcher, ListenerId};
pub use hit::{hit_test, Hit};
