pub mod api;
pub mod core;
pub mod input;
pub mod interaction;
pub mod renderer;
pub mod site;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{BinaryConfig, CoverConfig, SiteConfig, StarConfig, SystemConfig};
pub use api::cover::CoverScene;
pub use api::types::{BodyId, GroupId, WireEvent};
pub use core::math::{Plane, Ray};
pub use core::scene::{Body, BodyKind, OrbitGroup, PickSphere, Scene};
pub use core::time::FrameClock;
pub use input::cursor::{Cursor, CursorSink};
pub use input::pointer::{client_to_ndc, sample_pointer, PointerSample, Surface, SurfaceRect};
pub use interaction::{
    hit_test, ControlEvent, ControlEventKind, DragControls, DragPlane, EventDispatcher, Hit,
    InteractionState, Lifecycle, ListenerId,
};
pub use renderer::{rgb_from_hex, rgba, BodyInstance, CameraConfig, Canvas2D, InstanceBuffer, PerspectiveCamera};
pub use systems::central::BinaryPair;
pub use systems::orbit::{OrbitParams, OrbitUpdater};
pub use systems::rng::Rng;
pub use systems::star_cloud::{StarCloud, StarCloudConfig};
pub use systems::starfield::{Starfield, StarfieldConfig};
pub use site::{
    EnterTransition, NavOutcome, PageAction, PageKind, PageState, ResearchCatalog, ResearchEntry,
    Scanner, SectionNav, WarpStep,
};
