pub mod camera;
pub mod instance;
pub mod traits;

pub use camera::{CameraConfig, PerspectiveCamera};
pub use instance::{rgb_from_hex, BodyInstance, InstanceBuffer};
pub use traits::{rgba, Canvas2D};
