use bytemuck::{Pod, Zeroable};

/// Stable identifier of a body in the cover scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// Identifier of an orbit group (a local coordinate frame).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub u32);

/// An interaction event forwarded to JavaScript through a flat f32 buffer.
/// `kind` is the `ControlEventKind` code, `body` the body id, `x/y/z` the
/// body's world position when the event fired.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct WireEvent {
    pub kind: f32,
    pub body: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WireEvent {
    pub const FLOATS: usize = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_event_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<WireEvent>(), WireEvent::FLOATS * 4);
        let events = [WireEvent { kind: 4.0, body: 2.0, x: 1.0, y: 0.0, z: -1.0 }];
        let floats: &[f32] = bytemuck::cast_slice(&events);
        assert_eq!(floats, &[4.0, 2.0, 1.0, 0.0, -1.0]);
    }
}
