/// Cursor affordance shown over the interactive surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Over a draggable body.
    Pointer,
    /// Over empty space, drag available.
    Grab,
    /// Dragging a body.
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` value.
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// Presentation-layer hook for cursor changes.
pub trait CursorSink {
    fn set_cursor(&mut self, cursor: Cursor);
}

/// Keeps the last cursor set. Used when no presentation layer is attached.
impl CursorSink for Cursor {
    fn set_cursor(&mut self, cursor: Cursor) {
        *self = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_names() {
        assert_eq!(Cursor::Pointer.as_css(), "pointer");
        assert_eq!(Cursor::Grabbing.as_css(), "grabbing");
    }

    #[test]
    fn cursor_value_is_its_own_sink() {
        let mut sink = Cursor::default();
        sink.set_cursor(Cursor::Grab);
        assert_eq!(sink, Cursor::Grab);
    }
}
