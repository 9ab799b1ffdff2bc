//! Drawing seams the engine talks to. All real drawing happens in the
//! browser; these traits let engine code issue draw calls without a web
//! dependency and let tests record them.

/// The subset of the HTML canvas 2D context the starfield uses.
/// Method names and semantics follow `CanvasRenderingContext2D`.
pub trait Canvas2D {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_fill_style(&mut self, css: &str);
    fn set_stroke_style(&mut self, css: &str);
    fn begin_path(&mut self);
    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn fill(&mut self);
    fn stroke(&mut self);
}

/// CSS `rgba()` color string.
pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> String {
    format!("rgba({r}, {g}, {b}, {a})")
}

#[cfg(test)]
pub(crate) mod recording {
    use super::Canvas2D;

    /// Canvas that records calls as strings.
    pub struct RecordingCanvas {
        pub width: f32,
        pub height: f32,
        pub calls: Vec<String>,
    }

    impl RecordingCanvas {
        pub fn new(width: f32, height: f32) -> Self {
            Self { width, height, calls: Vec::new() }
        }

        pub fn count(&self, prefix: &str) -> usize {
            self.calls.iter().filter(|c| c.starts_with(prefix)).count()
        }
    }

    impl Canvas2D for RecordingCanvas {
        fn width(&self) -> f32 {
            self.width
        }
        fn height(&self) -> f32 {
            self.height
        }
        fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.calls.push(format!("clear {x} {y} {w} {h}"));
        }
        fn set_fill_style(&mut self, css: &str) {
            self.calls.push(format!("fill_style {css}"));
        }
        fn set_stroke_style(&mut self, css: &str) {
            self.calls.push(format!("stroke_style {css}"));
        }
        fn begin_path(&mut self) {
            self.calls.push("begin".into());
        }
        fn arc(&mut self, x: f32, y: f32, radius: f32, _start: f32, _end: f32) {
            self.calls.push(format!("arc {x} {y} {radius}"));
        }
        fn move_to(&mut self, x: f32, y: f32) {
            self.calls.push(format!("move {x} {y}"));
        }
        fn line_to(&mut self, x: f32, y: f32) {
            self.calls.push(format!("line {x} {y}"));
        }
        fn fill(&mut self) {
            self.calls.push("fill".into());
        }
        fn stroke(&mut self) {
            self.calls.push("stroke".into());
        }
    }
}
