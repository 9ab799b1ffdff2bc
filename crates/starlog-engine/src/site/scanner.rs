//! Scanner tooltip that follows the pointer over scannable elements.

use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Scanner {
    /// Pixel offset from the pointer to the tooltip's top-left corner.
    offset: f32,
    text: String,
    visible: bool,
    position: Vec2,
}

impl Scanner {
    pub fn new(offset: f32) -> Self {
        Self {
            offset,
            text: String::new(),
            visible: false,
            position: Vec2::ZERO,
        }
    }

    /// Pointer entered a scannable element carrying `info`.
    pub fn enter(&mut self, info: &str) {
        self.text = info.to_string();
        self.visible = true;
    }

    pub fn track(&mut self, client: Vec2) {
        self.position = client + Vec2::splat(self.offset);
    }

    /// Hide; text and position are kept until the next enter.
    pub fn leave(&mut self) {
        self.visible = false;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// CSS opacity value.
    pub fn opacity_css(&self) -> &'static str {
        if self.visible {
            "1"
        } else {
            "0"
        }
    }

    /// CSS `left` and `top` values.
    pub fn position_css(&self) -> (String, String) {
        (
            format!("{}px", self.position.x),
            format!("{}px", self.position.y),
        )
    }
}
