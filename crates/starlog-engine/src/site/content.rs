//! Staggered entrance animations for the text of a content section.

/// Elements of a section that get an entrance animation, in document order.
pub const ANIMATED_SELECTOR: &str = "p, li, h4";

/// The CSS `animation` value for the `index`-th animated element.
/// Headings glitch in; everything else fades up. Each element starts
/// `stagger` seconds after the previous one.
pub fn entrance_animation(tag_name: &str, index: usize, stagger: f32) -> String {
    let delay = format_seconds(index as f32 * stagger);
    if tag_name.eq_ignore_ascii_case("h4") {
        format!("glitch 1s linear forwards {delay}s")
    } else {
        format!("fade-in-up 0.5s ease-out forwards {delay}s")
    }
}

/// Animation values for a whole section given its elements' tag names.
pub fn section_animations<'a>(
    tag_names: impl IntoIterator<Item = &'a str>,
    stagger: f32,
) -> Vec<String> {
    tag_names
        .into_iter()
        .enumerate()
        .map(|(i, tag)| entrance_animation(tag, i, stagger))
        .collect()
}

// Rounded to milliseconds so 3 * 0.05 prints as 0.15, not 0.15000001.
fn format_seconds(seconds: f32) -> String {
    let ms = (seconds * 1000.0).round() / 1000.0;
    format!("{ms}")
}
