//! Thin helpers over web-sys plus the engine's DOM-facing seams.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, MouseEvent, NodeList, Window};
use starlog_engine::{Cursor, CursorSink, Surface, SurfaceRect};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> (f32, f32) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w as f32, h as f32)
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    elements(root.query_selector_all(selector))
}

/// Elements under `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    elements(root.query_selector_all(selector))
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        if el.style().set_property(property, value).is_err() {
            log::warn!("dom: could not set {} = {}", property, value);
        }
    }
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

/// Attach a listener for the lifetime of the page.
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("dom: could not listen for '{}'", event);
    }
    closure.forget();
}

/// Run `f` once after `delay_ms`.
pub fn after(delay_ms: u32, f: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let callback: js_sys::Function = Closure::once_into_js(f).unchecked_into();
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(&callback, delay_ms as i32)?;
    Ok(())
}

/// The cover canvas as a pick surface. Its rectangle is read from layout
/// on every call.
pub struct DomSurface {
    element: Element,
}

impl DomSurface {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl Surface for DomSurface {
    fn bounding_rect(&self) -> SurfaceRect {
        let rect = self.element.get_bounding_client_rect();
        SurfaceRect::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }
}

/// Writes cursor changes to an element's inline style.
pub struct ElementCursor {
    element: Element,
}

impl ElementCursor {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl CursorSink for ElementCursor {
    fn set_cursor(&mut self, cursor: Cursor) {
        set_style(&self.element, "cursor", cursor.as_css());
    }
}

type MouseClosure = Closure<dyn FnMut(MouseEvent)>;

/// Mouse listeners on the cover canvas. Held so they can be removed when
/// the controls are disposed.
pub struct PointerBinding {
    target: EventTarget,
    listeners: Vec<(&'static str, MouseClosure)>,
}

impl PointerBinding {
    pub fn new(target: EventTarget) -> Self {
        Self {
            target,
            listeners: Vec::new(),
        }
    }

    pub fn on(&mut self, event: &'static str, handler: impl FnMut(MouseEvent) + 'static) {
        let closure = MouseClosure::new(handler);
        if self
            .target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .is_ok()
        {
            self.listeners.push((event, closure));
        }
    }

    /// Remove every listener.
    pub fn detach(&mut self) {
        for (event, closure) in self.listeners.drain(..) {
            let _ = self
                .target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}
