//! Browser bridge for starlog.
//!
//! `starlog_init` builds the page's `SiteRunner` and binds DOM listeners.
//! The page's JS render loop then calls `cover_tick` and `site_frame` every
//! animation frame and reads the body instance, event and star cloud
//! buffers through the pointer/count accessors below.

use std::cell::RefCell;
use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{Event, MouseEvent};
use starlog_engine::{CoverConfig, CoverScene, ResearchCatalog, SiteConfig, WireEvent, BodyInstance};

pub mod canvas;
pub mod dom;
pub mod runner;

pub use runner::SiteRunner;

thread_local! {
    static RUNNER: RefCell<Option<SiteRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SiteRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Site not initialized. Call starlog_init() first.");
        f(runner)
    })
}

/// Read from the cover scene, or `default` on pages without one.
fn with_cover<R>(default: R, f: impl FnOnce(&CoverScene) -> R) -> R {
    with_runner(|r| r.cover().map(f).unwrap_or(default))
}

fn client(event: &MouseEvent) -> Vec2 {
    Vec2::new(event.client_x() as f32, event.client_y() as f32)
}

fn parse<T: Default, E: std::fmt::Display>(
    json: &str,
    from_json: fn(&str) -> Result<T, E>,
) -> Result<T, JsValue> {
    if json.trim().is_empty() {
        return Ok(T::default());
    }
    from_json(json).map_err(|e| JsValue::from_str(&format!("invalid config: {e}")))
}

/// Build the page state and bind every listener. Empty config strings
/// select the defaults; an empty research catalog leaves panels and
/// scannables on their `data-href` / `data-scan-info` attributes.
#[wasm_bindgen]
pub fn starlog_init(
    cover_config_json: &str,
    site_config_json: &str,
    research_json: &str,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let cover_config = parse(cover_config_json, CoverConfig::from_json)?;
    let site_config = parse(site_config_json, SiteConfig::from_json)?;
    let research = parse(research_json, ResearchCatalog::from_json)?;
    log::info!("starlog: {} research entries", research.len());
    let loaded_delay = site_config.cover_loaded_delay_ms;

    let runner = SiteRunner::new(&cover_config, site_config, research)?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    bind_cover(loaded_delay)?;
    bind_page()?;

    let hash = dom::window()?.location().hash().unwrap_or_default();
    with_runner(|r| r.open(&hash))?;
    log::info!("starlog: initialized");
    Ok(())
}

fn bind_cover(loaded_delay_ms: u32) -> Result<(), JsValue> {
    with_runner(|r| {
        r.bind_cover_pointer("mousemove", |e: MouseEvent| {
            e.prevent_default();
            with_runner(|r| r.cover_pointer_move(client(&e)));
        });
        r.bind_cover_pointer("mousedown", |e: MouseEvent| {
            e.prevent_default();
            with_runner(|r| r.cover_pointer_down(client(&e)));
        });
        r.bind_cover_pointer("mouseup", |e: MouseEvent| {
            e.prevent_default();
            with_runner(|r| r.cover_pointer_up());
        });
    });

    let document = dom::document()?;
    let Some(cover_page) = document.get_element_by_id("cover-page") else {
        return Ok(());
    };
    if let Some(button) = document.get_element_by_id("enter-button") {
        dom::listen(&button, "click", |_: Event| {
            if with_runner(|r| r.begin_warp()) {
                log::info!("starlog: entering");
            }
        });
    }
    dom::listen(&cover_page, "transitionend", |_: Event| {
        if let Err(e) = with_runner(|r| r.cover_faded()) {
            log::warn!("starlog: cover fade: {:?}", e);
        }
    });
    let page = cover_page.clone();
    dom::after(loaded_delay_ms, move || dom::add_class(&page, "loaded"))
}

fn bind_page() -> Result<(), JsValue> {
    let window = dom::window()?;
    let document = dom::document()?;

    dom::listen(&window, "mousemove", |e: MouseEvent| {
        with_runner(|r| r.window_pointer(client(&e)));
    });
    dom::listen(&window, "resize", |_: Event| {
        if let Ok(window) = dom::window() {
            let (w, h) = dom::viewport_size(&window);
            with_runner(|r| r.resize(w, h));
        }
    });

    let link_count = with_runner(|r| r.nav_link_count());
    for (index, link) in dom::query_all(&document, ".nav-link").into_iter().enumerate().take(link_count) {
        dom::listen(&link, "click", move |e: Event| {
            if with_runner(|r| r.nav_click(index)) {
                e.prevent_default();
            }
        });
    }

    for el in dom::query_all(&document, ".scannable") {
        let attr = el.get_attribute("data-scan-info");
        let info = with_runner(|r| {
            r.research()
                .scan_info(&el.id(), attr.as_deref())
                .unwrap_or_default()
                .to_owned()
        });
        dom::listen(&el, "mouseenter", move |_: MouseEvent| {
            with_runner(|r| r.scan_enter(&info));
        });
        dom::listen(&el, "mousemove", |e: MouseEvent| {
            with_runner(|r| r.scan_move(client(&e)));
        });
        dom::listen(&el, "mouseleave", |_: MouseEvent| {
            with_runner(|r| r.scan_leave());
        });
    }

    for panel in dom::query_all(&document, ".research-panel") {
        let attr = panel.get_attribute("data-href");
        let target = with_runner(|r| {
            r.research()
                .destination(&panel.id(), attr.as_deref())
                .map(str::to_owned)
        });
        let Some(target) = target else {
            continue;
        };
        dom::listen(&panel, "click", move |_: Event| {
            if let Ok(window) = dom::window() {
                if window.location().set_href(&target).is_err() {
                    log::warn!("starlog: could not open {}", target);
                }
            }
        });
    }
    Ok(())
}

// ---- Frame ----

/// Advance the cover. Returns false once the cover is gone and its loop
/// should be cancelled.
#[wasm_bindgen]
pub fn cover_tick(dt: f32) -> bool {
    with_runner(|r| r.cover_tick(dt))
}

/// Advance the enter warp and redraw the starfield.
#[wasm_bindgen]
pub fn site_frame(timestamp_ms: f64) -> Result<(), JsValue> {
    with_runner(|r| r.frame(timestamp_ms))
}

// ---- Drag controls lifecycle ----

#[wasm_bindgen]
pub fn cover_activate() {
    with_runner(|r| r.set_cover_active(true));
}

#[wasm_bindgen]
pub fn cover_deactivate() {
    with_runner(|r| r.set_cover_active(false));
}

#[wasm_bindgen]
pub fn cover_dispose() {
    with_runner(|r| r.dispose_cover());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_cover(std::ptr::null(), |c| c.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_cover(0, |c| c.instance_count())
}

#[wasm_bindgen]
pub fn get_instance_floats() -> u32 {
    BodyInstance::FLOATS as u32
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_cover(std::ptr::null(), |c| c.events_ptr())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_cover(0, |c| c.events_len())
}

#[wasm_bindgen]
pub fn get_event_floats() -> u32 {
    WireEvent::FLOATS as u32
}

#[wasm_bindgen]
pub fn get_star_points_ptr() -> *const f32 {
    with_cover(std::ptr::null(), |c| c.star_cloud().points_ptr())
}

#[wasm_bindgen]
pub fn get_star_point_count() -> u32 {
    with_cover(0, |c| c.star_cloud().point_count())
}

#[wasm_bindgen]
pub fn get_star_rotation_y() -> f32 {
    with_cover(0.0, |c| c.star_cloud().rotation_y())
}

#[wasm_bindgen]
pub fn get_star_offset_z() -> f32 {
    with_cover(0.0, |c| c.star_cloud().offset_z())
}

#[wasm_bindgen]
pub fn get_star_point_size() -> f32 {
    with_cover(0.0, |c| c.star_cloud().point_size())
}

#[wasm_bindgen]
pub fn get_star_opacity() -> f32 {
    with_cover(0.0, |c| c.star_cloud().opacity())
}

/// Column-major view-projection matrix of the cover camera.
#[wasm_bindgen]
pub fn get_view_projection() -> Vec<f32> {
    with_cover(Vec::new(), |c| c.camera().view_projection().to_cols_array().to_vec())
}
