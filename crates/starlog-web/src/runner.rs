use glam::Vec2;
use web_sys::{Document, Element, HtmlCanvasElement, MouseEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use starlog_engine::{
    CoverConfig, CoverScene, EnterTransition, NavOutcome, PageAction, PageKind, PageState,
    ResearchCatalog, Scanner, SectionNav, SiteConfig, Starfield,
};
use starlog_engine::site::section_animations;
use starlog_engine::site::ANIMATED_SELECTOR;
use crate::canvas::WebCanvas;
use crate::dom::{self, DomSurface, ElementCursor, PointerBinding};

/// Cover scene plus the canvas its pointer listeners are bound to.
pub struct Cover {
    pub scene: CoverScene,
    pub element: Element,
    pub pointer: PointerBinding,
}

/// The two starfield canvases and their animation state.
pub struct Background {
    pub field: Starfield,
    pub stars: WebCanvas,
    pub streaks: WebCanvas,
}

/// Owns all per-page state. One per document, held in the bridge's
/// thread-local slot.
pub struct SiteRunner {
    config: SiteConfig,
    document: Document,
    page: PageState,
    warp: EnterTransition,
    cover: Option<Cover>,
    background: Option<Background>,
    nav: SectionNav,
    nav_links: Vec<Element>,
    sections: Vec<Element>,
    scanner: Scanner,
    tooltip: Option<Element>,
    research: ResearchCatalog,
}

impl SiteRunner {
    pub fn new(
        cover_config: &CoverConfig,
        config: SiteConfig,
        research: ResearchCatalog,
    ) -> Result<Self, JsValue> {
        let window = dom::window()?;
        let document = dom::document()?;
        let (width, height) = dom::viewport_size(&window);

        let kind = if dom::query(&document, ".research-detail-page").is_some() {
            PageKind::ResearchDetail
        } else {
            PageKind::Cover
        };

        let cover = match (kind, document.get_element_by_id("cover-canvas")) {
            (PageKind::Cover, Some(element)) => {
                let scene = CoverScene::new(
                    cover_config,
                    if height > 0.0 { width / height } else { 1.0 },
                    Box::new(DomSurface::new(element.clone())),
                    Box::new(ElementCursor::new(element.clone())),
                );
                let target = element.clone().into();
                Some(Cover { scene, element, pointer: PointerBinding::new(target) })
            }
            _ => None,
        };

        let background = match (
            canvas_by_id(&document, "starfield"),
            canvas_by_id(&document, "fast-particles"),
        ) {
            (Some(stars), Some(streaks)) => {
                let stars = WebCanvas::new(stars)?;
                let streaks = WebCanvas::new(streaks)?;
                stars.resize(width, height);
                streaks.resize(width, height);
                let field = Starfield::new(config.starfield, width, height, config.seed);
                Some(Background { field, stars, streaks })
            }
            _ => None,
        };

        let nav_links = dom::query_all(&document, ".nav-link");
        let sections = dom::query_all(&document, ".content-section");
        let nav = SectionNav::new(
            nav_links
                .iter()
                .map(|l| l.get_attribute("href").unwrap_or_default())
                .collect(),
            sections.iter().map(|s| s.id()).collect(),
            nav_links.iter().position(|l| l.class_list().contains("active")),
            sections
                .iter()
                .find(|s| s.class_list().contains("active"))
                .map(|s| s.id()),
        );

        Ok(Self {
            page: PageState::new(kind, config.reveal_delay_ms),
            warp: EnterTransition::new(config.enter_duration_ms),
            scanner: Scanner::new(config.tooltip_offset),
            tooltip: document.get_element_by_id("scan-tooltip"),
            config,
            document,
            cover,
            background,
            nav,
            nav_links,
            sections,
            research,
        })
    }

    pub fn cover(&self) -> Option<&CoverScene> {
        self.cover.as_ref().map(|c| &c.scene)
    }

    /// Research entries backing panel links and scanner text.
    pub fn research(&self) -> &ResearchCatalog {
        &self.research
    }

    pub fn nav_link_count(&self) -> usize {
        self.nav_links.len()
    }

    pub fn bind_cover_pointer(
        &mut self,
        event: &'static str,
        handler: impl FnMut(MouseEvent) + 'static,
    ) {
        if let Some(cover) = self.cover.as_mut() {
            cover.pointer.on(event, handler);
        }
    }

    // -- Cover --

    pub fn cover_pointer_move(&mut self, client: Vec2) {
        if let Some(cover) = self.cover.as_mut() {
            cover.scene.pointer_move(client);
        }
    }

    pub fn cover_pointer_down(&mut self, client: Vec2) {
        if let Some(cover) = self.cover.as_mut() {
            cover.scene.pointer_down(client);
        }
    }

    pub fn cover_pointer_up(&mut self) {
        if let Some(cover) = self.cover.as_mut() {
            cover.scene.pointer_up();
        }
    }

    /// Advance the cover by one frame. Returns false once the cover loop
    /// should stop.
    pub fn cover_tick(&mut self, dt: f32) -> bool {
        if !self.page.is_cover_loop_running() {
            return false;
        }
        match self.cover.as_mut() {
            Some(cover) => {
                cover.scene.tick(dt);
                true
            }
            None => false,
        }
    }

    pub fn set_cover_active(&mut self, active: bool) {
        if let Some(cover) = self.cover.as_mut() {
            if active {
                cover.scene.activate();
            } else {
                cover.scene.deactivate();
            }
        }
    }

    pub fn dispose_cover(&mut self) {
        if let Some(cover) = self.cover.as_mut() {
            cover.scene.dispose();
            cover.pointer.detach();
        }
    }

    // -- Page flow --

    /// Run the page's opening steps. `hash` is the location hash.
    pub fn open(&mut self, hash: &str) -> Result<(), JsValue> {
        if let Some(link) = self.nav.link_for_hash(hash) {
            self.nav_click(link);
        }
        let direct = starlog_engine::site::is_direct_entry(hash, &self.config.direct_entry_hash);
        let actions = self.page.open(direct);
        self.apply(&actions)
    }

    pub fn begin_warp(&mut self) -> bool {
        self.cover.is_some() && self.warp.begin()
    }

    pub fn cover_faded(&mut self) -> Result<(), JsValue> {
        let actions = self.page.cover_faded();
        self.apply(&actions)
    }

    /// Per animation frame: advance the warp and draw the starfield.
    pub fn frame(&mut self, timestamp_ms: f64) -> Result<(), JsValue> {
        if let Some(step) = self.warp.frame(timestamp_ms) {
            if let Some(cover) = self.cover.as_mut() {
                cover.scene.apply_warp(step.progress);
            }
            if step.finished {
                let actions = self.page.finish_warp();
                self.apply(&actions)?;
            }
        }
        if self.page.is_entered() {
            if let Some(bg) = self.background.as_mut() {
                bg.field.draw_stars(&mut bg.stars);
                bg.field.draw_particles(&mut bg.streaks);
            }
        }
        Ok(())
    }

    pub fn window_pointer(&mut self, client: Vec2) {
        if let Some(bg) = self.background.as_mut() {
            bg.field.set_pointer(client);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if let Some(cover) = self.cover.as_mut() {
            cover.scene.resize(width, height);
        }
        if let Some(bg) = self.background.as_ref() {
            bg.stars.resize(width, height);
            bg.streaks.resize(width, height);
        }
    }

    // -- Navigation --

    /// Handle a nav link click. Returns true when the browser's default
    /// navigation should be suppressed.
    pub fn nav_click(&mut self, index: usize) -> bool {
        match self.nav.click(index) {
            NavOutcome::FollowLink => false,
            NavOutcome::Ignored => true,
            NavOutcome::Switched { link, section } => {
                for l in &self.nav_links {
                    dom::remove_class(l, "active");
                }
                if let Some(l) = self.nav_links.get(link) {
                    dom::add_class(l, "active");
                }
                for s in &self.sections {
                    dom::remove_class(s, "active");
                }
                if let Some(target) = self.sections.iter().find(|s| s.id() == section) {
                    dom::add_class(target, "active");
                    animate_section(target, self.config.stagger);
                }
                true
            }
        }
    }

    // -- Scanner --

    pub fn scan_enter(&mut self, info: &str) {
        self.scanner.enter(info);
        if let Some(tooltip) = self.tooltip.as_ref() {
            tooltip.set_text_content(Some(self.scanner.text()));
            dom::set_style(tooltip, "opacity", self.scanner.opacity_css());
        }
    }

    pub fn scan_move(&mut self, client: Vec2) {
        self.scanner.track(client);
        if let Some(tooltip) = self.tooltip.as_ref() {
            let (left, top) = self.scanner.position_css();
            dom::set_style(tooltip, "left", &left);
            dom::set_style(tooltip, "top", &top);
        }
    }

    pub fn scan_leave(&mut self) {
        self.scanner.leave();
        if let Some(tooltip) = self.tooltip.as_ref() {
            dom::set_style(tooltip, "opacity", self.scanner.opacity_css());
        }
    }

    // -- Internals --

    fn apply(&self, actions: &[PageAction]) -> Result<(), JsValue> {
        let container = dom::query(&self.document, ".container");
        let cover_page = self.document.get_element_by_id("cover-page");
        for action in actions {
            match *action {
                PageAction::FadeOutCover => {
                    if let Some(cover) = cover_page.as_ref() {
                        dom::set_style(cover, "opacity", "0");
                    }
                }
                PageAction::HideCover => {
                    if let Some(cover) = cover_page.as_ref() {
                        dom::set_style(cover, "display", "none");
                    }
                }
                PageAction::StopCoverLoop => {
                    log::info!("site: cover loop stopped");
                }
                PageAction::ShowContainer => {
                    if let Some(c) = container.as_ref() {
                        dom::set_style(c, "display", "flex");
                    }
                    if let Some(body) = self.document.body() {
                        dom::add_class(&body, "site-entered");
                    }
                }
                PageAction::SetContainerOpaque { delay_ms } => {
                    if let Some(c) = container.clone() {
                        if delay_ms == 0 {
                            dom::set_style(&c, "opacity", "1");
                        } else {
                            dom::after(delay_ms, move || dom::set_style(&c, "opacity", "1"))?;
                        }
                    }
                }
                PageAction::AnimateActiveSection { delay_ms } => {
                    let document = self.document.clone();
                    let stagger = self.config.stagger;
                    dom::after(delay_ms, move || {
                        if let Some(section) = dom::query(&document, ".content-section.active") {
                            animate_section(&section, stagger);
                        }
                    })?;
                }
            }
        }
        Ok(())
    }
}

/// Restart the staggered entrance animation of a section's text.
fn animate_section(section: &Element, stagger: f32) {
    let items = dom::query_all_in(section, ANIMATED_SELECTOR);
    let tags: Vec<String> = items.iter().map(|el| el.tag_name()).collect();
    let animations = section_animations(tags.iter().map(String::as_str), stagger);
    for (item, animation) in items.iter().zip(animations) {
        dom::set_style(item, "animation", "none");
        // Reading layout forces a reflow so the animation restarts.
        if let Some(el) = item.dyn_ref::<web_sys::HtmlElement>() {
            let _ = el.offset_width();
        }
        dom::set_style(item, "animation", &animation);
    }
}

fn canvas_by_id(document: &Document, id: &str) -> Option<HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
}
