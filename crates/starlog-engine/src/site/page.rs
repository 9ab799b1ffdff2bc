//! Page-level state: whether the visitor is still on the cover or has
//! entered the site, and the DOM changes each step requires.

/// A DOM change the browser glue carries out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Start the cover's opacity fade.
    FadeOutCover,
    /// Remove the cover from layout.
    HideCover,
    /// Cancel the cover's animation frame loop.
    StopCoverLoop,
    /// Show the main container and mark the body `site-entered`.
    ShowContainer,
    /// Set the main container's opacity to 1 after a delay.
    SetContainerOpaque { delay_ms: u32 },
    /// Play the entrance animation of the active section after a delay.
    AnimateActiveSection { delay_ms: u32 },
}

/// Which kind of document the script runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Index page with the 3D cover.
    Cover,
    /// Standalone research detail page; no cover.
    ResearchDetail,
}

#[derive(Debug, Clone)]
pub struct PageState {
    kind: PageKind,
    entered: bool,
    cover_shown: bool,
    cover_loop_running: bool,
    reveal_delay_ms: u32,
}

impl PageState {
    pub fn new(kind: PageKind, reveal_delay_ms: u32) -> Self {
        let has_cover = kind == PageKind::Cover;
        Self {
            kind,
            entered: false,
            cover_shown: has_cover,
            cover_loop_running: has_cover,
            reveal_delay_ms,
        }
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// Whether the site content is showing (the starfield animates only then).
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn is_cover_shown(&self) -> bool {
        self.cover_shown
    }

    pub fn is_cover_loop_running(&self) -> bool {
        self.cover_loop_running
    }

    /// Actions to run once the document is ready. `direct_entry` is true
    /// when the location hash asks to skip the cover.
    pub fn open(&mut self, direct_entry: bool) -> Vec<PageAction> {
        match self.kind {
            PageKind::ResearchDetail => {
                self.entered = true;
                vec![
                    PageAction::ShowContainer,
                    PageAction::SetContainerOpaque { delay_ms: 0 },
                    PageAction::AnimateActiveSection { delay_ms: self.reveal_delay_ms },
                ]
            }
            PageKind::Cover if direct_entry => {
                log::info!("page: direct entry, skipping cover");
                self.entered = true;
                self.cover_shown = false;
                self.cover_loop_running = false;
                vec![
                    PageAction::HideCover,
                    PageAction::StopCoverLoop,
                    PageAction::ShowContainer,
                    PageAction::SetContainerOpaque { delay_ms: self.reveal_delay_ms },
                    PageAction::AnimateActiveSection { delay_ms: self.reveal_delay_ms },
                ]
            }
            PageKind::Cover => Vec::new(),
        }
    }

    /// The enter warp completed.
    pub fn finish_warp(&mut self) -> Vec<PageAction> {
        if self.entered {
            return Vec::new();
        }
        self.entered = true;
        vec![
            PageAction::FadeOutCover,
            PageAction::ShowContainer,
            PageAction::SetContainerOpaque { delay_ms: self.reveal_delay_ms },
            PageAction::AnimateActiveSection { delay_ms: self.reveal_delay_ms },
        ]
    }

    /// The cover's fade-out transition ended. Transitions that end before
    /// the visitor entered are not the fade-out and are ignored.
    pub fn cover_faded(&mut self) -> Vec<PageAction> {
        if !self.entered || !self.cover_shown {
            return Vec::new();
        }
        self.cover_shown = false;
        self.cover_loop_running = false;
        vec![PageAction::HideCover, PageAction::StopCoverLoop]
    }
}
