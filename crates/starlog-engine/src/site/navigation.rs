//! In-page section navigation.
//!
//! Nav links either point at another page (left to the browser) or at a
//! section id on this page. Exactly one link and one section are active.

/// What a nav link click should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// The href names another page; let the browser follow it.
    FollowLink,
    /// Target missing or already active.
    Ignored,
    /// The active link and section changed; the section's content should
    /// be animated.
    Switched { link: usize, section: String },
}

/// Active-section bookkeeping for a page's nav links and sections.
#[derive(Debug, Clone)]
pub struct SectionNav {
    links: Vec<String>,
    sections: Vec<String>,
    active_link: Option<usize>,
    active_section: Option<String>,
}

impl SectionNav {
    /// `links` are the hrefs of the nav links in document order, `sections`
    /// the ids of the content sections. `active_link` and `active_section`
    /// reflect the markup's initial `active` classes.
    pub fn new(
        links: Vec<String>,
        sections: Vec<String>,
        active_link: Option<usize>,
        active_section: Option<String>,
    ) -> Self {
        Self {
            links,
            sections,
            active_link,
            active_section,
        }
    }

    pub fn active_link(&self) -> Option<usize> {
        self.active_link
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Handle a click on the link at `index`.
    pub fn click(&mut self, index: usize) -> NavOutcome {
        let Some(href) = self.links.get(index) else {
            return NavOutcome::Ignored;
        };
        if is_page_link(href) {
            return NavOutcome::FollowLink;
        }
        let target = section_id(href);
        if !self.sections.iter().any(|s| s == target)
            || self.active_section.as_deref() == Some(target)
        {
            return NavOutcome::Ignored;
        }
        let section = target.to_string();
        log::debug!("nav: switching to section '{}'", section);
        self.active_link = Some(index);
        self.active_section = Some(section.clone());
        NavOutcome::Switched { link: index, section }
    }

    /// The link whose href equals a location hash, if any.
    pub fn link_for_hash(&self, hash: &str) -> Option<usize> {
        if hash.is_empty() {
            return None;
        }
        self.links.iter().position(|href| href == hash)
    }
}

/// Hrefs pointing at another document.
pub fn is_page_link(href: &str) -> bool {
    href.contains(".html")
}

/// Section id an in-page href targets (the href minus its leading `#`).
pub fn section_id(href: &str) -> &str {
    let mut chars = href.chars();
    chars.next();
    chars.as_str()
}

/// Whether a location hash should skip the cover and open the log directly.
pub fn is_direct_entry(hash: &str, direct_entry_hash: &str) -> bool {
    !hash.is_empty() && hash == direct_entry_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> SectionNav {
        SectionNav::new(
            vec!["#about".into(), "#research".into(), "notes.html".into(), "#missing".into()],
            vec!["about".into(), "research".into()],
            Some(0),
            Some("about".into()),
        )
    }

    #[test]
    fn switching_updates_active() {
        let mut nav = nav();
        assert_eq!(
            nav.click(1),
            NavOutcome::Switched { link: 1, section: "research".into() }
        );
        assert_eq!(nav.active_link(), Some(1));
        assert_eq!(nav.active_section(), Some("research"));
    }

    #[test]
    fn clicking_active_section_is_ignored() {
        let mut nav = nav();
        assert_eq!(nav.click(0), NavOutcome::Ignored);
        assert_eq!(nav.active_link(), Some(0));
    }

    #[test]
    fn page_links_and_missing_targets() {
        let mut nav = nav();
        assert_eq!(nav.click(2), NavOutcome::FollowLink);
        assert_eq!(nav.click(3), NavOutcome::Ignored);
        assert_eq!(nav.click(99), NavOutcome::Ignored);
        assert_eq!(nav.active_section(), Some("about"));
    }

    #[test]
    fn hash_selects_link() {
        let nav = nav();
        assert_eq!(nav.link_for_hash("#research"), Some(1));
        assert_eq!(nav.link_for_hash("#nope"), None);
        assert_eq!(nav.link_for_hash(""), None);
    }

    #[test]
    fn direct_entry_hash() {
        assert!(is_direct_entry("#research", "#research"));
        assert!(!is_direct_entry("#about", "#research"));
        assert!(!is_direct_entry("", ""));
    }
}
