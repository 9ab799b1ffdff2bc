//! Site behavior around the cover: enter transition, navigation, content
//! animation, scanner tooltip and research panels. DOM-free; the web crate
//! applies the results.

pub mod content;
pub mod navigation;
pub mod page;
pub mod research;
pub mod scanner;
pub mod transition;

pub use content::{entrance_animation, section_animations, ANIMATED_SELECTOR};
pub use navigation::{is_direct_entry, NavOutcome, SectionNav};
pub use page::{PageAction, PageKind, PageState};
pub use research::{panel_destination, ResearchCatalog, ResearchEntry};
pub use scanner::Scanner;
pub use transition::{EnterTransition, WarpState, WarpStep};
