//! Section anchors and scroll behavior for the single-page layout.
//!
//! Navigation never routes: every nav action resolves a [`Section`] to the
//! id of an anchor already present in the rendered document and asks the
//! browser to scroll it into view.

use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Vertical offset (px) past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// True once the page has been scrolled past [`SCROLL_THRESHOLD`].
pub fn past_scroll_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Services,
    Projects,
    Contact,
}

impl Section {
    /// Menu order, top of page first.
    pub const NAV: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Id of the document anchor this section scrolls to. "Home" targets the
    /// hero banner; every other section owns an anchor named after itself.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Home => "hero",
            Section::About => "about",
            Section::Services => "services",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

/// Smooth-scrolls the section's anchor into view. A missing anchor makes
/// this a no-op rather than an error.
pub fn scroll_to_section(section: Section) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section.anchor_id()));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("no anchor {:?} in document, skipping scroll", section.anchor_id()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_targets_the_hero_anchor() {
        assert_eq!(Section::Home.anchor_id(), "hero");
    }

    #[test]
    fn other_sections_target_their_lowercased_name() {
        for section in [
            Section::About,
            Section::Services,
            Section::Projects,
            Section::Contact,
        ] {
            assert_eq!(section.anchor_id(), section.label().to_lowercase());
        }
    }

    #[test]
    fn nav_anchors_are_distinct() {
        let mut ids: Vec<_> = Section::NAV.iter().map(|s| s.anchor_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Section::NAV.len());
    }

    #[test]
    fn scroll_flag_flips_exactly_past_50px() {
        assert!(!past_scroll_threshold(0.0));
        assert!(!past_scroll_threshold(50.0));
        assert!(past_scroll_threshold(50.1));
        assert!(past_scroll_threshold(51.0));
    }
}
