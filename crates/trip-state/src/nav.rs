//! Navigation State
//!
//! Mobile menu flag and the active section link.

use serde::{Deserialize, Serialize};

use crate::config::{NAV_SCROLL_OFFSET_PX, SECTION_ACTIVATION_OFFSET_PX};

/// Icon shown on the mobile menu toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,
    Times,
}

impl MenuIcon {
    /// Font Awesome class for this icon
    pub fn class(self) -> &'static str {
        match self {
            MenuIcon::Bars => "fa-bars",
            MenuIcon::Times => "fa-times",
        }
    }
}

/// Measured position of a page section, in document coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Whether this section is current at the given scroll position
    pub fn contains(&self, scroll_y: f64) -> bool {
        let start = self.top - SECTION_ACTIVATION_OFFSET_PX;
        scroll_y >= start && scroll_y < start + self.height
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    menu_open: bool,
    active_section: Option<String>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn menu_icon(&self) -> MenuIcon {
        if self.menu_open { MenuIcon::Times } else { MenuIcon::Bars }
    }

    /// Flip the menu, returning the new open flag
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Close the menu. Returns true if it was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Recompute the active section for a scroll position.
    /// Returns true if it changed.
    pub fn update_active_section(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> bool {
        let current = section_at(scroll_y, sections).map(str::to_owned);
        if current == self.active_section {
            return false;
        }
        self.active_section = current;
        true
    }

    /// Whether a nav link with this href should carry the active class
    pub fn is_link_active(&self, href: &str) -> bool {
        match (&self.active_section, href.strip_prefix('#')) {
            (Some(active), Some(target)) => active == target,
            _ => false,
        }
    }
}

/// Section that is current at `scroll_y`.
///
/// Sections are checked in document order and a later match replaces an
/// earlier one, so overlapping ranges resolve to the lower section.
pub fn section_at(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| section.contains(scroll_y))
        .last()
        .map(|section| section.id.as_str())
}

/// Window scroll target for a nav link pointing at a section
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - NAV_SCROLL_OFFSET_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 600.0),
            SectionBounds::new("itinerary", 600.0, 1200.0),
            SectionBounds::new("attractions", 1800.0, 800.0),
        ]
    }

    #[test]
    fn test_toggle_menu_round_trip() {
        let mut nav = NavState::new();
        assert!(nav.toggle_menu());
        assert_eq!(nav.menu_icon(), MenuIcon::Times);
        assert!(!nav.toggle_menu());
        assert_eq!(nav.menu_icon(), MenuIcon::Bars);
        assert_eq!(nav, NavState::new());
    }

    #[test]
    fn test_close_menu_is_idempotent() {
        let mut nav = NavState::new();
        assert!(!nav.close_menu());
        nav.toggle_menu();
        assert!(nav.close_menu());
        assert!(!nav.close_menu());
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_section_threshold() {
        let s = sections();
        // itinerary starts counting 100px early
        assert_eq!(section_at(499.0, &s), Some("home"));
        assert_eq!(section_at(500.0, &s), Some("itinerary"));
        assert_eq!(section_at(1699.0, &s), Some("itinerary"));
        assert_eq!(section_at(1700.0, &s), Some("attractions"));
        assert_eq!(section_at(2500.0, &s), None);
    }

    #[test]
    fn test_section_before_first_offset() {
        let s = vec![SectionBounds::new("intro", 400.0, 200.0)];
        assert_eq!(section_at(0.0, &s), None);
        assert_eq!(section_at(300.0, &s), Some("intro"));
    }

    #[test]
    fn test_later_section_wins_on_overlap() {
        let s = vec![
            SectionBounds::new("a", 0.0, 1000.0),
            SectionBounds::new("b", 200.0, 300.0),
        ];
        assert_eq!(section_at(150.0, &s), Some("b"));
    }

    #[test]
    fn test_at_most_one_active_link() {
        let s = sections();
        let hrefs = ["#home", "#itinerary", "#attractions", "#practical"];
        let mut nav = NavState::new();
        for y in (0..3000).step_by(37) {
            nav.update_active_section(y as f64, &s);
            let active = hrefs.iter().filter(|h| nav.is_link_active(h)).count();
            let expected = usize::from(section_at(y as f64, &s).is_some());
            assert_eq!(active, expected, "scroll_y={}", y);
        }
    }

    #[test]
    fn test_update_reports_change() {
        let s = sections();
        let mut nav = NavState::new();
        assert!(nav.update_active_section(0.0, &s));
        assert!(!nav.update_active_section(10.0, &s));
        assert!(nav.update_active_section(3000.0, &s));
        assert_eq!(nav.active_section(), None);
    }

    #[test]
    fn test_link_must_be_fragment() {
        let mut nav = NavState::new();
        nav.update_active_section(0.0, &sections());
        assert!(nav.is_link_active("#home"));
        assert!(!nav.is_link_active("home"));
    }

    #[test]
    fn test_scroll_target_accounts_for_navbar() {
        assert_eq!(scroll_target(600.0), 520.0);
    }
}
