//! Page State
//!
//! The single state record behind the page. Every input arrives as an
//! `Action`; `apply` mutates the record and returns the side effects the
//! binding layer must carry out. The DOM only renders this record.

use tracing::debug;

use crate::checklist::ChecklistState;
use crate::config::STARTUP_EXPANDED_DAY;
use crate::content::SiteContent;
use crate::effects::RevealState;
use crate::itinerary::ItineraryState;
use crate::keyboard::{key_command, KeyCommand};
use crate::nav::{NavState, SectionBounds};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleMenu,
    /// Nav link click, click outside the menu, or Escape
    CloseMenu,
    ToggleDay(u8),
    /// Raw `KeyboardEvent.key` from the document
    KeyPressed(String),
    SetChecked { index: usize, checked: bool },
    Scrolled { scroll_y: f64, sections: Vec<SectionBounds> },
    CardVisible(usize),
}

/// Side effects requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Scale a checklist item up and back after a short delay
    PulseChecklistItem(usize),
    /// The completion banner was just inserted
    ShowCompletionBanner,
    /// A card intersected the viewport for the first time
    RevealCard(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub nav: NavState,
    pub itinerary: ItineraryState,
    pub checklist: ChecklistState,
    pub reveal: RevealState,
}

impl PageState {
    /// Fresh state with every day collapsed
    pub fn new(day_count: usize, checklist_len: usize) -> Self {
        Self {
            nav: NavState::new(),
            itinerary: ItineraryState::new(day_count),
            checklist: ChecklistState::new(checklist_len),
            reveal: RevealState::new(),
        }
    }

    /// State at page load: the first day starts expanded
    pub fn startup(day_count: usize, checklist_len: usize) -> Self {
        let mut state = Self::new(day_count, checklist_len);
        state.itinerary.toggle_day(STARTUP_EXPANDED_DAY);
        state
    }

    pub fn for_content(content: &SiteContent) -> Self {
        Self::startup(content.days.len(), content.practical.checklist.len())
    }

    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::ToggleMenu => {
                let open = self.nav.toggle_menu();
                debug!(open, "menu toggled");
                Vec::new()
            }
            Action::CloseMenu => {
                if self.nav.close_menu() {
                    debug!("menu closed");
                }
                Vec::new()
            }
            Action::ToggleDay(day) => {
                match self.itinerary.toggle_day(day) {
                    Some(expanded) => debug!(day, expanded, "day toggled"),
                    None => debug!(day, "no such day"),
                }
                Vec::new()
            }
            Action::KeyPressed(key) => match key_command(&key) {
                Some(KeyCommand::CloseMenu) => self.apply(Action::CloseMenu),
                Some(KeyCommand::ToggleDay(day)) => self.apply(Action::ToggleDay(day)),
                None => Vec::new(),
            },
            Action::SetChecked { index, checked } => {
                let Some(change) = self.checklist.set_checked(index, checked) else {
                    return Vec::new();
                };
                debug!(
                    index,
                    checked,
                    percent = change.progress.percent(),
                    "checklist progress"
                );

                let mut effects = Vec::new();
                if checked {
                    effects.push(Effect::PulseChecklistItem(index));
                }
                if change.banner_inserted {
                    effects.push(Effect::ShowCompletionBanner);
                }
                effects
            }
            Action::Scrolled { scroll_y, sections } => {
                if self.nav.update_active_section(scroll_y, &sections) {
                    debug!(section = ?self.nav.active_section(), "active section changed");
                }
                Vec::new()
            }
            Action::CardVisible(index) => {
                if self.reveal.reveal(index) {
                    vec![Effect::RevealCard(index)]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageState {
        PageState::startup(5, 3)
    }

    #[test]
    fn test_startup_expands_first_day() {
        let state = page();
        assert_eq!(state.itinerary.expanded_days(), vec![1]);
        assert!(!state.nav.is_menu_open());
        assert!(!state.checklist.banner_shown());
    }

    #[test]
    fn test_click_then_key_toggles_same_day() {
        let mut state = page();
        state.apply(Action::ToggleDay(3));
        assert_eq!(state.itinerary.expanded_days(), vec![1, 3]);
        assert!(!state.itinerary.is_expanded(2));

        state.apply(Action::KeyPressed("3".into()));
        assert_eq!(state.itinerary.expanded_days(), vec![1]);
    }

    #[test]
    fn test_non_shortcut_keys_leave_itinerary_alone() {
        let mut state = page();
        let before = state.clone();
        for key in ["0", "6", "9", "x", "Tab"] {
            assert!(state.apply(Action::KeyPressed(key.into())).is_empty());
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_escape_closes_menu() {
        let mut state = page();
        state.apply(Action::ToggleMenu);
        assert!(state.nav.is_menu_open());
        state.apply(Action::KeyPressed("Escape".into()));
        assert!(!state.nav.is_menu_open());
        state.apply(Action::KeyPressed("Escape".into()));
        assert!(!state.nav.is_menu_open());
    }

    #[test]
    fn test_checklist_effects() {
        let mut state = page();
        assert_eq!(
            state.apply(Action::SetChecked { index: 0, checked: true }),
            vec![Effect::PulseChecklistItem(0)]
        );
        state.apply(Action::SetChecked { index: 1, checked: true });
        assert_eq!(
            state.apply(Action::SetChecked { index: 2, checked: true }),
            vec![Effect::PulseChecklistItem(2), Effect::ShowCompletionBanner]
        );

        // uncheck and recheck: pulse only
        assert!(state.apply(Action::SetChecked { index: 2, checked: false }).is_empty());
        assert_eq!(
            state.apply(Action::SetChecked { index: 2, checked: true }),
            vec![Effect::PulseChecklistItem(2)]
        );
        assert!(state.checklist.banner_shown());
    }

    #[test]
    fn test_unknown_checklist_item_has_no_effects() {
        let mut state = page();
        assert!(state.apply(Action::SetChecked { index: 9, checked: true }).is_empty());
    }

    #[test]
    fn test_scroll_updates_active_section() {
        let mut state = page();
        let sections = vec![
            SectionBounds::new("home", 0.0, 700.0),
            SectionBounds::new("itinerary", 700.0, 900.0),
        ];
        state.apply(Action::Scrolled { scroll_y: 650.0, sections: sections.clone() });
        assert_eq!(state.nav.active_section(), Some("itinerary"));
        assert!(state.nav.is_link_active("#itinerary"));
        assert!(!state.nav.is_link_active("#home"));

        state.apply(Action::Scrolled { scroll_y: 5000.0, sections });
        assert_eq!(state.nav.active_section(), None);
    }

    #[test]
    fn test_scroll_within_section_leaves_state_unchanged() {
        let mut state = page();
        let sections = vec![
            SectionBounds::new("home", 0.0, 700.0),
            SectionBounds::new("itinerary", 700.0, 900.0),
        ];
        state.apply(Action::Scrolled { scroll_y: 10.0, sections: sections.clone() });
        let before = state.clone();
        for y in [20.0, 300.0, 599.0] {
            state.apply(Action::Scrolled { scroll_y: y, sections: sections.clone() });
            assert_eq!(state, before, "scroll_y={}", y);
        }
        state.apply(Action::Scrolled { scroll_y: 650.0, sections });
        assert_ne!(state, before);
    }

    #[test]
    fn test_card_reveal_once() {
        let mut state = page();
        assert_eq!(state.apply(Action::CardVisible(4)), vec![Effect::RevealCard(4)]);
        assert!(state.apply(Action::CardVisible(4)).is_empty());
    }
}
