//! Page Store
//!
//! Uses Leptos reactive_stores so components read the page state reactively
//! while every mutation goes through `PageState::apply`.

use leptos::prelude::*;
use reactive_stores::Store;
use trip_state::{Action, Effect, PageState, SiteContent};

/// Page state plus short-lived cosmetic flags owned by the binding layer
#[derive(Clone, Debug, Store)]
pub struct UiState {
    /// Presentation state; only changed through `store_dispatch`
    pub page: PageState,
    /// Last observed window scroll position
    pub scroll_y: f64,
    /// Checklist items currently scaled up by the check pulse
    pub pulsing: Vec<usize>,
    /// Attraction card whose button is pressed in
    pub pressed_card: Option<usize>,
    /// Hero title bounce has started
    pub welcomed: bool,
}

impl UiState {
    pub fn new(content: &SiteContent) -> Self {
        Self {
            page: PageState::for_content(content),
            scroll_y: 0.0,
            pulsing: Vec::new(),
            pressed_card: None,
            welcomed: false,
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<UiState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run an action through the page state, returning requested effects.
/// The store is only written when the transition changed something.
pub fn store_dispatch(store: &PageStore, action: Action) -> Vec<Effect> {
    let page = store.page();
    let mut next = page.read_untracked().clone();
    let effects = next.apply(action);
    if next != *page.read_untracked() {
        *page.write() = next;
    }
    effects
}

pub fn store_set_scroll(store: &PageStore, scroll_y: f64) {
    let field = store.scroll_y();
    if *field.read_untracked() != scroll_y {
        *field.write() = scroll_y;
    }
}

pub fn store_start_pulse(store: &PageStore, index: usize) {
    let pulsing = store.pulsing();
    let mut pulsing = pulsing.write();
    if !pulsing.contains(&index) {
        pulsing.push(index);
    }
}

pub fn store_end_pulse(store: &PageStore, index: usize) {
    store.pulsing().write().retain(|i| *i != index);
}

pub fn store_is_pulsing(store: &PageStore, index: usize) -> bool {
    store.pulsing().read().contains(&index)
}

pub fn store_press_card(store: &PageStore, index: usize) {
    *store.pressed_card().write() = Some(index);
}

/// Release the card, unless another card was pressed since
pub fn store_release_card(store: &PageStore, index: usize) {
    let pressed = store.pressed_card();
    let mut pressed = pressed.write();
    if *pressed == Some(index) {
        *pressed = None;
    }
}

pub fn store_is_pressed(store: &PageStore, index: usize) -> bool {
    *store.pressed_card().read() == Some(index)
}
