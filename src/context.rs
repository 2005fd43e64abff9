//! Page Context
//!
//! Shared handles provided via Leptos Context API: the bundled content and
//! the page store, plus `dispatch`, which runs an action and carries out the
//! effects it requests.

use leptos::prelude::*;
use leptos_viewport::{inject_style, set_timeout};
use trip_state::config::CHECK_PULSE_MS;
use trip_state::{Action, Effect, SiteContent};

use crate::store::{store_dispatch, store_end_pulse, store_start_pulse, PageStore};
use crate::styles;

#[derive(Clone, Copy)]
pub struct PageContext {
    pub store: PageStore,
    content: StoredValue<SiteContent>,
}

impl PageContext {
    pub fn new(store: PageStore, content: SiteContent) -> Self {
        Self { store, content: StoredValue::new(content) }
    }

    /// Read the bundled content
    pub fn with_content<R>(&self, f: impl FnOnce(&SiteContent) -> R) -> R {
        self.content.with_value(f)
    }

    /// Apply an action and run its effects
    pub fn dispatch(&self, action: Action) {
        for effect in store_dispatch(&self.store, action) {
            self.run_effect(effect);
        }
    }

    fn run_effect(&self, effect: Effect) {
        tracing::debug!(?effect, "running effect");
        match effect {
            Effect::PulseChecklistItem(index) => {
                let store = self.store;
                store_start_pulse(&store, index);
                set_timeout(CHECK_PULSE_MS, move || store_end_pulse(&store, index));
            }
            Effect::ShowCompletionBanner => {
                inject_style(styles::SLIDE_IN_ID, styles::SLIDE_IN_CSS);
                tracing::info!("packing checklist complete");
            }
            // rendered from reveal state
            Effect::RevealCard(_) => {}
        }
    }
}

pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactive_stores::Store;

    use crate::content::load_bundled;
    use crate::store::UiState;

    #[test]
    fn test_context_lookup_returns_provided_page() {
        let owner = Owner::new();
        owner.with(|| {
            let content = load_bundled().unwrap();
            let store = Store::new(UiState::new(&content));
            provide_context(PageContext::new(store, content));

            let days = use_page_context().with_content(|c| c.days.len());
            assert_eq!(days, 5);
        });
    }
}
