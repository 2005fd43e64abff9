//! Billund Trip App
//!
//! Root component: provides the page store and context, binds the
//! page-wide listeners (scroll, keyboard, load) and lays out the sections.

use leptos::prelude::*;
use leptos_viewport::{bind_document_keydown, bind_window_scroll, element_offset, inject_style, on_window_load, set_timeout};
use reactive_stores::Store;
use trip_state::config::WELCOME_DELAY_MS;
use trip_state::{Action, SectionBounds, SiteContent};

use crate::components::{AttractionsSection, FoodSection, Hero, ItinerarySection, Navbar, PracticalSection, ScrollToTop};
use crate::context::PageContext;
use crate::store::{store_set_scroll, UiState, UiStateStoreFields};
use crate::styles;

/// Measure the sections that exist on the page, in nav order
fn measure_sections(ids: &[String]) -> Vec<SectionBounds> {
    ids.iter()
        .filter_map(|id| element_offset(id).map(|(top, height)| SectionBounds::new(id.clone(), top, height)))
        .collect()
}

/// First reveal index of each group of animated cards, in page order
#[derive(Debug, Clone, Copy, PartialEq)]
struct CardOffsets {
    days: usize,
    attractions: usize,
    food: usize,
    practical: usize,
}

impl CardOffsets {
    fn for_content(content: &SiteContent) -> Self {
        let days = 0;
        let attractions = days + content.days.len();
        let food = attractions + content.attractions.len();
        let practical = food + content.specialties.len() + content.restaurants.len();
        Self { days, attractions, food, practical }
    }
}

#[component]
pub fn App(content: SiteContent) -> impl IntoView {
    let store = Store::new(UiState::new(&content));
    let ctx = PageContext::new(store, content.clone());
    provide_context(store);
    provide_context(ctx);

    let offsets = CardOffsets::for_content(&content);
    let section_ids = content.section_ids();

    inject_style(styles::INTERACTIVE_ID, styles::INTERACTIVE_CSS);

    // Navbar background, then active link: both read from one transition
    bind_window_scroll(move |scroll_y| {
        store_set_scroll(&store, scroll_y);
        let sections = measure_sections(&section_ids);
        ctx.dispatch(Action::Scrolled { scroll_y, sections });
    });

    // Escape and the day digits work regardless of focus
    bind_document_keydown(move |key| ctx.dispatch(Action::KeyPressed(key)));

    on_window_load(move || {
        set_timeout(WELCOME_DELAY_MS, move || {
            inject_style(styles::BOUNCE_IN_ID, styles::BOUNCE_IN_CSS);
            *store.welcomed().write() = true;
        });
    });

    tracing::info!(
        days = content.days.len(),
        checklist = content.practical.checklist.len(),
        "trip page mounted"
    );

    view! {
        <Navbar />
        <main class="page">
            <Hero />
            <ItinerarySection first_card=offsets.days />
            <AttractionsSection first_card=offsets.attractions />
            <FoodSection first_card=offsets.food />
            <PracticalSection first_card=offsets.practical />
        </main>
        <ScrollToTop />
    }
}

/// Shown instead of the page when the bundled content is unusable
#[component]
pub fn ContentErrorNotice(message: String) -> impl IntoView {
    view! {
        <div class="content-error">
            <h1>"This itinerary could not be loaded"</h1>
            <p>{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::load_bundled;

    #[test]
    fn test_card_offsets_follow_page_order() {
        let content = load_bundled().unwrap();
        let offsets = CardOffsets::for_content(&content);
        assert_eq!(offsets.days, 0);
        assert_eq!(offsets.attractions, 5);
        assert_eq!(offsets.food, 5 + content.attractions.len());
        assert_eq!(
            offsets.practical,
            offsets.food + content.specialties.len() + content.restaurants.len()
        );
    }
}
