//! Scroll To Top Component
//!
//! Round fixed button at the end of the page, shown once the page is
//! scrolled far enough.

use leptos::prelude::*;
use leptos_viewport::smooth_scroll_to;
use trip_state::effects::scroll_top_visible;

use crate::store::{use_page_store, UiStateStoreFields};
use crate::styles::SCROLL_TOP_BUTTON;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let store = use_page_store();
    let (hovered, set_hovered) = signal(false);

    let style = move || {
        let visible = scroll_top_visible(store.scroll_y().get());
        let (opacity, visibility) = if visible { ("1", "visible") } else { ("0", "hidden") };
        let (scale, background) = if hovered.get() {
            ("1.1", "var(--color-primary-hover)")
        } else {
            ("1", "var(--color-primary)")
        };
        format!(
            "{} opacity: {}; visibility: {}; transform: scale({}); background: {};",
            SCROLL_TOP_BUTTON, opacity, visibility, scale, background
        )
    };

    view! {
        <button
            class="scroll-to-top"
            aria-label="Scroll to top"
            style=style
            on:click=move |_| smooth_scroll_to(0.0)
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <i class="fas fa-chevron-up"></i>
        </button>
    }
}
