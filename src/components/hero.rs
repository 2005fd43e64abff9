//! Hero Component
//!
//! Title banner with a debounced parallax offset and a welcome bounce.

use leptos::prelude::*;
use leptos_viewport::debounced_scroll_signal;
use trip_state::config::PARALLAX_DEBOUNCE_MS;
use trip_state::effects::parallax_transform;

use crate::components::RippleButton;
use crate::content::{HOME, ITINERARY};
use crate::context::use_page_context;
use crate::store::UiStateStoreFields;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_page_context();
    let store = ctx.store;
    let (title, subtitle, image) = ctx.with_content(|c| (c.title.clone(), c.subtitle.clone(), c.hero_image.clone()));

    let scrolled = debounced_scroll_signal(PARALLAX_DEBOUNCE_MS);
    let style = move || {
        let mut style = format!("transform: {};", parallax_transform(scrolled.get()));
        if let Some(image) = &image {
            style.push_str(&format!(" background-image: url('{}');", image));
        }
        style
    };

    view! {
        <section id=HOME class="hero" style=style>
            <div class="hero-content">
                <h1
                    class="hero-title"
                    style=move || if *store.welcomed().read() { "animation: bounceIn 1s ease;" } else { "" }
                >
                    {title}
                </h1>
                <p class="hero-subtitle">{subtitle}</p>
                <div class="hero-actions">
                    <RippleButton href=format!("#{}", ITINERARY) variant="btn--primary btn--lg">
                        "See the plan"
                    </RippleButton>
                </div>
            </div>
        </section>
    }
}
