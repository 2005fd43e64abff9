//! Attractions Section Component
//!
//! Attraction cards with images and a website button. Clicking the card
//! anywhere except a link briefly presses the button.

use leptos::prelude::*;
use leptos_viewport::{set_timeout, target_closest};
use trip_state::config::CARD_PRESS_MS;
use trip_state::content::Attraction;

use crate::components::{FadeImage, RevealCard, RippleButton};
use crate::content::ATTRACTIONS;
use crate::context::use_page_context;
use crate::store::{store_is_pressed, store_press_card, store_release_card, use_page_store};

#[component]
fn AttractionCard(attraction: Attraction, index: usize) -> impl IntoView {
    let store = use_page_store();

    let on_press = move |ev: web_sys::MouseEvent| {
        if target_closest(ev.target(), "a") {
            return;
        }
        store_press_card(&store, index);
        set_timeout(CARD_PRESS_MS, move || store_release_card(&store, index));
    };
    let button_style = move || {
        let scale = if store_is_pressed(&store, index) { "0.95" } else { "1" };
        format!("transform: scale({}); transition: transform 0.15s ease;", scale)
    };

    let Attraction { name, description, image, url } = attraction;
    let alt = name.clone();

    view! {
        <RevealCard index=index class="attraction-card" on_click=on_press>
            {image.map(|src| view! { <FadeImage src=src alt=alt /> })}
            <div class="attraction-body">
                <h3>{name}</h3>
                <p>{description}</p>
                {url.map(|url| view! {
                    <div class="attraction-btn" style=button_style>
                        <RippleButton href=url variant="btn--outline btn--sm" external=true>
                            "Visit website"
                        </RippleButton>
                    </div>
                })}
            </div>
        </RevealCard>
    }
}

#[component]
pub fn AttractionsSection(first_card: usize) -> impl IntoView {
    let ctx = use_page_context();
    let attractions = ctx.with_content(|c| c.attractions.clone());

    view! {
        <section id=ATTRACTIONS class="section attractions">
            <div class="container">
                <h2 class="section-title">"Attractions"</h2>
                <div class="attractions-grid">
                    {attractions
                        .into_iter()
                        .enumerate()
                        .map(|(i, attraction)| view! { <AttractionCard attraction=attraction index={first_card + i} /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
