//! Reveal Card Component
//!
//! Card wrapper that fades and slides into view the first time it
//! intersects the viewport.

use leptos::prelude::*;
use leptos_viewport::observe_first_intersection;
use trip_state::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use trip_state::effects::{day_card_transform, reveal_style};
use trip_state::Action;

use crate::context::use_page_context;
use crate::store::UiStateStoreFields;

/// Card with a one-shot reveal animation
///
/// # Arguments
/// * `index` - Position among all animated cards, drives the stagger delay
/// * `class` - Card class (e.g. "day-card", "attraction-card")
/// * `tilt` - Tilt slightly while hovered
/// * `on_click` - Optional click handler for the whole card
#[component]
pub fn RevealCard(
    index: usize,
    #[prop(into)] class: String,
    #[prop(optional)] tilt: bool,
    #[prop(optional, into)] on_click: Option<Callback<web_sys::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let ctx = use_page_context();
    let store = ctx.store;
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let (hovered, set_hovered) = signal(false);

    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            observe_first_intersection(&el, REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN, move || {
                ctx.dispatch(Action::CardVisible(index));
            });
        }
    });

    let style = move || {
        let revealed = store.page().read().reveal.is_revealed(index);
        let mut style = reveal_style(index, revealed);
        if tilt && hovered.get() {
            style.push_str(&format!(" transform: {};", day_card_transform(true)));
        }
        style
    };

    view! {
        <div
            class=class
            node_ref=node_ref
            style=style
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {children()}
        </div>
    }
}
