//! Ripple Button Component
//!
//! `.btn` link that spawns a ripple from the click point.

use leptos::prelude::*;
use leptos_viewport::spawn_transient_span;
use trip_state::config::RIPPLE_MS;
use trip_state::effects::Ripple;
use wasm_bindgen::JsCast;

#[component]
pub fn RippleButton(
    #[prop(into)] href: String,
    /// Extra classes after "btn"
    #[prop(optional, into)] variant: String,
    /// Open in a new tab
    #[prop(optional)] external: bool,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(el) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let ripple = Ripple::at(
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
        );
        spawn_transient_span(&el, &ripple.style(), RIPPLE_MS);
    };

    view! {
        <a
            href=href
            class=format!("btn {}", variant).trim_end().to_string()
            style="position: relative; overflow: hidden;"
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            on:click=on_click
        >
            {children()}
        </a>
    }
}
