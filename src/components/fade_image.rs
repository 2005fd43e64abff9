//! Fade Image Component
//!
//! Image that fades in once loaded and dims with replacement alt text on error.

use leptos::prelude::*;
use trip_state::effects::ImageStatus;

#[component]
pub fn FadeImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
) -> impl IntoView {
    let (status, set_status) = signal(ImageStatus::Loading);

    view! {
        <img
            src=src
            alt=move || status.get().alt_text(&alt).to_string()
            style=move || format!("opacity: {}; transition: opacity 0.3s ease;", status.get().opacity())
            on:load=move |_| set_status.set(ImageStatus::Loaded)
            on:error=move |_| {
                tracing::warn!("image failed to load");
                set_status.set(ImageStatus::Failed);
            }
        />
    }
}
