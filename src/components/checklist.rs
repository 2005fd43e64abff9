//! Packing Checklist Component
//!
//! Checkbox list with progress, label fading, a check pulse and the one-way
//! completion banner.

use leptos::prelude::*;
use trip_state::Action;

use crate::context::use_page_context;
use crate::store::{store_is_pulsing, UiStateStoreFields};
use crate::styles::COMPLETION_BANNER;

#[component]
fn ChecklistItem(index: usize, label: String) -> impl IntoView {
    let ctx = use_page_context();
    let store = ctx.store;
    let input_id = format!("pack-{}", index);

    let item_style = move || {
        let scale = if store_is_pulsing(&store, index) { "1.05" } else { "1" };
        format!("transform: scale({}); transition: transform 0.2s ease;", scale)
    };

    view! {
        <li class="checklist-item" style=item_style>
            <input
                type="checkbox"
                id=input_id.clone()
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    ctx.dispatch(Action::SetChecked { index, checked });
                }
            />
            <label
                for=input_id
                style=move || format!("opacity: {};", store.page().read().checklist.label_opacity(index))
            >
                {label}
            </label>
        </li>
    }
}

#[component]
pub fn PackingChecklist() -> impl IntoView {
    let ctx = use_page_context();
    let store = ctx.store;
    let items = ctx.with_content(|c| c.practical.checklist.clone());

    let progress_text = move || {
        let progress = store.page().read().checklist.progress();
        format!("{} of {} packed", progress.checked, progress.total)
    };

    view! {
        <ul class="checklist">
            {items
                .into_iter()
                .enumerate()
                .map(|(index, label)| view! { <ChecklistItem index=index label=label /> })
                .collect_view()}
        </ul>
        <p class="checklist-progress">{progress_text}</p>
        <Show when=move || store.page().read().checklist.banner_shown()>
            <div class="completion-message" style=COMPLETION_BANNER>
                <i class="fas fa-check-circle"></i>
                " Great! You're all packed and ready for your Billund adventure!"
            </div>
        </Show>
    }
}
