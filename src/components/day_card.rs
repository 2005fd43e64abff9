//! Day Card Component
//!
//! Collapsible itinerary day. The header toggles the day; the same toggle is
//! bound to the day's digit key at page level.

use leptos::prelude::*;
use trip_state::content::{Activity, Day};
use trip_state::Action;

use crate::components::RevealCard;
use crate::context::use_page_context;
use crate::markdown::parse_markdown_inline;
use crate::store::UiStateStoreFields;

#[component]
fn ActivityRow(activity: Activity) -> impl IntoView {
    let note = activity.note.as_deref().map(parse_markdown_inline);

    view! {
        <li class="activity">
            <span class="activity-time">{activity.time}</span>
            <div class="activity-body">
                <span class="activity-title">{activity.title}</span>
                {note.map(|html| view! { <div class="activity-note" inner_html=html></div> })}
            </div>
        </li>
    }
}

#[component]
pub fn DayCard(day: Day, index: usize) -> impl IntoView {
    let ctx = use_page_context();
    let store = ctx.store;
    let number = day.day;
    let expanded = move || store.page().read().itinerary.is_expanded(number);

    view! {
        <RevealCard index=index class="day-card" tilt=true>
            <div class="day-card-inner" data-day=number.to_string()>
                <div class="day-header" on:click=move |_| ctx.dispatch(Action::ToggleDay(number))>
                    <div class="day-number">{format!("Day {}", number)}</div>
                    <div class="day-info">
                        <h3 class="day-title">{day.title}</h3>
                        <span class="day-date">{day.date}</span>
                    </div>
                    <button
                        class=move || if expanded() { "expand-btn active" } else { "expand-btn" }
                        aria-label="Toggle day"
                        aria-expanded=move || expanded().to_string()
                    >
                        <i class="fas fa-chevron-down"></i>
                    </button>
                </div>
                <div
                    id=format!("day-{}", number)
                    class=move || if expanded() { "day-content active" } else { "day-content" }
                >
                    <ul class="activity-list">
                        {day
                            .activities
                            .into_iter()
                            .map(|activity| view! { <ActivityRow activity=activity /> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </RevealCard>
    }
}
