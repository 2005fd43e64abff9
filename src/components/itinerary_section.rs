//! Itinerary Section Component

use leptos::prelude::*;

use crate::components::DayCard;
use crate::content::ITINERARY;
use crate::context::use_page_context;

/// All day cards, numbered from `first_card` in the reveal order
#[component]
pub fn ItinerarySection(first_card: usize) -> impl IntoView {
    let ctx = use_page_context();
    let days = ctx.with_content(|c| c.days.clone());
    let last_day = days.len();

    view! {
        <section id=ITINERARY class="section itinerary">
            <div class="container">
                <h2 class="section-title">"Day-by-Day Itinerary"</h2>
                <p class="section-hint">{format!("Tip: press 1-{} to open or close a day", last_day.min(5))}</p>
                <div class="itinerary-list">
                    {days
                        .into_iter()
                        .enumerate()
                        .map(|(i, day)| view! { <DayCard day=day index={first_card + i} /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
