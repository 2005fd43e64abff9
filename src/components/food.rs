//! Food Section Component

use leptos::prelude::*;

use crate::components::RevealCard;
use crate::content::FOOD;
use crate::context::use_page_context;
use crate::markdown::parse_markdown_inline;

/// Danish specialties followed by restaurant picks
#[component]
pub fn FoodSection(first_card: usize) -> impl IntoView {
    let ctx = use_page_context();
    let (specialties, restaurants) = ctx.with_content(|c| (c.specialties.clone(), c.restaurants.clone()));
    let first_restaurant = first_card + specialties.len();

    view! {
        <section id=FOOD class="section food">
            <div class="container">
                <h2 class="section-title">"Danish Food"</h2>
                <div class="specialties-grid">
                    {specialties
                        .into_iter()
                        .enumerate()
                        .map(|(i, specialty)| view! {
                            <RevealCard index={first_card + i} class="specialty-card">
                                <h3>{specialty.name}</h3>
                                <p>{specialty.description}</p>
                            </RevealCard>
                        })
                        .collect_view()}
                </div>
                <h3 class="subsection-title">"Where to Eat"</h3>
                <div class="restaurants-grid">
                    {restaurants
                        .into_iter()
                        .enumerate()
                        .map(|(i, restaurant)| {
                            let note = restaurant.note.as_deref().map(parse_markdown_inline);
                            view! {
                                <RevealCard index={first_restaurant + i} class="restaurant-card">
                                    <h4>{restaurant.name}</h4>
                                    <span class="restaurant-cuisine">{restaurant.cuisine}</span>
                                    {note.map(|html| view! { <div class="restaurant-note" inner_html=html></div> })}
                                </RevealCard>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
