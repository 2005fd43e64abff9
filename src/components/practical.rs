//! Practical Info Section Component

use leptos::prelude::*;

use crate::components::{PackingChecklist, RevealCard};
use crate::content::PRACTICAL;
use crate::context::use_page_context;

/// Travel tips card and the packing checklist card
#[component]
pub fn PracticalSection(first_card: usize) -> impl IntoView {
    let ctx = use_page_context();
    let tips = ctx.with_content(|c| c.practical.tips.clone());

    view! {
        <section id=PRACTICAL class="section practical">
            <div class="container">
                <h2 class="section-title">"Practical Information"</h2>
                <div class="practical-grid">
                    <RevealCard index=first_card class="practical-card">
                        <h3><i class="fas fa-info-circle"></i>" Good to know"</h3>
                        <ul class="tips-list">
                            {tips.into_iter().map(|tip| view! { <li>{tip}</li> }).collect_view()}
                        </ul>
                    </RevealCard>
                    <RevealCard index={first_card + 1} class="practical-card packing-card">
                        <h3><i class="fas fa-suitcase"></i>" Packing checklist"</h3>
                        <PackingChecklist />
                    </RevealCard>
                </div>
            </div>
        </section>
    }
}
