//! Navigation Bar Component
//!
//! Fixed navbar with the mobile menu toggle and section links. Links smooth
//! scroll to their section and close the menu; clicks outside the toggle and
//! menu close it as well.

use leptos::prelude::*;
use leptos_viewport::{bind_document_click, contains_target, element_offset, root_css_property, smooth_scroll_to};
use trip_state::effects::navbar_background;
use trip_state::nav::scroll_target;
use trip_state::Action;

use crate::content::HOME;
use crate::context::use_page_context;
use crate::store::UiStateStoreFields;
use crate::styles::{NAVBAR_RGB_FALLBACK, NAVBAR_RGB_PROPERTY};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_page_context();
    let store = ctx.store;
    let (links, title) = ctx.with_content(|c| (c.nav.clone(), c.title.clone()));

    let toggle_ref = NodeRef::<leptos::html::Button>::new();
    let menu_ref = NodeRef::<leptos::html::Ul>::new();

    bind_document_click(move |ev: web_sys::MouseEvent| {
        let target = ev.target();
        let in_toggle = toggle_ref
            .get_untracked()
            .map(|el| contains_target(&el, target.clone()))
            .unwrap_or(false);
        let in_menu = menu_ref
            .get_untracked()
            .map(|el| contains_target(&el, target.clone()))
            .unwrap_or(false);

        if !in_toggle && !in_menu && store.page().read_untracked().nav.is_menu_open() {
            ctx.dispatch(Action::CloseMenu);
        }
    });

    let rgb = root_css_property(NAVBAR_RGB_PROPERTY)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| NAVBAR_RGB_FALLBACK.to_string());
    let background = move || format!("background: {};", navbar_background(&rgb, store.scroll_y().get()));

    let nav_links = links
        .into_iter()
        .map(|link| {
            let href = link.href();
            let active_href = href.clone();
            let section = link.section.clone();

            view! {
                <li>
                    <a
                        href=href
                        class=move || {
                            if store.page().read().nav.is_link_active(&active_href) {
                                "nav-link active"
                            } else {
                                "nav-link"
                            }
                        }
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.dispatch(Action::CloseMenu);
                            if let Some((top, _)) = element_offset(&section) {
                                smooth_scroll_to(scroll_target(top));
                            }
                        }
                    >
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar" style=background>
            <div class="nav-container">
                <a class="nav-logo" href=format!("#{}", HOME)>
                    <i class="fas fa-cubes"></i>
                    " "
                    {title}
                </a>
                <ul
                    id="nav-menu"
                    node_ref=menu_ref
                    class=move || if store.page().read().nav.is_menu_open() { "nav-menu active" } else { "nav-menu" }
                >
                    {nav_links}
                </ul>
                <button
                    id="nav-toggle"
                    class="nav-toggle"
                    node_ref=toggle_ref
                    aria-label="Toggle navigation"
                    on:click=move |_| ctx.dispatch(Action::ToggleMenu)
                >
                    <i class=move || format!("fas {}", store.page().read().nav.menu_icon().class())></i>
                </button>
            </div>
        </nav>
    }
}
