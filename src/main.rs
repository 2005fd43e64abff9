//! Billund Trip Frontend Entry Point

mod app;
mod components;
mod content;
mod context;
mod markdown;
mod store;
mod styles;

use app::{App, ContentErrorNotice};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(console_logger::level_from_env());

    match content::load_bundled() {
        Ok(site) => {
            tracing::debug!(sections = ?site.section_ids(), "content loaded");
            mount_to_body(move || view! { <App content=site /> });
        }
        Err(err) => {
            tracing::error!(%err, "bundled content rejected");
            let message = err.to_string();
            mount_to_body(move || view! { <ContentErrorNotice message=message /> });
        }
    }
}
