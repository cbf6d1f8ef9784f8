use leptos::*;

use crate::config::{APP_NAME, BACKEND_URL};

#[component]
pub fn Header() -> impl IntoView {
    // Shown so it is obvious which ingest server a build talks to
    let backend_host = BACKEND_URL
        .trim_start_matches("https://")
        .trim_start_matches("http://");

    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">{APP_NAME}</a>
                <span class="badge">{backend_host.to_string()}</span>
            </div>
            <div class="header-right">
                <a href="https://docs.chunkmydocs.com" class="header-link" target="_blank">
                    "Docs"
                </a>
            </div>
        </header>
    }
}
