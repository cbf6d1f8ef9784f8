//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2024 Lumina AI • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="https://github.com/lumina-ai-inc/chunkmydocs" class="footer-link" target="_blank">
                    "GitHub"
                </a>
                <a href="https://docs.chunkmydocs.com" class="footer-link" target="_blank">
                    "Docs"
                </a>
            </div>
        </footer>
    }
}
