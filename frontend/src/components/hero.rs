//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Chunk your documents"</h1>
            <p class="subtitle">
                "Upload a PDF, Word, PowerPoint or Excel file. "
                "We extract layout, tables and images and split it into retrieval-ready chunks."
            </p>
        </div>
    }
}
