//! ChunkMyDocs - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading documents to the ChunkMyDocs
//! ingest service and following the resulting processing task.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /        Home                                               │
//! │           ├── Hero (title, description)                      │
//! │           ├── UploadWorkflow (file picker, tier, run)        │
//! │           └── FeatureMatrix (Fast vs High Quality)           │
//! │  /task    TaskStatusView (?taskId=...)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (ProcessingTier, TaskResponse, Route, AppError)
//! - [`workflow`] - Upload form state machine
//! - [`components`] - UI components (UploadWorkflow, FeatureMatrix, etc.)
//! - [`services`] - Ingest server communication and navigation

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;
pub mod workflow;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Processing
    OcrStrategy, ProcessingTier, SegmentationStrategy,
    // API
    TaskResponse, TaskStatus,
    // Errors
    AppError, AppResult,
};

// Workflow
pub use workflow::{update, Effect, Event, Phase, SelectedFile, WorkflowState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App (backend: {})", APP_NAME, BACKEND_URL);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Header/>
            <main class="container">
                <Routes>
                    <Route path=types::HOME_PATH view=Home/>
                    <Route path=types::TASK_STATUS_PATH view=TaskStatusView/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <Hero/>
        <UploadWorkflow/>
        <section class="comparison">
            <h2>"Compare processing tiers"</h2>
            <FeatureMatrix/>
        </section>
    }
}
