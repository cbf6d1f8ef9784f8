//! UI Components for the ChunkMyDocs frontend.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadWorkflow`] - File + tier selection and submission
//! - [`FilePicker`] - File selection used by the upload form
//! - [`TierToggle`] - Fast / High Quality switch
//! - [`FeatureMatrix`] - Tier comparison table
//! - [`TaskStatusView`] - Status of a submitted task

mod feature_matrix;
mod file_picker;
mod footer;
mod header;
mod hero;
mod task_status;
mod tier_toggle;
mod upload;

pub use feature_matrix::*;
pub use file_picker::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use task_status::*;
pub use tier_toggle::*;
pub use upload::*;
