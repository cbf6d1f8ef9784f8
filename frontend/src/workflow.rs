//! Upload workflow state machine.
//!
//! The upload form is driven by a plain state struct and a transition
//! function, with no signal or DOM access. Components feed user
//! actions and service outcomes in as [`Event`]s and carry out the
//! returned [`Effect`]s.
//!
//! ```text
//!   Idle ──SubmitRequested──▶ Submitting ──SubmitSucceeded──▶ Navigate(TaskStatus)
//!                                  │
//!                                  └──────SubmitFailed──────▶ ErrorShown ──ErrorDismissed──▶ Navigate(Home)
//! ```

use crate::config::{
    DEFAULT_OCR_STRATEGY, DEFAULT_SEGMENTATION_STRATEGY, DEFAULT_TARGET_CHUNK_LENGTH,
    UPLOAD_ERROR_MESSAGE,
};
use crate::services::UploadRequest;
use crate::types::{AppError, AppResult, ProcessingTier, Route, TaskResponse};

/// A file the user picked, as far as the workflow cares.
pub trait SelectedFile: Clone {
    /// Name shown to the user and sent to the service.
    fn file_name(&self) -> String;
}

impl SelectedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Where the workflow currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    ErrorShown,
}

/// Local state of the upload form.
#[derive(Clone, Debug)]
pub struct WorkflowState<F> {
    pub selected_file: Option<F>,
    pub display_name: Option<String>,
    pub tier: ProcessingTier,
    pub is_submitting: bool,
    pub error_message: Option<String>,
}

impl<F> Default for WorkflowState<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            display_name: None,
            tier: ProcessingTier::default(),
            is_submitting: false,
            error_message: None,
        }
    }
}

impl<F> WorkflowState<F> {
    pub fn phase(&self) -> Phase {
        if self.error_message.is_some() {
            Phase::ErrorShown
        } else if self.is_submitting {
            Phase::Submitting
        } else {
            Phase::Idle
        }
    }

    /// Submit control is enabled only with a file and nothing in flight.
    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && !self.is_submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            "Uploading..."
        } else {
            "Run"
        }
    }
}

/// Something that happened to the upload form.
#[derive(Clone, Debug)]
pub enum Event<F> {
    FileSelected(F),
    FileRemoved,
    TierToggled,
    SubmitRequested,
    SubmitSucceeded(String),
    SubmitFailed(AppError),
    ErrorDismissed,
}

impl<F> Event<F> {
    /// Outcome event for a finished upload call.
    pub fn from_outcome(outcome: AppResult<TaskResponse>) -> Self {
        match outcome {
            Ok(response) => Event::SubmitSucceeded(response.task_id),
            Err(e) => Event::SubmitFailed(e),
        }
    }
}

/// Work the caller must perform after a transition.
#[derive(Clone, Debug)]
pub enum Effect<F> {
    /// Send the request to the upload service, then feed the outcome back.
    Upload(UploadRequest<F>),
    /// Leave the form.
    Navigate(Route),
}

/// Apply `event` to `state`.
pub fn update<F: SelectedFile>(state: &mut WorkflowState<F>, event: Event<F>) -> Option<Effect<F>> {
    match event {
        Event::FileSelected(file) => {
            let name = file.file_name();
            log::debug!("📄 File selected: {}", name);
            state.display_name = Some(name);
            state.selected_file = Some(file);
            None
        }
        Event::FileRemoved => {
            state.selected_file = None;
            state.display_name = None;
            None
        }
        Event::TierToggled => {
            state.tier = state.tier.toggled();
            log::debug!("Processing tier: {}", state.tier.label());
            None
        }
        Event::SubmitRequested => {
            if state.is_submitting {
                log::warn!("Upload already in progress, ignoring submit");
                return None;
            }
            let Some(file) = state.selected_file.clone() else {
                log::warn!("No file selected");
                return None;
            };

            state.is_submitting = true;
            state.error_message = None;

            log::info!("📤 Uploading {} ({})", file.file_name(), state.tier.label());
            Some(Effect::Upload(UploadRequest {
                file,
                tier: state.tier,
                target_chunk_length: DEFAULT_TARGET_CHUNK_LENGTH,
                ocr_strategy: DEFAULT_OCR_STRATEGY,
                segmentation_strategy: DEFAULT_SEGMENTATION_STRATEGY,
                json_schema: None,
            }))
        }
        Event::SubmitSucceeded(task_id) => {
            state.is_submitting = false;
            log::info!("✅ Upload accepted, task {}", task_id);
            Some(Effect::Navigate(Route::TaskStatus { task_id }))
        }
        Event::SubmitFailed(e) => {
            state.is_submitting = false;
            log::error!("❌ Upload failed: {}", e);
            state.error_message = Some(UPLOAD_ERROR_MESSAGE.to_string());
            None
        }
        Event::ErrorDismissed => Some(Effect::Navigate(Route::Home)),
    }
}
