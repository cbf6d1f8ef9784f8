//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components and services.
//!
//! # Categories
//!
//! - **Processing Types** - Tier and OCR options sent with an upload
//! - **API Types** - Ingest service response structures
//! - **Routing Types** - Views the application can navigate to
//! - **Error Types** - Frontend error handling

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::form_urlencoded;

// =============================================================================
// Processing Types
// =============================================================================

/// Processing-quality tier requested for a document.
///
/// Sent to the ingest service as the `model` form field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessingTier {
    /// Fast layout analysis, basic image handling.
    #[default]
    Fast,
    /// Slower pipeline with formula OCR and better accuracy.
    HighQuality,
}

impl ProcessingTier {
    /// The other tier.
    pub fn toggled(self) -> Self {
        match self {
            ProcessingTier::Fast => ProcessingTier::HighQuality,
            ProcessingTier::HighQuality => ProcessingTier::Fast,
        }
    }

    /// Value of the `model` form field.
    pub fn as_model(&self) -> &'static str {
        match self {
            ProcessingTier::Fast => "Fast",
            ProcessingTier::HighQuality => "HighQuality",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ProcessingTier::Fast => "Fast",
            ProcessingTier::HighQuality => "High Quality",
        }
    }
}

/// OCR strategy requested for a document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OcrStrategy {
    /// Let the service decide per page.
    #[default]
    Auto,
    /// OCR every segment.
    All,
    /// Never OCR, trust the embedded text layer.
    Off,
}

impl OcrStrategy {
    /// Value of the `ocr_strategy` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            OcrStrategy::Auto => "Auto",
            OcrStrategy::All => "All",
            OcrStrategy::Off => "Off",
        }
    }
}

/// How the service splits pages into segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentationStrategy {
    /// Layout analysis model finds titles, tables, pictures, etc.
    #[default]
    LayoutAnalysis,
    /// One segment per page.
    Page,
}

impl SegmentationStrategy {
    /// Value of the `segmentation_strategy` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentationStrategy::LayoutAnalysis => "LayoutAnalysis",
            SegmentationStrategy::Page => "Page",
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Lifecycle of an ingest task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
    /// Any status this frontend does not know about.
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Whether the task may still change status.
    pub fn is_pending(&self) -> bool {
        matches!(self, TaskStatus::Starting | TaskStatus::Processing)
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            TaskStatus::Starting | TaskStatus::Processing => "status-pending",
            TaskStatus::Succeeded => "status-success",
            TaskStatus::Failed => "status-error",
            TaskStatus::Canceled | TaskStatus::Unknown => "status-neutral",
        }
    }
}

/// Response from the ingest service for a task.
///
/// Returned both by the upload endpoint and by the task lookup endpoint.
/// Only `task_id` is required; everything else is informational.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Unique task identifier
    pub task_id: String,
    /// Current status
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Status message from the service
    #[serde(default)]
    pub message: Option<String>,
    /// URL of the task resource
    #[serde(default)]
    pub task_url: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Routing Types
// =============================================================================

/// Path of the initial view.
pub const HOME_PATH: &str = "/";

/// Path of the task status view.
pub const TASK_STATUS_PATH: &str = "/task";

/// Query parameter carrying the task identifier.
pub const TASK_ID_PARAM: &str = "taskId";

/// A view the application can navigate to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Upload form and feature comparison.
    Home,
    /// Status of a submitted task.
    TaskStatus { task_id: String },
}

impl Route {
    /// Browser path for this route, including the query string.
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => HOME_PATH.to_string(),
            Route::TaskStatus { task_id } => {
                format!("{}?{}={}", TASK_STATUS_PATH, TASK_ID_PARAM, encode_component(task_id))
            }
        }
    }
}

/// Percent-encode a value for use in a query string or a single path segment.
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// The request could not be built.
    #[error("Request error: {0}")]
    Request(String),

    /// Network/HTTP transport error.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body did not match the expected format.
    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_double_toggle_is_identity() {
        for tier in [ProcessingTier::Fast, ProcessingTier::HighQuality] {
            assert_ne!(tier.toggled(), tier);
            assert_eq!(tier.toggled().toggled(), tier);
        }
    }

    #[test]
    fn test_tier_defaults_to_fast() {
        assert_eq!(ProcessingTier::default(), ProcessingTier::Fast);
        assert_eq!(ProcessingTier::HighQuality.as_model(), "HighQuality");
        assert_eq!(ProcessingTier::HighQuality.label(), "High Quality");
    }

    #[test]
    fn test_task_status_route() {
        let route = Route::TaskStatus {
            task_id: "abc123".to_string(),
        };
        assert_eq!(route.to_path(), "/task?taskId=abc123");
        assert_eq!(Route::Home.to_path(), "/");
    }

    #[test]
    fn test_task_status_route_encodes_id() {
        let route = Route::TaskStatus {
            task_id: "a&b=c#d".to_string(),
        };
        let path = route.to_path();
        assert_eq!(path, "/task?taskId=a%26b%3Dc%23d");

        let query = path.split_once('?').unwrap().1;
        let params: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(params, vec![("taskId".to_string(), "a&b=c#d".to_string())]);
    }

    #[test]
    fn test_encode_component_escapes_separators() {
        assert_eq!(encode_component("../../health"), "..%2F..%2Fhealth");
        assert_eq!(
            encode_component("3f1c2a9e-5b7d-4e1a-9c3f-1a2b3c4d5e6f"),
            "3f1c2a9e-5b7d-4e1a-9c3f-1a2b3c4d5e6f"
        );
    }

    #[test]
    fn test_segmentation_defaults_to_layout_analysis() {
        assert_eq!(SegmentationStrategy::default(), SegmentationStrategy::LayoutAnalysis);
        assert_eq!(SegmentationStrategy::Page.as_str(), "Page");
    }

    #[test]
    fn test_task_response_deserialization() {
        let json = r#"{
            "task_id": "3f1c2a9e-5b7d-4e1a-9c3f-1a2b3c4d5e6f",
            "status": "Starting",
            "message": "Task queued",
            "task_url": "http://localhost:8000/api/v1/task/3f1c2a9e-5b7d-4e1a-9c3f-1a2b3c4d5e6f",
            "created_at": "2024-09-12T10:15:00Z"
        }"#;

        let response: TaskResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.task_id, "3f1c2a9e-5b7d-4e1a-9c3f-1a2b3c4d5e6f");
        assert_eq!(response.status, Some(TaskStatus::Starting));
        assert!(response.status.unwrap().is_pending());
        assert!(response.created_at.is_some());
    }

    #[test]
    fn test_task_response_tolerates_unknown_status() {
        let json = r#"{"task_id": "t1", "status": "Archived"}"#;
        let response: TaskResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, Some(TaskStatus::Unknown));
        assert!(!TaskStatus::Unknown.is_pending());

        let minimal: TaskResponse = serde_json::from_str(r#"{"task_id": "t2"}"#).unwrap();
        assert_eq!(minimal.status, None);
        assert_eq!(minimal.message, None);
    }

    #[test]
    fn test_task_response_requires_task_id() {
        let result: Result<TaskResponse, _> = serde_json::from_str(r#"{"status": "Starting"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_server_error_format() {
        let err = AppError::Server {
            status: 500,
            message: "boom".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("boom"));
    }
}
