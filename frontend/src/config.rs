//! Application configuration.
//!
//! Centralized configuration for the ChunkMyDocs frontend.
//! Values are baked into the WASM bundle at build time: set
//! `INGEST_SERVER__URL` / `INGEST_SERVER__API_KEY` in the environment
//! before running `trunk build` to point at another ingest server.

use crate::types::{OcrStrategy, SegmentationStrategy};

/// Ingest service base URL.
pub const BACKEND_URL: &str = match option_env!("INGEST_SERVER__URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// API key sent in the `Authorization` header, if any.
pub const API_KEY: Option<&str> = option_env!("INGEST_SERVER__API_KEY");

/// Application name, shown in the header and page title.
pub const APP_NAME: &str = "ChunkMyDocs";

/// Target chunk length (in tokens) requested for every upload.
pub const DEFAULT_TARGET_CHUNK_LENGTH: u32 = 512;

/// OCR strategy requested for every upload.
pub const DEFAULT_OCR_STRATEGY: OcrStrategy = OcrStrategy::Auto;

/// Segmentation strategy requested for every upload.
pub const DEFAULT_SEGMENTATION_STRATEGY: SegmentationStrategy = SegmentationStrategy::LayoutAnalysis;

/// Delay between two task status polls (ms).
pub const TASK_POLL_INTERVAL_MS: u32 = 1_000;

/// Message shown when a submission fails, whatever the cause.
pub const UPLOAD_ERROR_MESSAGE: &str = "Failed to upload file. Please try again later.";
