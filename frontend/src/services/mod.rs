//! Ingest server and browser services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`upload`] - Document upload to the ingest server
//! - [`task`] - Task status lookup
//! - [`navigation`] - Moving between views

pub mod navigation;
pub mod task;
pub mod upload;

pub use navigation::*;
pub use task::*;
pub use upload::*;

use gloo_net::http::{Request, Response};
use wasm_bindgen::JsValue;

use crate::config::{API_KEY, BACKEND_URL};
use crate::types::{AppError, AppResult};

/// Connection settings shared by every ingest server call.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    api_key: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(BACKEND_URL, API_KEY)
    }
}

impl ApiClient {
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()).map(str::to_string),
        }
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

/// Check the ingest server is up before sending work to it.
pub async fn health_check(client: &ApiClient) -> AppResult<()> {
    let mut builder = Request::get(&client.url("/health"));
    if let Some(key) = client.api_key() {
        builder = builder.header("Authorization", key);
    }
    let response = builder
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;
    check_status(response).await?;
    Ok(())
}

/// Turn a non-2xx response into [`AppError::Server`].
pub(crate) async fn check_status(response: Response) -> AppResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(AppError::Server { status, message })
}

pub(crate) fn js_error(err: JsValue) -> AppError {
    AppError::Request(format!("{:?}", err))
}
