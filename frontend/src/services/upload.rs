//! HTTP service for uploading documents to the ingest server.

use futures::future::{AbortHandle, Abortable};
use gloo_net::http::Request;
use std::future::Future;
use web_sys::{File, FormData};

use super::{check_status, health_check, js_error, ApiClient};
use crate::types::{
    AppError, AppResult, OcrStrategy, ProcessingTier, SegmentationStrategy, TaskResponse,
};
use crate::workflow::Event;

/// Outbound upload payload.
///
/// Built by the workflow at submission time and consumed by the service.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadRequest<F> {
    pub file: F,
    pub tier: ProcessingTier,
    pub target_chunk_length: u32,
    pub ocr_strategy: OcrStrategy,
    pub segmentation_strategy: SegmentationStrategy,
    /// Structured-extraction schema, sent only when present.
    pub json_schema: Option<serde_json::Value>,
}

impl<F> UploadRequest<F> {
    /// Non-file form fields, in wire order.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("model", self.tier.as_model().to_string()),
            ("target_chunk_length", self.target_chunk_length.to_string()),
            ("ocr_strategy", self.ocr_strategy.as_str().to_string()),
            ("segmentation_strategy", self.segmentation_strategy.as_str().to_string()),
        ];
        if let Some(schema) = &self.json_schema {
            fields.push(("json_schema", schema.to_string()));
        }
        fields
    }
}

/// Anything that can accept an upload and hand back a task.
#[allow(async_fn_in_trait)]
pub trait UploadService<F> {
    async fn upload(&self, request: UploadRequest<F>) -> AppResult<TaskResponse>;
}

/// Upload service backed by the ingest server's REST API.
///
/// Defaults to the build-time [`BACKEND_URL`](crate::config::BACKEND_URL).
#[derive(Clone, Debug, Default)]
pub struct HttpUploadService {
    client: ApiClient,
}

impl UploadService<File> for HttpUploadService {
    async fn upload(&self, request: UploadRequest<File>) -> AppResult<TaskResponse> {
        health_check(&self.client).await?;

        let form_data = FormData::new().map_err(js_error)?;

        form_data
            .append_with_blob_and_filename("file", &request.file, &request.file.name())
            .map_err(js_error)?;
        for (name, value) in request.form_fields() {
            form_data.append_with_str(name, &value).map_err(js_error)?;
        }

        let url = self.client.url("/api/v1/task");
        log::debug!("POST {}", url);

        let mut builder = Request::post(&url);
        if let Some(key) = self.client.api_key() {
            builder = builder.header("Authorization", key);
        }
        let response = builder
            .body(form_data)
            .map_err(|e| AppError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let response = check_status(response).await?;
        response
            .json::<TaskResponse>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}

/// Run one upload and turn its outcome into a workflow event.
///
/// The returned future resolves to `None` once the handle has been
/// aborted, so a torn-down form never sees the outcome.
pub fn submission<F, S>(
    service: S,
    request: UploadRequest<F>,
) -> (impl Future<Output = Option<Event<F>>>, AbortHandle)
where
    S: UploadService<F>,
{
    let (handle, registration) = AbortHandle::new_pair();
    let call = async move { Event::from_outcome(service.upload(request).await) };
    let fut = Abortable::new(call, registration);
    (async move { fut.await.ok() }, handle)
}
