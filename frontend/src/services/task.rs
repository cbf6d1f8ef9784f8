//! Task status lookup.

use gloo_net::http::Request;
use std::future::Future;

use super::{check_status, ApiClient};
use crate::types::{encode_component, AppError, AppResult, TaskResponse};

/// Anything that can report the current state of a task.
#[allow(async_fn_in_trait)]
pub trait TaskSource {
    async fn fetch(&self, task_id: &str) -> AppResult<TaskResponse>;
}

impl TaskSource for ApiClient {
    async fn fetch(&self, task_id: &str) -> AppResult<TaskResponse> {
        get_task(self, task_id).await
    }
}

/// Fetch the current state of a task.
pub async fn get_task(client: &ApiClient, task_id: &str) -> AppResult<TaskResponse> {
    // `.` and `..` survive encoding and would be resolved by the browser
    if task_id.is_empty() || task_id == "." || task_id == ".." {
        return Err(AppError::Request(format!("invalid task id {:?}", task_id)));
    }

    let url = client.url(&format!("/api/v1/task/{}", encode_component(task_id)));
    let mut builder = Request::get(&url);
    if let Some(key) = client.api_key() {
        builder = builder.header("Authorization", key);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;
    let response = check_status(response).await?;

    response
        .json::<TaskResponse>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// Poll a task until it leaves `Starting`/`Processing`.
///
/// `on_update` sees every fetched snapshot and `delay` is awaited
/// between two fetches. An error on the first fetch is returned; later
/// failures are logged and polling carries on. A snapshot without a
/// status counts as terminal.
pub async fn watch_task<S, D, Fut>(
    source: &S,
    task_id: &str,
    mut delay: D,
    mut on_update: impl FnMut(&TaskResponse),
) -> AppResult<TaskResponse>
where
    S: TaskSource,
    D: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut task = source.fetch(task_id).await?;
    loop {
        on_update(&task);

        let pending = task.status.map(|s| s.is_pending()).unwrap_or(false);
        if !pending {
            log::info!("Task {} finished: {:?}", task_id, task.status);
            return Ok(task);
        }

        task = loop {
            delay().await;
            match source.fetch(task_id).await {
                Ok(snapshot) => break snapshot,
                Err(e) => log::warn!("Error getting task status for {}: {}", task_id, e),
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskStatus;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Replays a fixed sequence of fetch results.
    struct ScriptedSource {
        script: RefCell<VecDeque<AppResult<TaskResponse>>>,
        fetches: Cell<usize>,
    }

    impl ScriptedSource {
        fn new(script: Vec<AppResult<TaskResponse>>) -> Self {
            Self {
                script: RefCell::new(script.into()),
                fetches: Cell::new(0),
            }
        }
    }

    impl TaskSource for ScriptedSource {
        async fn fetch(&self, task_id: &str) -> AppResult<TaskResponse> {
            assert_eq!(task_id, "t1");
            self.fetches.set(self.fetches.get() + 1);
            self.script
                .borrow_mut()
                .pop_front()
                .expect("polled past the end of the script")
        }
    }

    fn snapshot(status: Option<TaskStatus>) -> AppResult<TaskResponse> {
        Ok(TaskResponse {
            task_id: "t1".to_string(),
            status,
            message: None,
            task_url: None,
            created_at: None,
        })
    }

    /// Run `watch_task` and return (result, statuses seen, delays awaited).
    fn watch(source: &ScriptedSource) -> (AppResult<TaskResponse>, Vec<Option<TaskStatus>>, usize) {
        let delays = Cell::new(0);
        let mut seen = Vec::new();
        let result = block_on(watch_task(
            source,
            "t1",
            || {
                delays.set(delays.get() + 1);
                async {}
            },
            |task| seen.push(task.status),
        ));
        (result, seen, delays.get())
    }

    #[test]
    fn test_polls_until_terminal() {
        let source = ScriptedSource::new(vec![
            snapshot(Some(TaskStatus::Starting)),
            snapshot(Some(TaskStatus::Processing)),
            snapshot(Some(TaskStatus::Succeeded)),
        ]);
        let (result, seen, delays) = watch(&source);

        assert_eq!(result.unwrap().status, Some(TaskStatus::Succeeded));
        assert_eq!(
            seen,
            vec![
                Some(TaskStatus::Starting),
                Some(TaskStatus::Processing),
                Some(TaskStatus::Succeeded)
            ]
        );
        assert_eq!(delays, 2);
    }

    #[test]
    fn test_failed_task_is_terminal() {
        let source = ScriptedSource::new(vec![
            snapshot(Some(TaskStatus::Processing)),
            snapshot(Some(TaskStatus::Failed)),
        ]);
        let (result, _, delays) = watch(&source);
        assert_eq!(result.unwrap().status, Some(TaskStatus::Failed));
        assert_eq!(delays, 1);
    }

    #[test]
    fn test_missing_status_is_terminal() {
        let source = ScriptedSource::new(vec![snapshot(None)]);
        let (result, seen, delays) = watch(&source);

        assert_eq!(result.unwrap().status, None);
        assert_eq!(seen, vec![None]);
        assert_eq!(delays, 0);
        assert_eq!(source.fetches.get(), 1);
    }

    #[test]
    fn test_transient_error_keeps_polling() {
        let source = ScriptedSource::new(vec![
            snapshot(Some(TaskStatus::Processing)),
            Err(AppError::Server {
                status: 502,
                message: "bad gateway".into(),
            }),
            snapshot(Some(TaskStatus::Succeeded)),
        ]);
        let (result, seen, delays) = watch(&source);

        assert_eq!(result.unwrap().status, Some(TaskStatus::Succeeded));
        assert_eq!(seen, vec![Some(TaskStatus::Processing), Some(TaskStatus::Succeeded)]);
        assert_eq!(delays, 2);
        assert_eq!(source.fetches.get(), 3);
    }

    #[test]
    fn test_first_fetch_error_is_returned() {
        let source = ScriptedSource::new(vec![Err(AppError::Network("offline".into()))]);
        let (result, seen, delays) = watch(&source);

        assert_eq!(result, Err(AppError::Network("offline".into())));
        assert!(seen.is_empty());
        assert_eq!(delays, 0);
    }

    #[test]
    fn test_invalid_task_ids_are_rejected() {
        let client = ApiClient::new("http://localhost:8000", None);
        for id in ["", ".", ".."] {
            let result = block_on(get_task(&client, id));
            assert!(matches!(result, Err(AppError::Request(_))), "id {:?}", id);
        }
    }
}
