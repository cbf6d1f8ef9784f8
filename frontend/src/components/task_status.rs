//! Status page for a submitted task.
//!
//! Reads the `taskId` query parameter and polls the ingest server until
//! the task reaches a terminal status. Only a failure of the first lookup
//! is shown; later failed polls are retried.

use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::use_query_map;

use crate::config::TASK_POLL_INTERVAL_MS;
use crate::services::{watch_task, ApiClient};
use crate::types::{TaskResponse, TaskStatus, TASK_ID_PARAM};

#[component]
pub fn TaskStatusView() -> impl IntoView {
    let query = use_query_map();
    let task_id = create_memo(move |_| {
        query.with(|q| q.get(TASK_ID_PARAM).cloned().unwrap_or_default())
    });

    let (task, set_task) = create_signal(None::<TaskResponse>);
    let (error, set_error) = create_signal(None::<String>);
    let poller = store_value(None::<AbortHandle>);

    let stop_polling = move || {
        if let Some(Some(handle)) = poller.try_get_value() {
            handle.abort();
        }
    };

    // Restart polling whenever the task id changes
    create_effect(move |_| {
        let id = task_id.get();
        stop_polling();
        set_task.set(None);
        set_error.set(None);

        let (handle, registration) = AbortHandle::new_pair();
        poller.set_value(Some(handle));

        spawn_local(async move {
            let client = ApiClient::default();
            let watch = watch_task(
                &client,
                &id,
                || TimeoutFuture::new(TASK_POLL_INTERVAL_MS),
                |snapshot| set_task.set(Some(snapshot.clone())),
            );

            if let Ok(Err(e)) = Abortable::new(watch, registration).await {
                log::error!("❌ Could not load task {}: {}", id, e);
                set_error.set(Some(e.to_string()));
            }
        });
    });
    on_cleanup(stop_polling);

    view! {
        <div class="task-status">
            <h2>"Task " <code>{move || task_id.get()}</code></h2>
            {move || match (task.get(), error.get()) {
                (_, Some(err)) => view! {
                    <div class="error-message">{err}</div>
                }.into_view(),
                (Some(task), None) => view! { <TaskSummary task=task/> }.into_view(),
                (None, None) => view! {
                    <div class="task-loading">"⏳ Loading task..."</div>
                }.into_view(),
            }}
            <a href="/" class="upload-button">"Upload another document"</a>
        </div>
    }
}

#[component]
fn TaskSummary(task: TaskResponse) -> impl IntoView {
    let status = task.status.unwrap_or(TaskStatus::Unknown);
    let created = task
        .created_at
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string());

    view! {
        <div class=format!("status-badge {}", status.css_class())>
            {format!("{:?}", status)}
        </div>
        {task.message.map(|msg| view! { <p class="task-message">{msg}</p> })}
        {created.map(|at| view! { <p class="task-created">"Created " {at}</p> })}
        {status.is_pending().then(|| view! {
            <p class="task-hint">"This page refreshes automatically."</p>
        })}
    }
}
