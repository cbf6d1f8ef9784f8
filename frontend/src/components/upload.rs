//! Document upload form.
//!
//! Wires the [`FilePicker`] and [`TierToggle`] to the workflow state
//! machine, runs the upload call and follows the resulting navigation.

use futures::future::AbortHandle;
use leptos::*;
use web_sys::File;

use crate::components::{FilePicker, TierToggle};
use crate::services::{submission, BrowserNavigator, HttpUploadService, Navigator};
use crate::workflow::{update, Effect, Event, WorkflowState};

/// Everything the form's handlers need, as copyable reactive handles.
#[derive(Clone, Copy)]
struct Workflow {
    state: RwSignal<WorkflowState<File>>,
    in_flight: StoredValue<Option<AbortHandle>>,
    service: StoredValue<HttpUploadService>,
    navigator: StoredValue<BrowserNavigator>,
}

impl Workflow {
    fn dispatch(self, event: Event<File>) {
        let Some(effect) = self.state.try_update(|state| update(state, event)).flatten() else {
            return;
        };

        match effect {
            Effect::Upload(request) => {
                let (call, handle) = submission(self.service.get_value(), request);
                self.in_flight.set_value(Some(handle));

                spawn_local(async move {
                    if let Some(outcome) = call.await {
                        self.in_flight.set_value(None);
                        self.dispatch(outcome);
                    }
                });
            }
            Effect::Navigate(route) => self.navigator.with_value(|nav| nav.navigate(&route)),
        }
    }

    /// Drop a pending upload so its outcome never reaches disposed state.
    fn abort(self) {
        if let Some(Some(handle)) = self.in_flight.try_get_value() {
            log::debug!("Upload form unmounted, aborting pending upload");
            handle.abort();
        }
    }
}

#[component]
pub fn UploadWorkflow() -> impl IntoView {
    let workflow = Workflow {
        state: create_rw_signal(WorkflowState::default()),
        in_flight: store_value(None),
        service: store_value(HttpUploadService::default()),
        navigator: store_value(BrowserNavigator::from_router()),
    };
    on_cleanup(move || workflow.abort());

    let state = workflow.state;
    let error = move || state.with(|s| s.error_message.clone());
    let file_name = Signal::derive(move || state.with(|s| s.display_name.clone()));
    let tier = Signal::derive(move || state.with(|s| s.tier));

    view! {
        <div class="upload-section">
            <Show
                when=move || error().is_none()
                fallback=move || view! {
                    <div class="error-panel">
                        <div class="error-message">{move || error().unwrap_or_default()}</div>
                        <button
                            class="upload-button"
                            on:click=move |_| workflow.dispatch(Event::ErrorDismissed)
                        >
                            "Back to start"
                        </button>
                    </div>
                }
            >
                <FilePicker
                    file_name=file_name
                    on_select=move |file: File| workflow.dispatch(Event::FileSelected(file))
                    on_remove=move |_: ()| workflow.dispatch(Event::FileRemoved)
                />
                <TierToggle
                    tier=tier
                    on_toggle=move |_: ()| workflow.dispatch(Event::TierToggled)
                />
                <button
                    class="run-button"
                    disabled=move || !state.with(|s| s.can_submit())
                    on:click=move |_| workflow.dispatch(Event::SubmitRequested)
                >
                    {move || state.with(|s| s.submit_label())}
                </button>
            </Show>
        </div>
    }
}
