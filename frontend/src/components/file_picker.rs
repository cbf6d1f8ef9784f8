//! File selection with a removable chip for the chosen file.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

#[component]
pub fn FilePicker(
    /// Name of the current file, if any
    #[prop(into)]
    file_name: Signal<Option<String>>,
    /// Called with the file the user picked
    #[prop(into)]
    on_select: Callback<File>,
    /// Called when the user drops the current file
    #[prop(into)]
    on_remove: Callback<()>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        on_select.call(file);
        // Picking the same file twice must still fire `change`
        input.set_value("");
    };

    let open_dialog = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="file-picker">
            <Show
                when=move || file_name.get().is_some()
                fallback=move || view! {
                    <div class="upload-zone" on:click=open_dialog>
                        <div class="upload-icon">"📄"</div>
                        <div class="upload-text">"Click to select a document"</div>
                    </div>
                }
            >
                <div class="file-chip">
                    <span class="file-name">{move || file_name.get().unwrap_or_default()}</span>
                    <button class="file-remove" title="Remove file" on:click=move |_| on_remove.call(())>
                        "✕"
                    </button>
                </div>
            </Show>

            <input
                type="file"
                node_ref=input_ref
                style="display:none"
                on:change=on_change
            />
        </div>
    }
}
