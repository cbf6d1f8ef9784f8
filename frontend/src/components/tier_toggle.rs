use leptos::*;

use crate::types::ProcessingTier;

#[component]
pub fn TierToggle(
    #[prop(into)] tier: Signal<ProcessingTier>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let high_quality = move || tier.get() == ProcessingTier::HighQuality;

    view! {
        <div class="tier-toggle">
            <span class="tier-label" class:active=move || !high_quality()>
                {ProcessingTier::Fast.label()}
            </span>
            <label class="switch">
                <input
                    type="checkbox"
                    prop:checked=high_quality
                    on:change=move |_| on_toggle.call(())
                />
                <span class="slider"></span>
            </label>
            <span class="tier-label" class:active=high_quality>
                {ProcessingTier::HighQuality.label()}
            </span>
        </div>
    }
}
