//! Result and error regions for the lookup forms.

use leptos::prelude::*;

use crate::upstream::VinDecode;
use crate::upstream::vehicle::display_value;

/// Placeholder shown for missing or empty attribute values.
const VALUE_PLACEHOLDER: &str = "N/A";

/// VIN decode result grid: one row per attribute, in returned order.
#[component]
pub fn VinResultGrid(
    /// Decoded attributes.
    fields: VinDecode,
) -> impl IntoView {
    view! {
        <div class="result-region rounded-xl border border-panelBorder bg-panel p-4">
            <div class="result-grid grid gap-2 md:grid-cols-2">
                {fields
                    .into_iter()
                    .map(|(label, value)| {
                        let value = display_value(&value)
                            .unwrap_or_else(|| VALUE_PLACEHOLDER.to_string());
                        view! {
                            <div class="result-item rounded-lg bg-background px-3 py-2">
                                <div class="result-label text-xs text-textMuted">{label}</div>
                                <div class="result-value text-sm font-medium">{value}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Model lookup result list, preserving returned order.
#[component]
pub fn ModelList(
    /// Model names.
    models: Vec<String>,
) -> impl IntoView {
    view! {
        <div class="result-region rounded-xl border border-panelBorder bg-panel p-4">
            <div class="model-list grid gap-2 md:grid-cols-2">
                {models
                    .into_iter()
                    .map(|model| {
                        view! {
                            <div class="result-item rounded-lg bg-background px-3 py-2">
                                <div class="result-value text-sm font-medium">{model}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Error region shown in place of a result.
#[component]
pub fn LookupError(
    /// User-facing message.
    message: String,
) -> impl IntoView {
    view! {
        <div class="error-region rounded-xl border border-danger/40 bg-danger/10 text-danger px-4 py-3 text-sm" role="alert">
            {message}
        </div>
    }
}
