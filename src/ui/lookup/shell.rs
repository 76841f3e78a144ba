//! Lookup shell with tab switcher.

use leptos::prelude::*;

use super::{ModelForm, VinForm};
use crate::ui::components::CarIcon;

/// Lookup screen layout: tab bar plus one panel per form.
///
/// Tab state lives entirely in the browser (Alpine): exactly one tab button
/// and one panel are active at any time, and switching needs no server round
/// trip. Each panel owns its exchange region, so results survive a switch to
/// the other tab.
#[component]
pub fn LookupShell(
    /// Makes for the model form's select, already sorted.
    makes: Vec<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-4" x-data="{ tab: 'vin' }">
            <header class="flex items-center gap-2">
                <CarIcon class="h-6 w-6 text-primary" />
                <h1 class="text-xl font-bold">"Vehicle Lookup"</h1>
            </header>

            <div class="tab-bar flex gap-1 border-b border-panelBorder" role="tablist">
                <button
                    class="tab-btn px-4 py-2 text-sm font-medium"
                    role="tab"
                    x-on:click="tab = 'vin'"
                    x-bind:class="{ active: tab === 'vin' }"
                >
                    "VIN Decoder"
                </button>
                <button
                    class="tab-btn px-4 py-2 text-sm font-medium"
                    role="tab"
                    x-on:click="tab = 'models'"
                    x-bind:class="{ active: tab === 'models' }"
                >
                    "Make & Model"
                </button>
            </div>

            <section class="panel space-y-4" x-show="tab === 'vin'">
                <VinForm />
                <div id="vin-exchange"></div>
            </section>

            <section class="panel space-y-4" x-show="tab === 'models'" x-cloak="">
                <ModelForm makes=makes />
                <div id="model-exchange"></div>
            </section>
        </div>
    }
}
