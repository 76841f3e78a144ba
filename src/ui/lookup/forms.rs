//! VIN and make/model lookup forms.

use leptos::prelude::*;

use crate::ui::components::{Card, CardContent, CardHeader, Input, Select, SubmitButton};

/// VIN decode form.
///
/// No client-side format validation: the VIN goes to the server as typed and
/// validation is the upstream's job. The busy affordance (disabled control,
/// loader in place of the label) is bounded by the fragment request.
#[component]
pub fn VinForm() -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <h3 class="font-semibold">"VIN Decoder"</h3>
                <p class="text-sm text-textMuted">
                    "Decode a Vehicle Identification Number into its attributes"
                </p>
            </CardHeader>
            <CardContent>
                <form
                    class="flex gap-2"
                    hx-post="/ui/vehicles/vin"
                    hx-target="#vin-exchange"
                    hx-swap="innerHTML"
                    hx-disabled-elt="find button"
                    hx-on--before-request="document.getElementById('vin-exchange').replaceChildren()"
                >
                    <Input
                        name="vin"
                        placeholder="Enter VIN"
                        required=true
                        class="flex-1 uppercase"
                    />
                    <SubmitButton label="Decode VIN" />
                </form>
            </CardContent>
        </Card>
    }
}

/// Make/model lookup form.
///
/// Both fields are checked server-side; a submission missing either is a
/// silent no-op (204, which HTMX leaves unswapped).
#[component]
pub fn ModelForm(
    /// Makes for the select, already sorted ascending.
    makes: Vec<String>,
) -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <h3 class="font-semibold">"Make & Model Lookup"</h3>
                <p class="text-sm text-textMuted">
                    "List the models offered for a make in a given year"
                </p>
            </CardHeader>
            <CardContent>
                <form
                    class="grid gap-2 md:grid-cols-[1fr_minmax(6rem,10rem)_auto]"
                    hx-post="/ui/vehicles/models"
                    hx-target="#model-exchange"
                    hx-swap="innerHTML"
                    hx-disabled-elt="find button"
                    hx-on--before-request="document.getElementById('model-exchange').replaceChildren()"
                >
                    <Select name="make" placeholder="Select make" options=makes />
                    <Input name="year" input_type="number" placeholder="Year" />
                    <SubmitButton label="Find Models" />
                </form>
            </CardContent>
        </Card>
    }
}
