//! Form input components.

use leptos::prelude::*;

/// Text input component.
#[component]
pub fn Input(
    /// Input type (text, number, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Whether the input is required.
    #[prop(default = false)]
    required: bool,
    /// Whether the input grabs focus on load.
    #[prop(default = false)]
    autofocus: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_classes = "flex h-10 w-full rounded-lg border border-panelBorder bg-background \
                        px-3 py-2 text-sm text-textPrimary placeholder:text-textMuted \
                        focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary \
                        disabled:cursor-not-allowed disabled:opacity-50";

    let classes = format!("{} {}", base_classes, class);

    view! {
        <input
            type=input_type
            class=classes
            placeholder=placeholder
            name=name
            id=id
            required=required
            autofocus=autofocus
            autocomplete="off"
        />
    }
}

/// Select component populated from a list of options.
///
/// Every option's value equals its label; the first entry is a disabled
/// placeholder with an empty value so an untouched control submits nothing
/// selectable.
#[component]
pub fn Select(
    /// Select name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Select ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Placeholder label for the empty first option.
    #[prop(default = "Select...")]
    placeholder: &'static str,
    /// Option values, rendered in the given order.
    options: Vec<String>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_classes = "flex h-10 w-full rounded-lg border border-panelBorder bg-background \
                        px-3 py-2 text-sm text-textPrimary \
                        focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary";

    let classes = format!("{} {}", base_classes, class);

    view! {
        <select class=classes name=name id=id>
            <option value="" selected=true disabled=true>{placeholder.to_string()}</option>
            {options
                .into_iter()
                .map(|option| {
                    let value = option.clone();
                    view! { <option value=value>{option}</option> }
                })
                .collect_view()}
        </select>
    }
}
