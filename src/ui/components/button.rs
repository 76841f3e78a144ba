//! Button components.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-white hover:bg-primaryMuted",
            Self::Secondary => {
                "bg-panel text-textPrimary border border-panelBorder hover:bg-panelBorder"
            }
        }
    }
}

/// Basic button.
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center gap-2 h-10 px-4 rounded-lg \
                        text-sm font-medium transition-colors focus-visible:outline-none \
                        focus-visible:ring-2 focus-visible:ring-primary \
                        disabled:pointer-events-none disabled:opacity-50";

    let classes = format!("{} {} {}", base_classes, variant.classes(), class);

    view! {
        <button type=button_type class=classes>
            {children()}
        </button>
    }
}

/// Submit button whose label swaps to a busy affordance while the owning
/// form has a request in flight.
///
/// The swap is pure CSS: `.btn-label` hides and `.btn-busy` (loader plus
/// busy label) shows under `form.htmx-request`. Pair with
/// `hx-disabled-elt="find button"` on the form so the control is also
/// disabled for the duration.
#[component]
pub fn SubmitButton(
    /// Idle label.
    label: &'static str,
    /// Label shown next to the loader while the request is in flight.
    #[prop(default = "Processing...")]
    busy_label: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center gap-2 h-10 px-4 rounded-lg \
                        text-sm font-medium bg-primary text-white hover:bg-primaryMuted \
                        transition-colors disabled:pointer-events-none disabled:opacity-50";

    let classes = format!("{} {}", base_classes, class);

    view! {
        <button type="submit" class=classes>
            <span class="btn-label">{label}</span>
            <span class="btn-busy">
                <span class="loader"></span>
                " "
                {busy_label}
            </span>
        </button>
    }
}
