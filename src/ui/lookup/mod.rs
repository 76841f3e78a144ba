//! Vehicle lookup screen components.
//!
//! Two independent forms (VIN decode, make/model lookup) behind a
//! client-side tab switcher. Each form posts through HTMX to its fragment
//! endpoint and swaps the returned result or error region wholesale.

mod forms;
mod results;
mod shell;

pub use forms::{ModelForm, VinForm};
pub use results::{LookupError, ModelList, VinResultGrid};
pub use shell::LookupShell;

use leptos::prelude::*;

use crate::upstream::VinDecode;

/// Render the VIN result region fragment.
#[must_use]
pub fn vin_result_fragment(fields: VinDecode) -> String {
    view! { <VinResultGrid fields=fields /> }.to_html()
}

/// Render the model list result region fragment.
#[must_use]
pub fn model_list_fragment(models: Vec<String>) -> String {
    view! { <ModelList models=models /> }.to_html()
}

/// Render the error region fragment.
#[must_use]
pub fn error_fragment(message: impl Into<String>) -> String {
    let message = message.into();
    view! { <LookupError message=message /> }.to_html()
}
