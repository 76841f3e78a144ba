//! Chat screen components.
//!
//! The chat screen is one transcript region, a typing indicator, and an
//! input form. The form posts through HTMX to the chat fragment endpoint,
//! which returns the new message bubbles to append.

mod bubble;
mod input_area;
mod shell;

pub use bubble::MessageBubble;
pub use input_area::ChatInputArea;
pub use shell::ChatShell;

use leptos::prelude::*;

use crate::transcript::ChatMessage;

/// Render one completed exchange (user bubble plus bot bubble) as the
/// fragment HTMX appends to the transcript region.
#[must_use]
pub fn exchange_fragment(user: ChatMessage, bot: ChatMessage) -> String {
    view! {
        <MessageBubble message=user />
        <MessageBubble message=bot />
    }
    .to_html()
}
