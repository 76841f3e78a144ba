//! Message bubble rendering.

use leptos::prelude::*;

use crate::markup::{Inline, parse_inline};
use crate::transcript::{ChatMessage, Role};

/// One transcript message bubble.
///
/// User text renders as a single escaped text run. Bot text goes through the
/// mini-markup parser: `**bold**` spans become `<strong>`, newlines become
/// `<br>`, and the literal runs in between are escaped like any other text
/// node, so upstream replies cannot inject markup beyond those two
/// transforms.
#[component]
pub fn MessageBubble(
    /// The message to render.
    message: ChatMessage,
) -> impl IntoView {
    let (wrapper, avatar) = match message.role {
        Role::User => ("message user flex flex-row-reverse items-start gap-2", "\u{1f464}"),
        Role::Bot => ("message bot flex items-start gap-2", "\u{1f916}"),
    };

    let content = match message.role {
        Role::User => view! { <span>{message.text}</span> }.into_any(),
        Role::Bot => spans_view(parse_inline(&message.text)).into_any(),
    };

    view! {
        <div class=wrapper>
            <div class="message-avatar shrink-0 h-8 w-8 rounded-full bg-panelBorder flex items-center justify-center">
                {avatar}
            </div>
            <div class="message-content max-w-[75%] rounded-xl px-4 py-2 text-sm">
                {content}
            </div>
        </div>
    }
}

fn spans_view(spans: Vec<Inline>) -> impl IntoView {
    spans
        .into_iter()
        .map(|span| match span {
            Inline::Text(text) => view! { <span>{text}</span> }.into_any(),
            Inline::Bold(text) => view! { <strong>{text}</strong> }.into_any(),
            Inline::Break => view! { <br /> }.into_any(),
        })
        .collect_view()
}
