//! Chat shell layout component.

use leptos::prelude::*;

use super::{ChatInputArea, MessageBubble};
use crate::transcript::ChatMessage;
use crate::ui::components::SparklesIcon;

/// Main chat shell component.
///
/// Provides the complete chat interface layout with:
/// - Header with title
/// - Scrollable transcript region (bubbles append via HTMX)
/// - Typing indicator, visible while an exchange is in flight
/// - Input area for new messages
#[component]
pub fn ChatShell(
    /// Title displayed in the header.
    #[prop(default = "Chat")]
    title: &'static str,
    /// Transcript ID posted with each message.
    session_id: String,
    /// Messages rendered so far, oldest first.
    messages: Vec<ChatMessage>,
) -> impl IntoView {
    view! {
        <div class="chat-shell flex flex-col h-[calc(100vh-12rem)] bg-panel border border-panelBorder rounded-2xl overflow-hidden">
            <header class="flex items-center gap-2 px-5 py-3 border-b border-panelBorder shrink-0">
                <SparklesIcon class="h-5 w-5 text-primary" />
                <h2 class="font-semibold text-base">{title}</h2>
            </header>

            <div
                id="chat-messages"
                class="flex-1 overflow-y-auto px-4 py-4 space-y-3"
                aria-live="polite"
                aria-label="Chat messages"
                hx-on--after-swap="this.scrollTop = this.scrollHeight"
            >
                {messages
                    .into_iter()
                    .map(|message| view! { <MessageBubble message=message /> })
                    .collect_view()}
            </div>

            <div
                id="typing-indicator"
                class="htmx-indicator typing-indicator px-5 pb-1 text-textMuted"
            >
                <span class="dot"></span>
                <span class="dot"></span>
                <span class="dot"></span>
            </div>

            <ChatInputArea session_id=session_id />
        </div>
    }
}
