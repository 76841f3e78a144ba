//! Chat message input area.

use leptos::prelude::*;

use crate::ui::components::{Button, Input, SendIcon};

/// Chat message input area with HTMX form submission.
///
/// The form appends the returned bubbles to the transcript region, shows the
/// typing indicator for the duration of the exchange, and disables the send
/// control while the request is in flight.
#[component]
pub fn ChatInputArea(
    /// Transcript ID for the conversation.
    session_id: String,
) -> impl IntoView {
    view! {
        <div class="border-t border-panelBorder p-4 bg-panel/50 shrink-0">
            <form
                class="flex gap-2"
                hx-post="/ui/chat/messages"
                hx-target="#chat-messages"
                hx-swap="beforeend"
                hx-indicator="#typing-indicator"
                hx-disabled-elt="find button"
                hx-on--before-request="this.reset()"
                hx-on--after-request="this.querySelector('[name=message]').focus()"
            >
                <input type="hidden" name="session_id" value=session_id />

                <Input
                    name="message"
                    placeholder="Type your message..."
                    required=true
                    autofocus=true
                    class="flex-1"
                />

                <Button button_type="submit" class="shrink-0 w-10 px-0">
                    <SendIcon class="h-5 w-5" />
                </Button>
            </form>

            <p class="text-xs text-textMuted mt-2 text-center">"Press Enter to send"</p>
        </div>
    }
}
