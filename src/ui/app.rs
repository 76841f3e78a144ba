//! HTML shell and page assembly.

use leptos::prelude::*;

use crate::transcript::ChatMessage;
use crate::ui::chat::ChatShell;
use crate::ui::lookup::LookupShell;

/// Render the chat page for one transcript.
#[must_use]
pub fn chat_page(session_id: &str, messages: Vec<ChatMessage>) -> String {
    let session_id = session_id.to_string();
    let content = view! {
        <ChatShell
            title="Assistant"
            session_id=session_id
            messages=messages
        />
    }
    .to_html();

    html_shell("Chat", &content)
}

/// Render the vehicle lookup page.
#[must_use]
pub fn vehicles_page(makes: Vec<String>) -> String {
    let content = view! { <LookupShell makes=makes /> }.to_html();

    html_shell("Vehicle Lookup", &content)
}

/// Generate the HTML shell for the application.
///
/// Local scripts only (no CDN): HTMX drives the form exchanges, Alpine the
/// tab switcher.
fn html_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Chat and vehicle lookup front-ends">
    <title>{title} - Frontdesk</title>

    <!-- HTMX and Alpine (local) -->
    <script src="/static/vendor/htmx-2.0.8.min.js"></script>
    <script defer src="/static/vendor/alpine.min.js"></script>

    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="min-h-screen bg-background text-textPrimary antialiased">
    <div id="app-shell" class="flex flex-col min-h-screen">
        <header class="sticky top-0 z-50 w-full border-b border-panelBorder bg-background/95 backdrop-blur">
            <div class="container mx-auto flex h-14 items-center justify-between px-4 max-w-5xl">
                <a href="/" class="flex items-center gap-2 font-semibold">
                    <span class="text-lg">Frontdesk</span>
                </a>
                <nav class="flex items-center gap-6" hx-boost="true">
                    <a href="/" class="text-sm text-textMuted hover:text-textPrimary transition-colors">Chat</a>
                    <a href="/vehicles" class="text-sm text-textMuted hover:text-textPrimary transition-colors">Vehicles</a>
                </nav>
            </div>
        </header>

        <main id="app" class="flex-1 container mx-auto px-4 py-6 max-w-5xl">
            {content}
        </main>

        <footer class="border-t border-panelBorder py-4">
            <div class="container mx-auto px-4 max-w-5xl">
                <p class="text-xs text-textMuted text-center">
                    Powered by Axum + Leptos + HTMX
                </p>
            </div>
        </footer>
    </div>
</body>
</html>"#
    )
}
