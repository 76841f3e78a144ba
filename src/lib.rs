//! Frontdesk
//!
//! An HTML-first front-of-house server with two screens: a chat widget that
//! relays user text to an external chat service, and a vehicle lookup UI
//! backed by an external vehicle API. Both screens follow the same
//! micro-pattern — capture input, validate, go busy, issue one upstream
//! call, render the result or an error, clear busy — realized as HTMX form
//! exchanges against server-rendered fragments.
//!
//! # Architecture
//!
//! - **Server**: Axum HTTP server rendering pages and HTMX fragments
//! - **UI**: Leptos SSR + HTMX + Alpine.js
//! - **Upstreams**: reqwest clients for the chat and vehicle services
//!
//! # Modules
//!
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`markup`]: Minimal inline markup for bot replies
//! - [`server`]: Router, page and fragment handlers
//! - [`transcript`]: Per-session chat transcripts
//! - [`ui`]: Leptos SSR components
//! - [`upstream`]: External service clients

pub mod config;
pub mod markup;
pub mod server;
pub mod transcript;
pub mod ui;
pub mod upstream;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::transcript::TranscriptStore;
use crate::upstream::{ChatClient, VehicleClient};

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Chat service client.
    pub chat: Arc<ChatClient>,
    /// Vehicle API client.
    pub vehicles: Arc<VehicleClient>,
    /// Active chat transcripts.
    pub transcripts: TranscriptStore,
    /// Global configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build the state (and the upstream clients) from configuration.
    #[must_use]
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            chat: Arc::new(ChatClient::new(config.upstream.chat_base_url.clone())),
            vehicles: Arc::new(VehicleClient::new(config.upstream.vehicle_base_url.clone())),
            transcripts: TranscriptStore::new(),
            config,
        }
    }
}
