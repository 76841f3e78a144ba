//! Router, page handlers, and HTMX fragment handlers.
//!
//! Each fragment handler is the server-side half of one form's exchange
//! cycle: it validates the submission, issues the single upstream call, and
//! renders either the result or the error region. The busy affordances are
//! declared in the page markup and bounded by the fragment request itself.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::AppState;
use crate::config::AppConfig;
use crate::transcript::{ChatMessage, Role};
use crate::ui;
use crate::upstream::UpstreamError;

/// Fallback bubble when the chat upstream cannot be reached (or answers
/// with something that is not a reply).
const CHAT_FALLBACK: &str = "Sorry, I'm having trouble connecting. Please try again.";

/// Error shown for a VIN rejection without a server-supplied message.
const VIN_REJECTED_FALLBACK: &str = "Could not decode VIN";

/// Error shown when a lookup call fails at the transport level.
const NETWORK_ERROR: &str = "Network error occurred";

/// Error shown when a model lookup yields nothing usable.
const NO_MODELS_FOUND: &str = "No models found for this criteria";

/// Interval between expired-transcript sweeps.
const SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Start the Axum server with the provided configuration.
pub async fn start(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::new(config.clone());

    // Sweep expired transcripts in the background.
    let transcripts = state.transcripts.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = transcripts.cleanup_expired();
            if removed > 0 {
                info!(name: "transcripts.swept", removed, "Expired transcripts removed");
            }
        }
    });

    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(chat_page))
        .route("/vehicles", get(vehicles_page))
        // HTMX fragment endpoints
        .route("/ui/chat/messages", post(post_chat_message))
        .route("/ui/vehicles/vin", post(post_vin))
        .route("/ui/vehicles/models", post(post_models))
        // Static assets
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Chat screen with a fresh transcript.
///
/// Every page load starts a new conversation; the transcript already carries
/// the welcome bubble.
async fn chat_page(State(state): State<AppState>) -> Html<String> {
    let transcript = state.transcripts.create(&state.config.chat.welcome);
    Html(ui::app::chat_page(transcript.id(), transcript.messages()))
}

/// GET /vehicles - Lookup screen with the makes select populated.
///
/// A failure to load makes is logged and the select renders empty; the page
/// itself always succeeds.
async fn vehicles_page(State(state): State<AppState>) -> Html<String> {
    let makes = match state.vehicles.list_makes().await {
        Ok(mut makes) => {
            makes.sort();
            makes
        }
        Err(e) => {
            warn!(name: "makes.load_failed", error = %e, "Failed to load makes");
            Vec::new()
        }
    };

    Html(ui::app::vehicles_page(makes))
}

// ─────────────────────────────────────────────────────────────────────────────
// Fragment Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Form body for a chat submission.
#[derive(Debug, Deserialize)]
struct ChatSubmission {
    /// Transcript ID from the page's hidden input.
    #[serde(default)]
    session_id: String,
    /// User message text.
    #[serde(default)]
    message: String,
}

/// POST /ui/chat/messages - One chat exchange.
///
/// Empty or whitespace-only input is a no-op: nothing appended, no upstream
/// call, 204 so HTMX leaves the page untouched. Otherwise the user message
/// lands in the transcript before any network activity, and the fragment
/// carries exactly the two new bubbles.
async fn post_chat_message(
    State(state): State<AppState>,
    Form(form): Form<ChatSubmission>,
) -> Response {
    let text = form.message.trim();
    if text.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let transcript = state
        .transcripts
        .get_or_create(&form.session_id, &state.config.chat.welcome);

    transcript.push_user(text);

    info!(
        name: "chat.exchange",
        session_id = %transcript.id(),
        "Relaying chat message"
    );

    let reply = match state.chat.send(text).await {
        Ok(reply) => {
            // Cosmetic delay so a fast upstream does not feel instant.
            let delay = state.config.chat.reply_delay_ms;
            if delay > 0 {
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            reply
        }
        Err(e) => {
            error!(name: "chat.upstream_failed", error = %e, "Chat upstream failed");
            CHAT_FALLBACK.to_string()
        }
    };

    transcript.push_bot(reply.clone());

    let user = ChatMessage {
        role: Role::User,
        text: text.to_string(),
    };
    let bot = ChatMessage {
        role: Role::Bot,
        text: reply,
    };

    Html(ui::chat::exchange_fragment(user, bot)).into_response()
}

/// Form body for a VIN decode submission.
#[derive(Debug, Deserialize)]
struct VinSubmission {
    #[serde(default)]
    vin: String,
}

/// POST /ui/vehicles/vin - One VIN decode exchange.
///
/// Renders the result grid, or the error region with the server message
/// (falling back to a fixed one), or the generic network error. All paths
/// return 200 so the busy state always settles the same way.
async fn post_vin(State(state): State<AppState>, Form(form): Form<VinSubmission>) -> Html<String> {
    let vin = form.vin.trim();

    let fragment = match state.vehicles.decode_vin(vin).await {
        Ok(fields) => ui::lookup::vin_result_fragment(fields),
        Err(UpstreamError::Rejected { message }) => {
            let message = message.unwrap_or_else(|| VIN_REJECTED_FALLBACK.to_string());
            ui::lookup::error_fragment(message)
        }
        Err(e @ UpstreamError::Transport(_)) => {
            error!(name: "vin.upstream_failed", error = %e, "VIN decode failed");
            ui::lookup::error_fragment(NETWORK_ERROR)
        }
    };

    Html(fragment)
}

/// Form body for a model lookup submission.
#[derive(Debug, Deserialize)]
struct ModelSubmission {
    #[serde(default)]
    make: String,
    #[serde(default)]
    year: String,
}

/// POST /ui/vehicles/models - One model lookup exchange.
///
/// A submission missing the make or the year is a silent no-op (204). An
/// empty model list and a rejection render the same fixed message; the
/// server's `message` field is not surfaced on this path.
async fn post_models(
    State(state): State<AppState>,
    Form(form): Form<ModelSubmission>,
) -> Response {
    let make = form.make.trim();
    let year = form.year.trim();
    if make.is_empty() || year.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let fragment = match state.vehicles.list_models(make, year).await {
        Ok(models) if !models.is_empty() => ui::lookup::model_list_fragment(models),
        Ok(_) | Err(UpstreamError::Rejected { .. }) => {
            ui::lookup::error_fragment(NO_MODELS_FOUND)
        }
        Err(e @ UpstreamError::Transport(_)) => {
            error!(name: "models.upstream_failed", error = %e, "Model lookup failed");
            ui::lookup::error_fragment(NETWORK_ERROR)
        }
    };

    Html(fragment).into_response()
}
