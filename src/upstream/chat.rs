//! Client for the external chat service.

use serde::Deserialize;

use super::UpstreamError;

/// Reply envelope from the chat service.
#[derive(Debug, Deserialize)]
struct ChatReply {
    /// Bot reply text.
    response: String,
}

/// Client for the chat service (`POST {base}/chat`).
///
/// The service owns all conversational logic; this client only relays one
/// user message and returns the reply text.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChatClient {
    /// Create a new chat client for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Send one user message and return the bot reply text.
    ///
    /// Non-2xx responses and bodies that do not decode to
    /// `{"response": string}` both map to [`UpstreamError::Transport`]; the
    /// chat flow renders the same fallback bubble for either.
    pub async fn send(&self, message: &str) -> Result<String, UpstreamError> {
        let url = format!("{}/chat", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({ "message": message });

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let reply: ChatReply = resp.json().await?;
        Ok(reply.response)
    }
}
