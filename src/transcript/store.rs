//! Transcript and transcript storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Default transcript timeout (30 minutes).
const DEFAULT_TRANSCRIPT_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Message typed by the user.
    User,
    /// Reply produced by the chat upstream (or a synthesized fallback).
    Bot,
}

/// One message in a transcript. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Message author.
    pub role: Role,
    /// Raw message text (unescaped; escaping happens at render time).
    pub text: String,
}

/// A single chat transcript.
///
/// Transcripts are append-only: messages appear in creation order, oldest
/// first. Handles are cheap to clone and share one underlying sequence.
#[derive(Debug)]
pub struct Transcript {
    inner: Arc<TranscriptInner>,
}

#[derive(Debug)]
struct TranscriptInner {
    /// Unique transcript identifier.
    id: String,
    /// Messages in append order.
    messages: RwLock<Vec<ChatMessage>>,
    /// Last activity time, drives expiry.
    last_activity: RwLock<DateTime<Utc>>,
}

impl Clone for Transcript {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Transcript {
    /// Create a new transcript seeded with the welcome message.
    fn new(id: String, welcome: &str) -> Self {
        let seed = ChatMessage {
            role: Role::Bot,
            text: welcome.to_string(),
        };
        Self {
            inner: Arc::new(TranscriptInner {
                id,
                messages: RwLock::new(vec![seed]),
                last_activity: RwLock::new(Utc::now()),
            }),
        }
    }

    /// Get the transcript ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Append a user message.
    pub fn push_user(&self, text: impl Into<String>) {
        self.push(ChatMessage {
            role: Role::User,
            text: text.into(),
        });
    }

    /// Append a bot message.
    pub fn push_bot(&self, text: impl Into<String>) {
        self.push(ChatMessage {
            role: Role::Bot,
            text: text.into(),
        });
    }

    /// Append a message.
    pub fn push(&self, message: ChatMessage) {
        let mut guard = self.inner.messages.write().unwrap();
        guard.push(message);
        drop(guard);
        self.touch();
    }

    /// Get all messages in append order.
    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.inner.messages.read().unwrap().clone()
    }

    /// Get the number of messages.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.inner.messages.read().unwrap().len()
    }

    /// Update the last activity timestamp.
    fn touch(&self) {
        let mut guard = self.inner.last_activity.write().unwrap();
        *guard = Utc::now();
    }

    /// Check if the transcript has been inactive longer than the timeout.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        let last = *self.inner.last_activity.read().unwrap();
        let now = Utc::now();
        if let Ok(duration) = (now - last).to_std() {
            duration > timeout
        } else {
            // Negative duration means clock skew or "last" is in future.
            false
        }
    }
}

/// Thread-safe store for transcripts.
#[derive(Debug, Clone)]
pub struct TranscriptStore {
    inner: Arc<TranscriptStoreInner>,
}

#[derive(Debug)]
struct TranscriptStoreInner {
    transcripts: RwLock<HashMap<String, Transcript>>,
}

impl Default for TranscriptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptStore {
    /// Create a new transcript store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(TranscriptStoreInner {
                transcripts: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Create a new transcript and return it.
    #[must_use]
    pub fn create(&self, welcome: &str) -> Transcript {
        let id = Uuid::new_v4().to_string();
        let transcript = Transcript::new(id.clone(), welcome);
        let mut guard = self.inner.transcripts.write().unwrap();
        guard.insert(id, transcript.clone());
        transcript
    }

    /// Get a transcript by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Transcript> {
        let guard = self.inner.transcripts.read().unwrap();
        guard.get(id).cloned()
    }

    /// Get a transcript by ID, creating a fresh one (with the welcome
    /// message) if it does not exist or the ID is empty.
    #[must_use]
    pub fn get_or_create(&self, id: &str, welcome: &str) -> Transcript {
        if !id.is_empty() {
            let guard = self.inner.transcripts.read().unwrap();
            if let Some(transcript) = guard.get(id) {
                return transcript.clone();
            }
        }

        self.create(welcome)
    }

    /// Remove a transcript by ID.
    pub fn remove(&self, id: &str) -> Option<Transcript> {
        let mut guard = self.inner.transcripts.write().unwrap();
        guard.remove(id)
    }

    /// Get the number of active transcripts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.transcripts.read().unwrap().len()
    }

    /// Check if there are no transcripts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove transcripts inactive longer than the default timeout.
    ///
    /// Returns the number removed.
    pub fn cleanup_expired(&self) -> usize {
        self.cleanup_expired_with_timeout(DEFAULT_TRANSCRIPT_TIMEOUT)
    }

    /// Remove transcripts inactive longer than the given timeout.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = self.inner.transcripts.write().unwrap();
        let before = guard.len();
        guard.retain(|_, transcript| !transcript.is_expired_with_timeout(timeout));
        before - guard.len()
    }
}
