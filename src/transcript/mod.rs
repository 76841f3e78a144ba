//! Chat transcript management.
//!
//! This module provides in-memory transcript storage for the chat screen.
//! A transcript is the ordered, append-only sequence of messages shown to
//! one browser session, identified by UUID. A freshly created transcript
//! carries the welcome message so the bot greets before any interaction.
//!
//! # Architecture
//!
//! - [`Transcript`]: One session's message sequence
//! - [`TranscriptStore`]: Thread-safe store for all active transcripts
//!
//! # Example
//!
//! ```rust
//! use frontdesk::transcript::{Role, TranscriptStore};
//!
//! let store = TranscriptStore::new();
//! let transcript = store.create("Welcome!");
//! transcript.push_user("Hello!");
//!
//! let messages = transcript.messages();
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].role, Role::Bot);
//! ```

mod store;

pub use store::{ChatMessage, Role, Transcript, TranscriptStore};
