//! Clients for the external services this UI fronts.
//!
//! Both screens are glue around one upstream call per form submission: the
//! chat screen relays text to the chat service, the lookup screen queries the
//! vehicle API. The clients here are thin reqwest wrappers; they decode the
//! wire envelopes and translate them into the two error kinds the UI layer
//! distinguishes.
//!
//! # Error taxonomy
//!
//! - [`UpstreamError::Transport`]: the call itself failed — connection
//!   refused, DNS, non-2xx status, or an undecodable body. The UI degrades
//!   to a fixed, generic message.
//! - [`UpstreamError::Rejected`]: the call succeeded but the payload signals
//!   a non-success status. The UI surfaces the server-supplied message where
//!   the flow's contract provides one.
//!
//! No timeout is applied to any call; a hung request leaves the form's busy
//! state active until the connection dies.

pub mod chat;
pub mod vehicle;

pub use chat::ChatClient;
pub use vehicle::{VehicleClient, VinDecode};

/// Errors produced by the upstream clients.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Transport-level failure: send error, non-2xx, or undecodable body.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-success status envelope.
    #[error("upstream rejected the request")]
    Rejected {
        /// Server-supplied diagnostic, when the envelope carries one.
        message: Option<String>,
    },
}
