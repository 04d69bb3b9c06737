//! Error taxonomy for the activity.

use thiserror::Error;

/// The three failure modes of the activity. A rejected delivery (HTTP 400
/// from Pushover) is deliberately *not* here: it surfaces as the output value
/// `status = 400` so downstream workflow steps can branch on it without
/// error-style control flow.
#[derive(Debug, Error)]
pub enum ActivityError {
    /// A required setting is missing or has the wrong type. Fatal to
    /// construction; the activity never starts with an invalid configuration.
    #[error("invalid activity settings: {0}")]
    Configuration(#[source] serde_json::Error),

    /// The invocation input record could not be interpreted. Fatal to that
    /// single invocation only; no network call is made.
    #[error("invalid invocation input: {0}")]
    Input(#[source] serde_json::Error),

    /// The outbound request could not be sent or its response could not be
    /// read. No output is produced; the hosting engine decides whether to
    /// retry.
    #[error("pushover request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
