//! Pushover notification activity.
//!
//! A single unit of work meant to run inside a workflow engine: given a text
//! message and two credential tokens, it conditionally delivers the message
//! to the Pushover push API and reports a normalized status (`204` skipped,
//! `200` delivered, `400` rejected) back to the caller. The hosting engine is
//! abstracted behind the narrow traits in [`host`], so the activity can be
//! driven by any engine or by the in-memory fakes in tests.

pub mod activities;
pub mod error;
pub mod host;
pub mod settings;

pub use activities::{Delivery, Input, Output, PUSHOVER_API_URL, PushoverActivity};
pub use error::ActivityError;
pub use host::{InvocationChannel, SettingsSource};
pub use settings::Settings;
