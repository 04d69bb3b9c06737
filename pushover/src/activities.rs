//! The notification dispatch activity.

use log::{debug, info};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ActivityError;
use crate::host::{InvocationChannel, SettingsSource};
use crate::settings::Settings;

/// Fixed production endpoint for message delivery.
pub const PUSHOVER_API_URL: &str = "https://api.pushover.net/1/messages.json";

/// Invocation input. The host coerces a missing `message` key to the empty
/// string; emptiness is a meaningful value (skip), not an error.
#[derive(Debug, Deserialize)]
pub struct Input {
    #[serde(default)]
    pub message: String,
}

/// Invocation output: `status` is always exactly one of 204, 200 or 400.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Output {
    pub status: u16,
}

impl Output {
    fn into_record(self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("status".to_string(), Value::from(self.status));
        record
    }
}

/// Terminal outcome of one invocation. A rejection is a data value the
/// calling workflow can branch on; transport failures propagate as errors
/// instead and never produce an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Inactive activity or empty message; no network call was made.
    Skipped,
    /// Pushover accepted the message.
    Delivered,
    /// Pushover answered 400 (bad credentials or payload).
    Rejected,
}

impl Delivery {
    /// Status code reported to the host for this outcome.
    pub const fn status(self) -> u16 {
        match self {
            Delivery::Skipped => 204,
            Delivery::Delivered => 200,
            Delivery::Rejected => 400,
        }
    }
}

/// Wire-format request body sent to Pushover.
#[derive(Serialize)]
struct PushoverMessage<'a> {
    token: &'a str,
    user: &'a str,
    message: &'a str,
}

/// The activity: validated immutable settings plus a reusable HTTP client.
/// Invocations share no mutable state, so one instance may serve concurrent
/// invocations.
pub struct PushoverActivity {
    settings: Settings,
    client: reqwest::Client,
    endpoint: String,
}

impl PushoverActivity {
    /// Construct the activity from the host-supplied settings record.
    ///
    /// Validation happens here, synchronously: an invalid record returns
    /// [`ActivityError::Configuration`] and no activity ever exists, so
    /// dispatch can never fail lazily on bad configuration.
    pub fn new(source: &dyn SettingsSource) -> Result<Self, ActivityError> {
        let settings = Settings::resolve(source)?;

        Ok(Self {
            settings,
            client: reqwest::Client::new(),
            endpoint: PUSHOVER_API_URL.to_string(),
        })
    }

    /// Point the dispatcher at a different endpoint. Tests use this to target
    /// a local mock server; production callers keep the default.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Run one invocation: read the input record, decide whether to deliver,
    /// and write the `{status}` output record back through the channel.
    ///
    /// Output is written once, at the end, and only on the non-error paths;
    /// a failed invocation leaves the channel untouched.
    pub async fn eval(&self, ctx: &mut dyn InvocationChannel) -> Result<(), ActivityError> {
        let input: Input = serde_json::from_value(Value::Object(ctx.input().clone()))
            .map_err(ActivityError::Input)?;

        let outcome = if !self.settings.active || input.message.is_empty() {
            debug!(
                "skipping delivery (active={}, empty_message={})",
                self.settings.active,
                input.message.is_empty()
            );
            Delivery::Skipped
        } else {
            self.send(&input.message).await?
        };

        let output = Output {
            status: outcome.status(),
        };
        ctx.set_output(output.into_record());

        Ok(())
    }

    async fn send(&self, message: &str) -> Result<Delivery, ActivityError> {
        let body = PushoverMessage {
            token: &self.settings.app_token,
            user: &self.settings.group_token,
            message,
        };

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        info!("pushover answered {status}");

        // 400 means Pushover rejected the credentials or payload; every other
        // answer counts as delivered.
        if status == StatusCode::BAD_REQUEST {
            Ok(Delivery::Rejected)
        } else {
            Ok(Delivery::Delivered)
        }
    }
}
