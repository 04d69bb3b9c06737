//! Validated activity configuration.

use std::fmt;

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ActivityError;
use crate::host::SettingsSource;

/// Strongly-typed activity settings. All three fields are mandatory; a record
/// missing any of them (or carrying a wrong-typed value) fails validation and
/// the activity is never constructed.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Pushover application token.
    pub app_token: String,
    /// Pushover user/group key the message is delivered to.
    pub group_token: String,
    /// When false the activity skips every delivery without calling out.
    pub active: bool,
}

impl Settings {
    /// Validate the host-supplied settings record into a [`Settings`].
    pub fn resolve(source: &dyn SettingsSource) -> Result<Self, ActivityError> {
        let record = Value::Object(source.settings().clone());
        let settings: Self =
            serde_json::from_value(record).map_err(ActivityError::Configuration)?;

        debug!("resolved settings: {settings:?}");

        Ok(settings)
    }
}

// Tokens are credentials; keep them out of log output.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("app_token", &redact(&self.app_token))
            .field("group_token", &redact(&self.group_token))
            .field("active", &self.active)
            .finish()
    }
}

fn redact(token: &str) -> String {
    format!("***{} chars***", token.len())
}
