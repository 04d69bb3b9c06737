//! Capability seam between the activity and its hosting engine.
//!
//! The engine hands the activity loosely-typed key/value records for settings,
//! input and output. Rather than depending on a concrete engine type, the
//! activity consumes these two narrow traits, so any engine (or an in-memory
//! fake) can drive it.

use serde_json::{Map, Value};

/// Read access to the settings record supplied at activity construction.
pub trait SettingsSource {
    /// The raw settings record resolved by the host's configuration layer.
    fn settings(&self) -> &Map<String, Value>;
}

/// Per-invocation exchange of untyped records with the host.
pub trait InvocationChannel {
    /// The input record for this invocation.
    fn input(&self) -> &Map<String, Value>;

    /// Hand the output record back to the host. Called at most once per
    /// invocation, and never on an error path.
    fn set_output(&mut self, output: Map<String, Value>);
}

/// In-memory [`SettingsSource`] used by the demo binary and the tests.
pub struct StaticSettings(Map<String, Value>);

impl StaticSettings {
    pub fn new(settings: Map<String, Value>) -> Self {
        Self(settings)
    }

    /// Convenience for literal records, e.g. `StaticSettings::from_value(json!({...}))`.
    /// Non-object values become an empty record, which fails validation later.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self(Map::new()),
        }
    }
}

impl SettingsSource for StaticSettings {
    fn settings(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// In-memory [`InvocationChannel`] holding one input record and capturing the
/// output record.
pub struct RecordChannel {
    input: Map<String, Value>,
    output: Option<Map<String, Value>>,
}

impl RecordChannel {
    pub fn new(input: Map<String, Value>) -> Self {
        Self {
            input,
            output: None,
        }
    }

    /// See [`StaticSettings::from_value`].
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::new(map),
            _ => Self::new(Map::new()),
        }
    }

    /// The output record written by the activity, if the invocation reached
    /// a terminal state.
    pub fn output(&self) -> Option<&Map<String, Value>> {
        self.output.as_ref()
    }
}

impl InvocationChannel for RecordChannel {
    fn input(&self) -> &Map<String, Value> {
        &self.input
    }

    fn set_output(&mut self, output: Map<String, Value>) {
        self.output = Some(output);
    }
}
