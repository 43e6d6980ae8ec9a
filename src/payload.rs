use serde_json::{Map as JsonMap, Value as JsonValue};

/// JSON request body under construction.
///
/// The API wraps every write in a resource object (`{"record": {...}}`), so
/// a payload converts into a [JsonValue] and payloads nest.
#[derive(Debug)]
pub(crate) struct Payload {
    payload: JsonMap<String, JsonValue>,
}

impl Payload {
    /// Creates a new, empty payload.
    pub(crate) fn new() -> Self {
        Self {
            payload: JsonMap::new(),
        }
    }

    /// Adds the given key-value pair.
    pub(crate) fn add<T: Into<JsonValue>>(mut self, key: &str, value: T) -> Self {
        self.payload.insert(key.to_string(), value.into());
        self
    }

    /// In the case that `value` is some, adds the key-value pair.
    pub(crate) fn add_if_some<T: Into<JsonValue>>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.payload.insert(key.to_string(), value.into());
        }
        self
    }
}

impl From<Payload> for JsonValue {
    fn from(value: Payload) -> Self {
        JsonValue::Object(value.payload)
    }
}
