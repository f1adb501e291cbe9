//! Container records as returned by `docker ps --format '{{json .}}'`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One flat JSON object per container.
///
/// Missing keys read as absent and unknown keys are carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: Map<String, Value>,
}

impl Record {
    /// Wraps an already parsed JSON object.
    #[must_use]
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Builds a record from string pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String form of the value for `key`.
    ///
    /// Absent keys and `null` give an empty string. Strings are returned as
    /// is; other values use their JSON text.
    #[must_use]
    pub fn text(&self, key: &str) -> Cow<'_, str> {
        match self.get(key) {
            None | Some(Value::Null) => Cow::Borrowed(""),
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the record has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(values: Map<String, Value>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_of_strings_numbers_and_nulls() {
        let record: Record = serde_json::from_value(json!({
            "ID": "abc123",
            "Size": 42,
            "Health": null,
            "Local": true,
        }))
        .unwrap();

        assert_eq!(record.text("ID"), "abc123");
        assert_eq!(record.text("Size"), "42");
        assert_eq!(record.text("Health"), "");
        assert_eq!(record.text("Local"), "true");
        assert_eq!(record.text("Missing"), "");
        assert_eq!(record.get("Size"), Some(&json!(42)));
    }

    #[test]
    fn test_from_pairs() {
        let record = Record::from_pairs([("ID", "abc"), ("Names", "web-1")]);
        assert_eq!(record.len(), 2);
        assert_eq!(record.text("Names"), "web-1");
        assert!(record.get("Status").is_none());
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let line = r#"{"ID":"abc","Mounts":"vol1","Networks":"bridge"}"#;
        let record: Record = serde_json::from_str(line).unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.text("Networks"), "bridge");
    }
}
