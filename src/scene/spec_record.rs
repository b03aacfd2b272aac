use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{VitrineError, VitrineResult};

pub const KEY_LAPTOP_MODEL: &str = "laptop_model";
pub const KEY_CPU: &str = "cpu";
pub const KEY_GPU: &str = "gpu";
pub const KEY_SSD: &str = "ssd";
pub const KEY_RAM: &str = "ram";
pub const KEY_MONITOR_SIZE: &str = "monitor_size";
pub const KEY_PRICE: &str = "price";
pub const KEY_FBID: &str = "fbid";

/// The spec JSON a fresh session starts with.
pub const SAMPLE_SPEC_JSON: &str = r#"{
  "laptop_model": "Lenovo ThinkPad X1 Extreme Gen 3",
  "cpu": "Intel Core i7-10750H",
  "gpu": "NVIDIA RTX 1650Ti Max-Q",
  "ssd": "512GB NVMe",
  "monitor_size": "15.6\" Full HD",
  "ram": "16GB DDR4",
  "price": "16.000.000 VND",
  "fbid": "122170759358625322"
}"#;

/// Key/value record of the machine specs rendered in the footer.
///
/// Keys are free-form so unknown fields survive a round trip, but the footer
/// only reads the well-known `KEY_*` entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecRecord {
    fields: BTreeMap<String, String>,
}

impl SpecRecord {
    /// The record hydrated from [`SAMPLE_SPEC_JSON`].
    pub fn sample() -> Self {
        let mut record = Self::default();
        // The sample constant is known-good JSON.
        let _ = record.merge_json(SAMPLE_SPEC_JSON);
        record
    }

    /// Merge a JSON object into the record.
    ///
    /// String values are taken as-is; numbers and booleans are stringified.
    /// Null, array and object values are skipped. On parse failure the record
    /// is left untouched and the error is returned so callers can surface it
    /// without losing the last good state.
    pub fn merge_json(&mut self, text: &str) -> VitrineResult<()> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| VitrineError::spec_parse(e.to_string()))?;

        let serde_json::Value::Object(map) = value else {
            return Err(VitrineError::spec_parse("top-level value must be an object"));
        };

        for (key, value) in map {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => continue,
            };
            self.fields.insert(key, text);
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Field value, or `fallback` when the field is missing or empty.
    pub fn field_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        match self.fields.get(key) {
            Some(v) if !v.is_empty() => v.as_str(),
            _ => fallback,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
