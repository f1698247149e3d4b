//! The in-memory preference document and its JSON form.
//!
//! A document is a flat map of string settings. On disk it is a single
//! JSON object; members written by other tools as numbers or booleans are
//! coerced to their string form on load, so the API only ever hands out
//! strings.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Flat string-to-string mapping backing one preference file.
///
/// Documents are transient: every store operation loads a fresh one from
/// disk, mutates it, and drops it. Durability lives in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    entries: HashMap<String, String>,
}

impl Document {
    /// Empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// `true` if `key` is present (exact match, no case folding).
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Set `key` to `value`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the document has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterator over the keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterator over `(key, value)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse a JSON object, coercing non-string members to strings.
    ///
    /// Anything that is not a JSON object (arrays, bare scalars, garbage)
    /// is a [`Error::Deserialize`].
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let map: serde_json::Map<String, Value> = serde_json::from_slice(bytes)?;
        let entries = map.into_iter().map(|(k, v)| (k, coerce(&v))).collect();
        Ok(Self { entries })
    }

    /// Serialize to a JSON object, compact or pretty-printed.
    pub fn to_json(&self, pretty: bool) -> Result<Vec<u8>> {
        let bytes = if pretty {
            serde_json::to_vec_pretty(&self.entries)
        } else {
            serde_json::to_vec(&self.entries)
        };
        bytes.map_err(|e| Error::Serialize(e.to_string()))
    }
}

impl FromIterator<(String, String)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// String form of an on-disk JSON value: strings verbatim, everything else
/// as its compact JSON text (`1` becomes `"1"`, `true` becomes `"true"`).
fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// String form of a caller-supplied value, by the same rule as [`coerce`].
pub(crate) fn stringify<T: Serialize>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value).map_err(|e| Error::Serialize(e.to_string()))?;
    Ok(coerce(&value))
}
