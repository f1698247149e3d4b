//! Blocking key-level API.
//!
//! Every operation is one full load/mutate/save cycle against the disk
//! layer; nothing is cached between calls, so each call sees the latest
//! on-disk state at the cost of one file round trip.

use crate::config::StoreConfig;
use crate::document::{self, Document};
use crate::error::Result;
use crate::persist;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Blocking preference store.
///
/// Every method takes an optional logical file name; `None` targets the
/// default file (`Settings.json` under the storage directory), `Some`
/// targets `storage_dir/<name>`. Either file is created on first use.
///
/// Values go in as anything serializable and come back as strings:
/// `insert("retries", 3, None)` stores `"3"`. Filesystem trouble never
/// raises; reads fall back to an empty document and writes report
/// `Ok(false)`, with the cause logged via `tracing`.
#[derive(Debug, Clone)]
pub struct PrefStore {
    config: StoreConfig,
}

impl PrefStore {
    /// Store using the given configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Store rooted at `storage_dir` with default configuration. Shorthand
    /// for `PrefStore::new(StoreConfig::new(storage_dir))`.
    pub fn open(storage_dir: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfig::new(storage_dir))
    }

    /// The store's configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Path of the default preference file.
    #[must_use]
    pub fn default_path(&self) -> &Path {
        self.config.default_path()
    }

    // ---- reads ----

    /// `true` if `key` is present in the file (exact string match).
    pub fn contains_key(&self, key: &str, file: Option<&str>) -> Result<bool> {
        Ok(self.load(file)?.contains_key(key))
    }

    /// Value for `key`, or `None` if absent (or the file is unreadable).
    pub fn get(&self, key: &str, file: Option<&str>) -> Result<Option<String>> {
        Ok(self.load(file)?.get(key).map(str::to_owned))
    }

    /// Value for `key`, or `default` in its string form if absent. The
    /// default is not written back to the file.
    pub fn get_or<T: Serialize>(&self, key: &str, default: T, file: Option<&str>) -> Result<String> {
        let default = document::stringify(&default)?;
        self.get_or_raw(key, default, file)
    }

    /// Values for `keys` out of a single load, `None` per absent key.
    /// Order and duplicates of the input are preserved.
    pub fn get_many<I, S>(&self, keys: I, file: Option<&str>) -> Result<Vec<Option<String>>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let doc = self.load(file)?;
        Ok(keys
            .into_iter()
            .map(|key| doc.get(key.as_ref()).map(str::to_owned))
            .collect())
    }

    // ---- writes ----

    /// Set `key` to the string form of `value` and persist. Returns the
    /// save result: `Ok(false)` means the write failed (and was logged).
    pub fn insert<T: Serialize>(
        &self,
        key: impl Into<String>,
        value: T,
        file: Option<&str>,
    ) -> Result<bool> {
        let value = document::stringify(&value)?;
        self.insert_raw(key.into(), value, file)
    }

    /// Apply a whole batch of entries with a single load and a single
    /// save, returning the stored string values in input order.
    pub fn insert_many<I, K, V>(&self, entries: I, file: Option<&str>) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Serialize,
    {
        let entries = entries
            .into_iter()
            .map(|(key, value)| Ok((key.into(), document::stringify(&value)?)))
            .collect::<Result<Vec<_>>>()?;
        self.insert_many_raw(entries, file)
    }

    /// Remove `key` and persist. Removing an absent key is a successful
    /// no-op: `Ok(true)` without touching the file.
    pub fn remove(&self, key: &str, file: Option<&str>) -> Result<bool> {
        let mut doc = self.load(file)?;
        if doc.remove(key).is_none() {
            return Ok(true);
        }
        persist::save(&self.config, &doc, file)
    }

    // ---- core (shared with the async surface) ----

    pub(crate) fn get_or_raw(&self, key: &str, default: String, file: Option<&str>) -> Result<String> {
        Ok(self.get(key, file)?.unwrap_or(default))
    }

    pub(crate) fn insert_raw(&self, key: String, value: String, file: Option<&str>) -> Result<bool> {
        let mut doc = self.load(file)?;
        doc.insert(key, value);
        persist::save(&self.config, &doc, file)
    }

    pub(crate) fn insert_many_raw(
        &self,
        entries: Vec<(String, String)>,
        file: Option<&str>,
    ) -> Result<Vec<String>> {
        let mut doc = self.load(file)?;
        let mut stored = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            stored.push(value.clone());
            doc.insert(key, value);
        }
        persist::save(&self.config, &doc, file)?;
        Ok(stored)
    }

    fn load(&self, file: Option<&str>) -> Result<Document> {
        Ok(persist::load(&self.config, file)?.into_document())
    }
}
