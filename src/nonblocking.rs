//! Async counterpart to [`PrefStore`].
//!
//! Same operations, same semantics. Each call validates and coerces its
//! arguments up front, then runs the identical blocking core on the Tokio
//! blocking pool, so the two calling conventions cannot drift apart.

use crate::config::StoreConfig;
use crate::document;
use crate::error::Result;
use crate::store::PrefStore;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Async preference store. A thin handle over the blocking core; cloning
/// is cheap and clones share the same configuration.
///
/// Must be used from within a Tokio runtime.
#[derive(Debug, Clone)]
pub struct AsyncPrefStore {
    inner: Arc<PrefStore>,
}

impl AsyncPrefStore {
    /// Store using the given configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            inner: Arc::new(PrefStore::new(config)),
        }
    }

    /// Store rooted at `storage_dir` with default configuration.
    pub fn open(storage_dir: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfig::new(storage_dir))
    }

    /// The blocking view of this store, for synchronous call sites.
    #[must_use]
    pub fn blocking(&self) -> &PrefStore {
        &self.inner
    }

    /// Path of the default preference file.
    #[must_use]
    pub fn default_path(&self) -> &Path {
        self.inner.default_path()
    }

    /// See [`PrefStore::contains_key`].
    pub async fn contains_key(&self, key: &str, file: Option<&str>) -> Result<bool> {
        let inner = Arc::clone(&self.inner);
        let key = key.to_owned();
        let file = file.map(str::to_owned);
        run_blocking(move || inner.contains_key(&key, file.as_deref())).await
    }

    /// See [`PrefStore::get`].
    pub async fn get(&self, key: &str, file: Option<&str>) -> Result<Option<String>> {
        let inner = Arc::clone(&self.inner);
        let key = key.to_owned();
        let file = file.map(str::to_owned);
        run_blocking(move || inner.get(&key, file.as_deref())).await
    }

    /// See [`PrefStore::get_or`]. The default is coerced before any I/O
    /// is scheduled.
    pub async fn get_or<T: Serialize>(
        &self,
        key: &str,
        default: T,
        file: Option<&str>,
    ) -> Result<String> {
        let default = document::stringify(&default)?;
        let inner = Arc::clone(&self.inner);
        let key = key.to_owned();
        let file = file.map(str::to_owned);
        run_blocking(move || inner.get_or_raw(&key, default, file.as_deref())).await
    }

    /// See [`PrefStore::get_many`].
    pub async fn get_many<I, S>(&self, keys: I, file: Option<&str>) -> Result<Vec<Option<String>>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys: Vec<String> = keys.into_iter().map(|k| k.as_ref().to_owned()).collect();
        let inner = Arc::clone(&self.inner);
        let file = file.map(str::to_owned);
        run_blocking(move || inner.get_many(keys, file.as_deref())).await
    }

    /// See [`PrefStore::insert`]. The value is coerced before any I/O is
    /// scheduled.
    pub async fn insert<T: Serialize>(
        &self,
        key: impl Into<String>,
        value: T,
        file: Option<&str>,
    ) -> Result<bool> {
        let key = key.into();
        let value = document::stringify(&value)?;
        let inner = Arc::clone(&self.inner);
        let file = file.map(str::to_owned);
        run_blocking(move || inner.insert_raw(key, value, file.as_deref())).await
    }

    /// See [`PrefStore::insert_many`].
    pub async fn insert_many<I, K, V>(&self, entries: I, file: Option<&str>) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Serialize,
    {
        let entries = entries
            .into_iter()
            .map(|(key, value)| Ok((key.into(), document::stringify(&value)?)))
            .collect::<Result<Vec<_>>>()?;
        let inner = Arc::clone(&self.inner);
        let file = file.map(str::to_owned);
        run_blocking(move || inner.insert_many_raw(entries, file.as_deref())).await
    }

    /// See [`PrefStore::remove`].
    pub async fn remove(&self, key: &str, file: Option<&str>) -> Result<bool> {
        let inner = Arc::clone(&self.inner);
        let key = key.to_owned();
        let file = file.map(str::to_owned);
        run_blocking(move || inner.remove(&key, file.as_deref())).await
    }
}

async fn run_blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(value) => value,
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        // We never abort blocking tasks, so cancellation cannot happen.
        Err(e) => unreachable!("blocking task cancelled: {e}"),
    }
}
