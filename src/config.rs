//! Store configuration: storage directory, default file, output format.

use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// File name used when an operation does not name one.
pub const DEFAULT_FILE_NAME: &str = "Settings.json";

/// Where preference files live and how they are written.
///
/// Built once at startup and handed to [`PrefStore`](crate::PrefStore) by
/// value; there is no process-global state to initialize.
///
/// ```rust
/// use pref_store::StoreConfig;
///
/// let config = StoreConfig::new("/tmp/my-app/prefs").pretty(true);
/// assert!(config.default_path().ends_with("Settings.json"));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    storage_dir: PathBuf,
    default_path: PathBuf,
    pretty: bool,
}

impl StoreConfig {
    /// Configuration rooted at `storage_dir`, with the default file
    /// `storage_dir/Settings.json` and compact JSON output.
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        let storage_dir = storage_dir.into();
        let default_path = storage_dir.join(DEFAULT_FILE_NAME);
        Self {
            storage_dir,
            default_path,
            pretty: false,
        }
    }

    /// Write human-readable JSON with indentation (default: compact).
    pub fn pretty(mut self, yes: bool) -> Self {
        self.pretty = yes;
        self
    }

    /// Directory all preference files resolve under.
    #[must_use]
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Path of the default preference file.
    #[must_use]
    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    pub(crate) fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Resolve a logical file name to a path under the storage directory.
    /// `None` selects the default file.
    ///
    /// Fails with [`Error::InvalidName`] if `name` is empty or would
    /// resolve outside the storage directory (absolute paths, `..`).
    pub fn resolve(&self, name: Option<&str>) -> Result<PathBuf> {
        match name {
            None => Ok(self.default_path.clone()),
            Some(name) => {
                validate_name(name)?;
                Ok(self.storage_dir.join(name))
            }
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidName("name must not be empty".into()));
    }
    let path = Path::new(name);
    let contained = !path.is_absolute()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if !contained {
        return Err(Error::InvalidName(format!(
            "{name:?} escapes the storage directory"
        )));
    }
    Ok(())
}
