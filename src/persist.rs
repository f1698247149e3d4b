//! Disk layer: document load with auto-provisioning, save with atomic
//! replacement.
//!
//! The rename-over approach is close to atomic on most platforms. On NTFS
//! (Windows) it's reliable; on FAT32 or network shares there are no hard
//! guarantees. If that matters to you, keep backups or use a real database.
//!
//! Filesystem failures never escape this module as errors: reads resolve
//! to an empty document and writes to a `false` return, with the cause
//! logged. Only file-name validation is raised to the caller.

use crate::config::StoreConfig;
use crate::document::Document;
use crate::error::{Error, Result};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, warn};

/// What [`load`] actually found on disk.
///
/// The key-level API collapses all three cases to a document via
/// [`into_document`](Self::into_document); callers who need to tell a
/// missing file apart from an unreadable one can match on this instead.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Document parsed from an existing file.
    Read(Document),
    /// The file was missing; a fresh `{}` was provisioned in its place.
    Created,
    /// The file could not be read, parsed, or provisioned.
    Failed(Error),
}

impl LoadOutcome {
    /// The loaded document, or an empty one for the `Created` and
    /// `Failed` cases.
    #[must_use]
    pub fn into_document(self) -> Document {
        match self {
            LoadOutcome::Read(doc) => doc,
            LoadOutcome::Created | LoadOutcome::Failed(_) => Document::new(),
        }
    }

    /// `true` for the [`LoadOutcome::Failed`] case.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadOutcome::Failed(_))
    }
}

/// Load the document for `name` (default file when `None`).
///
/// A missing file is provisioned as `{}`, missing parent directories are
/// created, and unreadable or unparsable content is reported as
/// [`LoadOutcome::Failed`]. The only error is an invalid `name`.
pub fn load(config: &StoreConfig, name: Option<&str>) -> Result<LoadOutcome> {
    let path = config.resolve(name)?;
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(provision(&path)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read preference file");
            return Ok(LoadOutcome::Failed(e.into()));
        }
    };
    // An empty file reads as an empty document, not a parse error.
    if bytes.is_empty() {
        return Ok(LoadOutcome::Read(Document::new()));
    }
    match Document::from_json(&bytes) {
        Ok(doc) => Ok(LoadOutcome::Read(doc)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unparsable preference file, treating as empty");
            Ok(LoadOutcome::Failed(e))
        }
    }
}

/// Save `document` as the file for `name` (default file when `None`).
///
/// The file is replaced atomically (temp file + rename), creating the
/// parent directory first if needed. Returns `false` on any write
/// failure; the only error is an invalid `name`.
pub fn save(config: &StoreConfig, document: &Document, name: Option<&str>) -> Result<bool> {
    let path = config.resolve(name)?;
    let bytes = match document.to_json(config.is_pretty()) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to serialize preference document");
            return Ok(false);
        }
    };
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!(path = %parent.display(), error = %e, "failed to create storage directory");
            return Ok(false);
        }
    }
    match atomic_write(&path, &bytes) {
        Ok(()) => Ok(true),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to write preference file");
            Ok(false)
        }
    }
}

/// First-use creation: put an empty `{}` file at `path`, creating the
/// parent directory tree if that is what was missing.
fn provision(path: &Path) -> LoadOutcome {
    match create_empty(path) {
        Ok(()) => {
            debug!(path = %path.display(), "provisioned empty preference file");
            LoadOutcome::Created
        }
        // Lost the creation race to another writer; their file stands.
        Err(e) if e.kind() == ErrorKind::AlreadyExists => LoadOutcome::Created,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let Some(parent) = path.parent() else {
                warn!(path = %path.display(), "preference file path has no parent directory");
                return LoadOutcome::Failed(e.into());
            };
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "failed to create storage directory");
                return LoadOutcome::Failed(e.into());
            }
            match create_empty(path) {
                Ok(()) => {
                    debug!(path = %path.display(), "provisioned storage directory and empty preference file");
                    LoadOutcome::Created
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => LoadOutcome::Created,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to provision preference file");
                    LoadOutcome::Failed(e.into())
                }
            }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to provision preference file");
            LoadOutcome::Failed(e.into())
        }
    }
}

fn create_empty(path: &Path) -> std::io::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(b"{}")
}

/// Write `bytes` to `<path>.tmp` and then rename over `path`. This avoids
/// leaving a half-written file if the process crashes mid-write, and keeps
/// racing writers from ever exposing a torn document.
fn atomic_write(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let tmp = path.with_extension(format!("{ext}.tmp"));
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)
}
