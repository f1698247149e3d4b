//! JSON-file-backed preference store.
//!
//! Each logical preference file is a flat JSON object of string settings
//! under one storage directory. Missing files and directories are created
//! on first use, reads fall back to caller-supplied defaults, and every
//! operation is available in a blocking ([`PrefStore`]) and an async
//! ([`AsyncPrefStore`]) flavor over the same core.
//!
//! ```rust,no_run
//! use pref_store::{PrefStore, StoreConfig};
//!
//! let store = PrefStore::new(StoreConfig::new("/tmp/my-app/prefs"));
//! store.insert("theme", "dark", None).unwrap();
//! let theme = store.get_or("theme", "light", None).unwrap();
//! assert_eq!(theme, "dark");
//! ```
//!
//! **Last-write-wins.** Nothing guards the load/mutate/save cycle; two
//! overlapping writers to the same file keep whichever save lands last.
//! The file is replaced atomically, so the loser never leaves a torn
//! document, but its update is silently gone. Use a real database if you
//! need coordination.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod document;
pub mod error;
pub mod nonblocking;
pub mod persist;
pub mod store;

pub use config::{StoreConfig, DEFAULT_FILE_NAME};
pub use document::Document;
pub use error::{Error, Result};
pub use nonblocking::AsyncPrefStore;
pub use persist::LoadOutcome;
pub use store::PrefStore;
