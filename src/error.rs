//! Unified error type for all store operations.

/// Things that can go wrong when using the store.
///
/// Only [`Error::InvalidName`] and [`Error::Serialize`] ever reach callers
/// of the key-level API; filesystem problems are absorbed into fallback
/// values (see [`crate::persist`]).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A logical file name was empty or would resolve outside the storage
    /// directory.
    InvalidName(String),
    /// File system problem (read, write, rename, mkdir).
    Io(String),
    /// Failed to serialize a document or value to JSON.
    Serialize(String),
    /// Failed to parse file contents back into a document.
    Deserialize(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidName(msg) => write!(f, "invalid file name: {msg}"),
            Error::Io(msg) => write!(f, "i/o error: {msg}"),
            Error::Serialize(msg) => write!(f, "serialization error: {msg}"),
            Error::Deserialize(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else if err.is_syntax() || err.is_eof() || err.is_data() {
            Error::Deserialize(err.to_string())
        } else {
            Error::Serialize(err.to_string())
        }
    }
}

/// Result alias using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
