// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors raised by a key-value backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The write would exceed the store's quota.
    #[error("Storage quota exceeded: {needed} bytes needed, {available} bytes available")]
    QuotaExceeded { needed: usize, available: usize },
    /// The key cannot be stored by this backend.
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
    /// The backend failed to read or write.
    #[error("Storage I/O failed for '{key}': {message}")]
    Io { key: String, message: String },
}

/// Errors that can occur while persisting drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The underlying store failed.
    Storage(StorageError),
    /// A draft could not be serialized or deserialized.
    SerializationError(String),
    /// A stored draft belongs to a different arrangement than its key says.
    ArrangementMismatch { expected: String, found: String },
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "Storage error: {err}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::ArrangementMismatch { expected, found } => write!(
                f,
                "Draft stored for arrangement '{expected}' belongs to '{found}'"
            ),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for PersistenceError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
