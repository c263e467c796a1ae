// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Key-value storage backends.
//!
//! Drafts are stored as JSON strings under string keys. Anything that can
//! `get`, `set`, `delete` and enumerate keys can hold them:
//!
//! - [`MemoryStore`]: a map in memory, with an optional byte quota
//! - [`FileStore`]: one file per key inside a directory

use crate::error::StorageError;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A string key-value store.
pub trait KeyValueStore {
    /// Returns the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written or is full.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;

    /// Returns every key currently stored, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn list_keys(&self) -> Result<Vec<String>, StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).delete(key)
    }

    fn list_keys(&self) -> Result<Vec<String>, StorageError> {
        (**self).list_keys()
    }
}

/// In-memory store.
///
/// With a quota, writes that would push the total size of keys and values
/// past the quota fail with [`StorageError::QuotaExceeded`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Creates an unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store limited to `quota` bytes.
    #[must_use]
    pub const fn with_quota(quota: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota: Some(quota),
        }
    }

    /// Returns the bytes currently used by keys and values.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            let replaced: usize = self.entries.get(key).map_or(0, |v| key.len() + v.len());
            let in_use: usize = self.used_bytes() - replaced;
            let needed: usize = key.len() + value.len();
            if in_use + needed > quota {
                return Err(StorageError::QuotaExceeded {
                    needed,
                    available: quota.saturating_sub(in_use),
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.entries.keys().cloned().collect())
    }
}

const FILE_EXTENSION: &str = "json";

/// Directory-backed store: one `<encoded key>.json` file per key.
///
/// Keys are percent-encoded into file names so that any key, including
/// ones containing `:` or `/`, maps to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, StorageError> {
        let root: PathBuf = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|err| io_error(&root.to_string_lossy(), &err))?;
        debug!(root = %root.display(), "Opened file store");
        Ok(Self { root })
    }

    /// Returns the directory holding the entries.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self
            .root
            .join(format!("{}.{FILE_EXTENSION}", encode_key(key))))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path: PathBuf = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(key, &err)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path: PathBuf = self.path_for(key)?;
        let staging: PathBuf = path.with_extension("tmp");
        fs::write(&staging, value).map_err(|err| io_error(key, &err))?;
        fs::rename(&staging, &path).map_err(|err| io_error(key, &err))
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        let path: PathBuf = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(key, &err)),
        }
    }

    fn list_keys(&self) -> Result<Vec<String>, StorageError> {
        let root: String = self.root.to_string_lossy().into_owned();
        let mut keys: Vec<String> = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(|err| io_error(&root, &err))? {
            let path: PathBuf = entry.map_err(|err| io_error(&root, &err))?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            match path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(decode_key)
            {
                Some(key) => keys.push(key),
                None => debug!(path = %path.display(), "Skipping file with an undecodable key"),
            }
        }
        keys.sort();
        Ok(keys)
    }
}

fn io_error(key: &str, err: &std::io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        message: err.to_string(),
    }
}

fn encode_key(key: &str) -> String {
    let mut encoded: String = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_') {
            encoded.push(char::from(byte));
        } else {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    encoded
}

fn decode_key(encoded: &str) -> Option<String> {
    let bytes: &[u8] = encoded.as_bytes();
    let mut decoded: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut index: usize = 0;
    while index < bytes.len() {
        if bytes[index] == b'%' {
            let hex: &str = encoded.get(index + 1..index + 3)?;
            decoded.push(u8::from_str_radix(hex, 16).ok()?);
            index += 3;
        } else {
            decoded.push(bytes[index]);
            index += 1;
        }
    }
    String::from_utf8(decoded).ok()
}
