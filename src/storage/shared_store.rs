//! Shared record store for Markd.
//!
//! A key/value storage area addressable by two isolated processes (the share
//! extension and the main app) under a common group identifier. The contract
//! is deliberately minimal: whole-value reads and whole-value overwrites,
//! with no test-and-set, no transactions, and no locking. Concurrent
//! read-modify-write cycles from the two processes therefore resolve as
//! last-write-wins on the entire value.

use std::fs;
use std::path::PathBuf;

use crate::platform;
use crate::types::errors::StoreError;

/// Trait defining the shared store contract.
///
/// Both processes hold independent handles implementing this trait; the
/// handles share nothing in memory, only the underlying container.
pub trait SharedStore {
    /// Reads the value under `key`. `Ok(None)` means the key has never been
    /// written. `Err(StoreError::TransientUnavailable)` means the container
    /// is not reachable yet; callers must treat it as "no data yet".
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrites the entire value under `key`. All-or-nothing: a failed
    /// write never leaves a partially written value behind.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store handle backed by one file per key inside a shared container
/// directory.
///
/// The overwrite goes through a temp file and a rename, so a reader in the
/// other process sees either the previous value or the new one, never a torn
/// write. That is the only atomicity the store provides.
pub struct SharedContainerStore {
    dir: PathBuf,
}

impl SharedContainerStore {
    /// Opens a handle onto the container for `group_id`.
    ///
    /// Resolution is purely path-based; two handles created with the same
    /// identifier (in any process) address the same storage. Nothing is
    /// created on disk until the first write.
    pub fn open(group_id: &str) -> Self {
        Self {
            dir: platform::get_shared_container_dir(group_id),
        }
    }

    /// Opens a handle onto an explicit container directory. Used by tests to
    /// point two handles at one temp directory.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// The container directory this handle addresses.
    pub fn container_dir(&self) -> &PathBuf {
        &self.dir
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SharedStore for SharedContainerStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        // A missing container is the startup race, not an error condition.
        if !self.dir.exists() {
            tracing::debug!(key, "shared container not reachable yet");
            return Err(StoreError::TransientUnavailable);
        }

        let path = self.value_path(key);
        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StoreError::ReadFailed(format!("{}: {}", path.display(), e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StoreError::WriteFailed(format!("{}: {}", self.dir.display(), e)))?;

        let path = self.value_path(key);
        let tmp = self.dir.join(format!(".{}.tmp", key));

        fs::write(&tmp, value)
            .map_err(|e| StoreError::WriteFailed(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StoreError::WriteFailed(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }
}
