//! # Storage Layer
//!
//! The [`StorageBackend`] trait is the crate's only process boundary: a local
//! key-value medium holding two keys, the saved-message list and the active
//! message id.
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `MemBackend` (no filesystem needed)
//! - Allow **future backends** (browser storage, database) without touching
//!   the document store
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production file-based storage, one file per
//!   key under a data directory
//! - [`mem_backend::MemBackend`]: in-memory storage for tests, with fault
//!   simulation
//!
//! ## Write model
//!
//! The document store is the single writer, and every write replaces the full
//! value under a key. Backends must make each write attempted-atomic from this
//! process's perspective so the medium never holds a torn value.

use crate::error::Result;

pub mod fs_backend;
pub mod mem_backend;

/// Key holding the JSON array of saved messages, newest first, max 3.
pub const SAVED_MESSAGES_KEY: &str = "savedMessages";

/// Key holding the active message id as a plain string. The key is absent
/// (not empty) when no message is active.
pub const ACTIVE_MESSAGE_ID_KEY: &str = "activeMessageId";

/// Abstract interface for the local key-value medium.
pub trait StorageBackend {
    /// Read the full value stored under `key`.
    /// Returns Ok(None) when the key is absent; Err only on actual I/O faults.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the full value under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` entirely. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
