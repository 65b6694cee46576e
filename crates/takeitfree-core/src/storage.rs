//! Durable key-value storage for the store's collection snapshots.
//!
//! The core never addresses the storage medium directly; it goes through
//! the [`KeyValueStore`] contract: string keys, JSON string payloads,
//! get/set/remove, no transactions. Two implementations are provided:
//! - [`RedbStore`] - on-device durable storage backed by redb
//! - [`MemoryStore`] - volatile storage for ephemeral sessions and tests

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};

use crate::error::AppResult;

/// Single table holding every collection snapshot, keyed by storage key.
const SNAPSHOTS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("snapshots");

/// Default namespace for the canonical storage keys.
pub const DEFAULT_PREFIX: &str = "takeitfree";

/// The four canonical storage keys under a common prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Serialized current profile, or absent
    pub user: String,
    /// Serialized item catalog
    pub items: String,
    /// Serialized moment ledger
    pub moments: String,
    /// Serialized report ledger
    pub reports: String,
}

impl StorageKeys {
    /// Build the key set for a namespace prefix.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            user: format!("{prefix}_user"),
            items: format!("{prefix}_items"),
            moments: format!("{prefix}_moments"),
            reports: format!("{prefix}_reports"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }
}

/// Contract the store core requires from its persistence collaborator.
///
/// Implementations must make a completed `set` durable before returning;
/// the store treats a returned `Ok` as "this snapshot survives a restart".
pub trait KeyValueStore {
    /// Read the payload stored under `key`, if any.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous payload.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete the payload under `key`. Removing an absent key is not an
    /// error.
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// On-device durable storage backed by redb.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<RwLock<Database>>,
}

impl RedbStore {
    /// Create or open a store at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the snapshot table
    pub fn new(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Open/create database
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SNAPSHOTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SNAPSHOTS_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SNAPSHOTS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SNAPSHOTS_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// Volatile storage for ephemeral sessions and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
