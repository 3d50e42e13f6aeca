//! Redb (Rust embedded database) backend for record storage.
//!
//! Redb is a pure Rust embedded key-value store with ACID transactions, so
//! the insert-if-absent check and the write happen inside one write
//! transaction.
//!
//! # Configuration Example
//! ```toml
//! storage_path = "/data/strings.redb"
//! ```

use crate::{StoreBackend, StoreError};
use ::redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::path::Path;
use std::sync::Arc;

/// Table holding encoded records keyed by original text.
const STRINGS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("strings");

/// Redb backend implementation for persistent key-value storage.
///
/// # Thread Safety
/// The `Arc<Database>` wrapper allows safe sharing across threads.
/// Redb handles its own internal locking and MVCC.
pub struct RedbBackend {
    db: Arc<Database>,
}

impl RedbBackend {
    /// Open or create a Redb database at the given path.
    ///
    /// ```no_run
    /// use store::RedbBackend;
    ///
    /// let backend = RedbBackend::open("/tmp/strings.redb").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = Database::create(path).map_err(StoreError::backend)?;

        // Accessing the table creates it if it doesn't exist
        let write_txn = db.begin_write().map_err(StoreError::backend)?;
        {
            let _table = write_txn
                .open_table(STRINGS_TABLE)
                .map_err(StoreError::backend)?;
        }
        write_txn.commit().map_err(StoreError::backend)?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl StoreBackend for RedbBackend {
    fn put_if_absent(&self, key: &str, value: &[u8]) -> Result<bool, StoreError> {
        let write_txn = self.db.begin_write().map_err(StoreError::backend)?;

        let inserted = {
            let mut table = write_txn
                .open_table(STRINGS_TABLE)
                .map_err(StoreError::backend)?;
            let exists = table.get(key).map_err(StoreError::backend)?.is_some();
            if !exists {
                table.insert(key, value).map_err(StoreError::backend)?;
            }
            !exists
        };

        write_txn.commit().map_err(StoreError::backend)?;
        Ok(inserted)
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let read_txn = self.db.begin_read().map_err(StoreError::backend)?;
        let table = read_txn
            .open_table(STRINGS_TABLE)
            .map_err(StoreError::backend)?;

        let value = table.get(key).map_err(StoreError::backend)?;
        Ok(value.map(|v| v.value().to_vec()))
    }

    fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let write_txn = self.db.begin_write().map_err(StoreError::backend)?;

        let existed = {
            let mut table = write_txn
                .open_table(STRINGS_TABLE)
                .map_err(StoreError::backend)?;
            let removed = table.remove(key).map_err(StoreError::backend)?;
            removed.is_some()
        };

        write_txn.commit().map_err(StoreError::backend)?;
        Ok(existed)
    }

    fn scan(
        &self,
        visitor: &mut dyn FnMut(&[u8]) -> Result<(), StoreError>,
    ) -> Result<(), StoreError> {
        let read_txn = self.db.begin_read().map_err(StoreError::backend)?;
        let table = read_txn
            .open_table(STRINGS_TABLE)
            .map_err(StoreError::backend)?;

        for item in table.iter().map_err(StoreError::backend)? {
            let (_, value) = item.map_err(StoreError::backend)?;
            visitor(value.value())?;
        }

        Ok(())
    }

    fn len(&self) -> Result<usize, StoreError> {
        let read_txn = self.db.begin_read().map_err(StoreError::backend)?;
        let table = read_txn
            .open_table(STRINGS_TABLE)
            .map_err(StoreError::backend)?;
        let len = table.len().map_err(StoreError::backend)?;
        Ok(len as usize)
    }
}
