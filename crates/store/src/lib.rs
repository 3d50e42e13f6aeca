//! # stringlens store
//!
//! This crate keeps analyzed strings. Each [`Record`] is keyed by its exact
//! original text, is created once and never updated, and leaves the store
//! only through an explicit delete.
//!
//! ## Core Features
//!
//! - **Pluggable Backends**: storage sits behind the [`StoreBackend`] trait.
//!   Out of the box there is:
//!   - an in-memory `HashMap` backend for ephemeral use and tests;
//!   - a redb backend for persistent, on-disk storage (feature `backend-redb`,
//!     on by default).
//! - **Insert-if-absent**: a second insert of the same text is reported as
//!   [`StoreError::Conflict`] and never overwrites the first record.
//! - **Snapshot scans**: [`StringStore::scan`] and [`StringStore::records`]
//!   read a consistent view (read lock or read transaction).
//!
//! Records are encoded with `bincode` before they reach the backend, so the
//! backends only ever see opaque bytes.
//!
//! ## Example Usage
//!
//! ```
//! use store::{Record, StoreError, StringStore};
//!
//! let store = StringStore::in_memory();
//! store.insert(&Record::new("racecar")).unwrap();
//!
//! let found = store.get("racecar").unwrap().unwrap();
//! assert!(found.properties.is_palindrome);
//!
//! let dup = store.insert(&Record::new("racecar"));
//! assert!(matches!(dup, Err(StoreError::Conflict(_))));
//! ```

mod backend;
mod record;

pub use backend::{BackendConfig, InMemoryBackend, StoreBackend};
#[cfg(feature = "backend-redb")]
pub use backend::RedbBackend;
pub use record::Record;

use bincode::config::standard;
use bincode::error::{DecodeError, EncodeError};
use bincode::serde::{decode_from_slice, encode_to_vec};
use thiserror::Error;

/// Errors surfaced by the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("string already exists: {0:?}")]
    Conflict(String),
    #[error("string does not exist: {0:?}")]
    NotFound(String),
    #[error("Backend error: {0}")]
    Backend(String),
    #[error("Serialization encode error: {0}")]
    Encode(String),
    #[error("Serialization decode error: {0}")]
    Decode(String),
}

impl From<EncodeError> for StoreError {
    fn from(e: EncodeError) -> Self {
        StoreError::Encode(e.to_string())
    }
}

impl From<DecodeError> for StoreError {
    fn from(e: DecodeError) -> Self {
        StoreError::Decode(e.to_string())
    }
}

impl StoreError {
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }
}

/// Keyed collection of [`Record`]s over a [`StoreBackend`].
pub struct StringStore {
    backend: Box<dyn StoreBackend>,
}

impl StringStore {
    /// Open a store using the configured backend.
    pub fn new(cfg: &BackendConfig) -> Result<Self, StoreError> {
        Ok(Self::with_backend(cfg.build()?))
    }

    /// Build a store over a custom backend.
    pub fn with_backend(backend: Box<dyn StoreBackend>) -> Self {
        Self { backend }
    }

    /// Ephemeral store backed by a `HashMap`.
    pub fn in_memory() -> Self {
        Self::with_backend(Box::new(InMemoryBackend::new()))
    }

    /// Insert a record keyed by its original text.
    ///
    /// Fails with [`StoreError::Conflict`] when the exact text is already
    /// stored; the existing record is left untouched.
    pub fn insert(&self, record: &Record) -> Result<(), StoreError> {
        let payload = encode_to_vec(record, standard())?;
        if self.backend.put_if_absent(&record.value, &payload)? {
            Ok(())
        } else {
            Err(StoreError::Conflict(record.value.clone()))
        }
    }

    /// Exact-match lookup by original text.
    pub fn get(&self, value: &str) -> Result<Option<Record>, StoreError> {
        match self.backend.get(value)? {
            Some(data) => Ok(Some(decode_record(&data)?)),
            None => Ok(None),
        }
    }

    /// Remove the record for `value`, or fail with [`StoreError::NotFound`].
    pub fn delete(&self, value: &str) -> Result<(), StoreError> {
        if self.backend.delete(value)? {
            Ok(())
        } else {
            Err(StoreError::NotFound(value.to_string()))
        }
    }

    /// Visit every stored record. Order is unspecified.
    pub fn scan(
        &self,
        visitor: &mut dyn FnMut(&Record) -> Result<(), StoreError>,
    ) -> Result<(), StoreError> {
        self.backend.scan(&mut |data: &[u8]| {
            let record = decode_record(data)?;
            visitor(&record)
        })
    }

    /// Snapshot of all records.
    pub fn records(&self) -> Result<Vec<Record>, StoreError> {
        let mut out = Vec::new();
        self.scan(&mut |record: &Record| {
            out.push(record.clone());
            Ok(())
        })?;
        Ok(out)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        self.backend.len()
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Flush backend buffers if supported.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.backend.flush()
    }
}

fn decode_record(data: &[u8]) -> Result<Record, StoreError> {
    let (record, _) = decode_from_slice(data, standard())?;
    Ok(record)
}
