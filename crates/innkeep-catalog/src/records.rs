//! Keyed load-mutate-save over a single collection.
//!
//! [`RecordSet`] wraps a [`Collection`] backend with the lenient failure
//! policy and with a write lock that serializes this instance's
//! load-mutate-save cycles, so two writers sharing one store never drop each
//! other's update.

use std::sync::{Arc, Mutex, PoisonError};

use innkeep_store::Collection;
use innkeep_types::RecordKey;
use tracing::{debug, warn};

use crate::error::{CatalogError, CatalogResult};

/// A keyed collection of records with lenient load and save.
pub struct RecordSet<T> {
    backend: Arc<dyn Collection<T>>,
    write_lock: Mutex<()>,
}

impl<T> RecordSet<T>
where
    T: RecordKey + Clone,
{
    pub fn new(backend: Arc<dyn Collection<T>>) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    /// Where the collection lives, for diagnostics.
    pub fn location(&self) -> String {
        self.backend.describe()
    }

    /// Every record, or an empty list if the collection is absent or
    /// cannot be read.
    pub fn load_all(&self) -> Vec<T> {
        match self.backend.load() {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    entity = T::ENTITY,
                    location = %self.backend.describe(),
                    error = %e,
                    "cannot read collection; treating it as empty"
                );
                Vec::new()
            }
        }
    }

    /// Replace the whole collection. Returns `false` (after logging) if the
    /// write failed.
    pub fn save_all(&self, records: &[T]) -> bool {
        let _guard = self.lock();
        self.try_save(records).is_ok()
    }

    /// Look up one record by key.
    pub fn find(&self, key: T::Key) -> Option<T> {
        self.load_all().into_iter().find(|r| r.key() == key)
    }

    pub fn contains(&self, key: T::Key) -> bool {
        self.find(key).is_some()
    }

    /// Append `record`, rejecting it if its key is already present.
    pub fn insert(&self, record: T) -> CatalogResult<T> {
        self.mutate(|records| {
            if records.iter().any(|r| r.key() == record.key()) {
                return Err(CatalogError::duplicate(T::ENTITY, record.key()));
            }
            records.push(record.clone());
            Ok(record)
        })
    }

    /// Append `record` without checking for an existing key.
    pub fn append(&self, record: T) -> CatalogResult<T> {
        self.mutate(|records| {
            records.push(record.clone());
            Ok(record)
        })
    }

    /// Remove every record with `key`. Returns whether anything was removed
    /// and persisted.
    pub fn remove(&self, key: T::Key) -> bool {
        let removed = self.mutate(|records| {
            let before = records.len();
            records.retain(|r| r.key() != key);
            if records.len() == before {
                return Err(CatalogError::not_found(T::ENTITY, key));
            }
            Ok(before - records.len())
        });
        match removed {
            Ok(count) => {
                debug!(entity = T::ENTITY, %key, count, "record removed");
                true
            }
            Err(e) => {
                warn!(entity = T::ENTITY, %key, error = %e, "remove failed");
                false
            }
        }
    }

    /// Remove the first record with `key` that also satisfies `matches`,
    /// and return it.
    pub fn take_first<P>(&self, key: T::Key, matches: P) -> CatalogResult<T>
    where
        P: Fn(&T) -> bool,
    {
        self.mutate(|records| {
            let idx = records
                .iter()
                .position(|r| r.key() == key && matches(r))
                .ok_or_else(|| CatalogError::not_found(T::ENTITY, key))?;
            Ok(records.remove(idx))
        })
    }

    /// Apply `f` to the record with `key` and persist. Returns the record as
    /// stored.
    pub fn update<F>(&self, key: T::Key, f: F) -> CatalogResult<T>
    where
        F: FnOnce(&mut T),
    {
        self.mutate(|records| {
            let record = records
                .iter_mut()
                .find(|r| r.key() == key)
                .ok_or_else(|| CatalogError::not_found(T::ENTITY, key))?;
            f(record);
            Ok(record.clone())
        })
    }

    /// Run one load-mutate-save cycle under the write lock.
    ///
    /// `f` sees the current collection. If it returns `Err`, nothing is
    /// written. Otherwise the mutated collection replaces the stored one.
    pub fn mutate<R, F>(&self, f: F) -> CatalogResult<R>
    where
        F: FnOnce(&mut Vec<T>) -> CatalogResult<R>,
    {
        let _guard = self.lock();
        let mut records = self.load_all();
        let out = f(&mut records)?;
        self.try_save(&records)?;
        Ok(out)
    }

    fn try_save(&self, records: &[T]) -> CatalogResult<()> {
        self.backend.save_all(records).map_err(|source| {
            let location = self.backend.describe();
            warn!(
                entity = T::ENTITY,
                location = %location,
                error = %source,
                "cannot write collection; write abandoned"
            );
            CatalogError::Persistence {
                entity: T::ENTITY,
                location,
                source,
            }
        })
    }

    // The guarded data is `()`, so a poisoned lock carries no broken state.
    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> std::fmt::Debug for RecordSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordSet")
            .field("location", &self.backend.describe())
            .finish()
    }
}
