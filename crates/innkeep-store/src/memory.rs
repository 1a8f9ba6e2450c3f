use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::Collection;

/// In-memory, `Vec`-based collection.
///
/// Intended for tests and embedding. Records are held behind a `RwLock` and
/// cloned on load and save. The collection can be switched to read-only to
/// simulate a backend whose writes fail.
pub struct InMemoryCollection<T> {
    records: RwLock<Option<Vec<T>>>,
    read_only: AtomicBool,
    writes: AtomicUsize,
}

impl<T: Clone> InMemoryCollection<T> {
    /// Create a collection that has never been written.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(None),
            read_only: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    /// Create a collection pre-populated with `records`.
    ///
    /// Seeding does not count as a write.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(Some(records)),
            ..Self::new()
        }
    }

    /// Make subsequent `save_all` calls fail with [`StoreError::ReadOnly`].
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Number of successful `save_all` calls.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Snapshot of the stored records.
    pub fn snapshot(&self) -> Vec<T> {
        self.records
            .read()
            .expect("lock poisoned")
            .clone()
            .unwrap_or_default()
    }
}

impl<T: Clone> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync> Collection<T> for InMemoryCollection<T> {
    fn load(&self) -> StoreResult<Vec<T>> {
        Ok(self.snapshot())
    }

    fn save_all(&self, records: &[T]) -> StoreResult<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StoreError::ReadOnly);
        }
        *self.records.write().expect("lock poisoned") = Some(records.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn exists(&self) -> bool {
        self.records.read().expect("lock poisoned").is_some()
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}

impl<T> std::fmt::Debug for InMemoryCollection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self
            .records
            .read()
            .map(|r| r.as_ref().map_or(0, Vec::len))
            .unwrap_or(0);
        f.debug_struct("InMemoryCollection")
            .field("record_count", &count)
            .field("read_only", &self.read_only.load(Ordering::SeqCst))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeep_types::{CustomerId, HotelId, Reservation, ReservationId};

    fn reservation(id: i64) -> Reservation {
        Reservation::new(ReservationId::new(id), CustomerId::new(1), HotelId::new(1))
    }

    #[test]
    fn fresh_collection_is_empty_and_absent() {
        let c = InMemoryCollection::<Reservation>::new();
        assert!(!c.exists());
        assert!(c.load().unwrap().is_empty());
    }

    #[test]
    fn save_replaces_whole_collection() {
        let c = InMemoryCollection::<Reservation>::new();
        c.save_all(&[reservation(1), reservation(2)]).unwrap();
        c.save_all(&[reservation(3)]).unwrap();

        assert!(c.exists());
        assert_eq!(c.load().unwrap(), vec![reservation(3)]);
        assert_eq!(c.write_count(), 2);
    }

    #[test]
    fn read_only_rejects_writes_and_keeps_data() {
        let c = InMemoryCollection::with_records(vec![reservation(1)]);
        c.set_read_only(true);

        let err = c.save_all(&[]).unwrap_err();
        assert!(matches!(err, StoreError::ReadOnly));
        assert_eq!(c.load().unwrap(), vec![reservation(1)]);
        assert_eq!(c.write_count(), 0);

        c.set_read_only(false);
        c.save_all(&[]).unwrap();
        assert!(c.load().unwrap().is_empty());
    }
}
