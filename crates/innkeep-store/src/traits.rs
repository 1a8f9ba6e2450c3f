use crate::error::StoreResult;

/// Whole-document storage for one collection of records.
///
/// This is the seam the entity stores are built on: production code uses
/// [`JsonFileCollection`](crate::JsonFileCollection), tests substitute
/// [`InMemoryCollection`](crate::InMemoryCollection).
///
/// Implementations must satisfy these invariants:
/// - `load` on a collection that was never written returns an empty `Vec`.
/// - `save_all` replaces the entire collection; after it returns `Ok`, a
///   subsequent `load` yields exactly the saved records in the same order.
/// - A failed `save_all` leaves the previously stored collection intact.
/// - Errors are propagated, never silently ignored. Recovery policy belongs
///   to the caller.
pub trait Collection<T>: Send + Sync {
    /// Read every record in the collection.
    fn load(&self) -> StoreResult<Vec<T>>;

    /// Replace the whole collection with `records`.
    fn save_all(&self, records: &[T]) -> StoreResult<()>;

    /// Whether the collection has ever been persisted.
    fn exists(&self) -> bool;

    /// Human-readable location for diagnostics (a path, or `"memory"`).
    fn describe(&self) -> String;
}
