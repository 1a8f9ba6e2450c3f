//! Error types for catalog operations.

use thiserror::Error;

/// Errors returned by store operations that can be rejected.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A record with this key already exists.
    #[error("{key} already exists")]
    DuplicateKey { entity: &'static str, key: String },

    /// No record with this key exists.
    #[error("{key} not found")]
    NotFound { entity: &'static str, key: String },

    /// The collection could not be written. The stored collection is left
    /// as it was before the operation.
    #[error("cannot save {entity} collection at {location}: {source}")]
    Persistence {
        entity: &'static str,
        location: String,
        #[source]
        source: innkeep_store::StoreError,
    },
}

impl CatalogError {
    pub fn duplicate(entity: &'static str, key: impl ToString) -> Self {
        Self::DuplicateKey {
            entity,
            key: key.to_string(),
        }
    }

    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Returns `true` for [`CatalogError::DuplicateKey`].
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    /// Returns `true` for [`CatalogError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Convenience type alias for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
