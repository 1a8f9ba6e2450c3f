//! Collection storage for Innkeep.
//!
//! A *collection* is the full set of records of one entity type, persisted
//! as a single JSON array document. Every write replaces the whole document;
//! there is no append log and no partial patching.
//!
//! # Storage Backends
//!
//! All backends implement the [`Collection`] trait:
//!
//! - [`JsonFileCollection`] -- one JSON file per collection, replaced atomically
//! - [`InMemoryCollection`] -- `Vec`-backed collection for tests and embedding
//!
//! # Design Rules
//!
//! 1. A missing document is an empty collection, not an error.
//! 2. A document that does not decode is an error here; callers decide
//!    whether to recover from it.
//! 3. Writes go to a temporary file that is renamed over the target, so a
//!    reader never sees a half-written document.
//! 4. The backends never interpret records beyond serde decoding.

pub mod codec;
pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use codec::{decode_collection, encode_collection};
pub use config::StorageConfig;
pub use error::{StoreError, StoreResult};
pub use file::JsonFileCollection;
pub use memory::InMemoryCollection;
pub use traits::Collection;
