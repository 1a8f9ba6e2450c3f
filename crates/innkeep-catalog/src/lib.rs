//! Customer and hotel stores for Innkeep.
//!
//! Each store is a thin repository over one [`Collection`] backend. Every
//! operation is a full load-mutate-save cycle; there is no cache.
//!
//! # Failure Policy
//!
//! Backends report every failure. The stores recover from them locally:
//!
//! - an unreadable or malformed collection loads as empty, with a warning;
//! - a failed write is logged and reported to the caller (`false` or
//!   [`CatalogError::Persistence`]), never retried.
//!
//! # Modules
//!
//! - [`records`] -- [`RecordSet`], the keyed load-mutate-save helper shared by all stores
//! - [`customer`] -- [`CustomerStore`]
//! - [`hotel`] -- [`HotelStore`] and the capacity primitives
//! - [`error`] -- [`CatalogError`]
//!
//! [`Collection`]: innkeep_store::Collection

pub mod customer;
pub mod error;
pub mod hotel;
pub mod records;

pub use customer::CustomerStore;
pub use error::{CatalogError, CatalogResult};
pub use hotel::HotelStore;
pub use records::RecordSet;
