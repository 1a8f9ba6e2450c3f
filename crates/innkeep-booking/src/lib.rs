//! Reservation orchestration for Innkeep.
//!
//! [`ReservationService`] is the only component that touches more than one
//! collection. It enforces the cross-entity rule: a reservation exists only
//! if its customer and hotel existed and the hotel had a free room when it
//! was created, and creating or cancelling a reservation moves the hotel's
//! availability by exactly one room.
//!
//! # Write Ordering
//!
//! Creation persists the hotel's reduced availability *before* appending the
//! reservation record. If the second write fails, the hotel keeps the lower
//! count with no matching reservation. That window is not repaired
//! automatically; [`ReservationService::audit`] reports it.
//!
//! # Concurrency
//!
//! Every store serializes its own load-mutate-save cycles. The multi-step
//! booking pipeline is serialized according to [`LockMode`]: per hotel
//! (default), globally, or not at all.

pub mod audit;
pub mod config;
pub mod error;
mod lock;
pub mod service;

pub use audit::{AuditReport, CapacityDrift};
pub use config::{BookingConfig, LockMode};
pub use error::{BookingError, BookingResult};
pub use service::ReservationService;
