//! Foundation types for Innkeep.
//!
//! This crate provides the record types persisted by every other Innkeep
//! crate, together with the identifier newtypes that key them.
//!
//! # Key Types
//!
//! - [`Customer`] -- a guest who may hold reservations
//! - [`Hotel`] -- a property with a fixed room capacity and a live availability count
//! - [`Reservation`] -- a booking of one room for one customer at one hotel
//! - [`CustomerId`], [`HotelId`], [`ReservationId`] -- integer identifiers
//!
//! # Capacity Invariant
//!
//! For every [`Hotel`] value, `0 <= available_rooms <= rooms`. The fields are
//! private; the only ways to change them are [`Hotel::reserve_room`],
//! [`Hotel::cancel_room`] and [`Hotel::set_rooms`], each of which preserves
//! the invariant. Decoding a persisted hotel clamps out-of-range values.

pub mod customer;
pub mod error;
pub mod hotel;
pub mod identity;
pub mod reservation;

pub use customer::Customer;
pub use error::TypeError;
pub use hotel::Hotel;
pub use identity::{CustomerId, HotelId, RecordKey, ReservationId};
pub use reservation::Reservation;
