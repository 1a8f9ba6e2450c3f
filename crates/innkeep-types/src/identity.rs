//! Integer identifiers for persisted records.
//!
//! Each identifier is a transparent newtype over `i64` so that it serializes
//! as a bare JSON number (`"customer_id": 7`) while keeping the three key
//! spaces distinct at compile time.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw integer identifier.
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// The raw integer value.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

record_id!(
    /// Unique identifier of a [`Customer`](crate::Customer).
    CustomerId,
    "customer"
);

record_id!(
    /// Unique identifier of a [`Hotel`](crate::Hotel).
    HotelId,
    "hotel"
);

record_id!(
    /// Identifier of a [`Reservation`](crate::Reservation).
    ///
    /// Uniqueness is not enforced by default; see the booking configuration.
    ReservationId,
    "reservation"
);

/// A record that is addressed by a typed key within its collection.
pub trait RecordKey {
    /// The identifier type for this record.
    type Key: Copy + Eq + Hash + fmt::Display;

    /// Human-readable entity name used in diagnostics ("customer", "hotel").
    const ENTITY: &'static str;

    /// This record's key.
    fn key(&self) -> Self::Key;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_numbers() {
        let json = serde_json::to_string(&HotelId::new(42)).unwrap();
        assert_eq!(json, "42");

        let back: ReservationId = serde_json::from_str("-3").unwrap();
        assert_eq!(back.get(), -3);
    }

    #[test]
    fn display_names_the_entity() {
        assert_eq!(CustomerId::new(7).to_string(), "customer#7");
        assert_eq!(HotelId::new(1).to_string(), "hotel#1");
        assert_eq!(ReservationId::new(500).to_string(), "reservation#500");
    }

    #[test]
    fn ids_order_by_raw_value() {
        let mut ids = vec![HotelId::new(3), HotelId::new(-1), HotelId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![HotelId::new(-1), HotelId::new(2), HotelId::new(3)]);
    }
}
