use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identity::{CustomerId, HotelId, RecordKey, ReservationId};

/// A booking of one room at `hotel_id` for `customer_id`.
///
/// A reservation has no lifecycle beyond existing or not existing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub customer_id: CustomerId,
    pub hotel_id: HotelId,
}

impl Reservation {
    pub fn new(reservation_id: ReservationId, customer_id: CustomerId, hotel_id: HotelId) -> Self {
        Self {
            reservation_id,
            customer_id,
            hotel_id,
        }
    }
}

impl RecordKey for Reservation {
    type Key = ReservationId;
    const ENTITY: &'static str = "reservation";

    fn key(&self) -> ReservationId {
        self.reservation_id
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation {} | Customer: {} | Hotel: {}",
            self.reservation_id.get(),
            self.customer_id.get(),
            self.hotel_id.get()
        )
    }
}
