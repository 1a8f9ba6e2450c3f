//! Cross-collection consistency report.
//!
//! Nothing in Innkeep cascades: deleting a customer or hotel leaves its
//! reservations behind, and a failed second write during booking leaves a
//! hotel's availability out of step with its reservation records. The
//! [`AuditReport`] makes both situations visible without changing them.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use innkeep_types::{Customer, Hotel, HotelId, Reservation};

/// A hotel whose booked-room count disagrees with its reservation records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityDrift {
    pub hotel_id: HotelId,
    /// `rooms - available_rooms` as stored on the hotel.
    pub booked_rooms: u32,
    /// Reservation records that name this hotel.
    pub reservation_count: usize,
}

/// Consistency findings across the three collections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Reservations whose customer no longer exists.
    pub missing_customer: Vec<Reservation>,
    /// Reservations whose hotel no longer exists.
    pub missing_hotel: Vec<Reservation>,
    /// Hotels whose availability does not match their reservations.
    pub capacity_drift: Vec<CapacityDrift>,
}

impl AuditReport {
    /// Compare the three collections.
    pub fn build(customers: &[Customer], hotels: &[Hotel], reservations: &[Reservation]) -> Self {
        let customer_ids: HashSet<_> = customers.iter().map(|c| c.customer_id).collect();
        let hotel_ids: HashSet<_> = hotels.iter().map(|h| h.hotel_id).collect();

        let mut report = Self::default();
        let mut per_hotel: HashMap<HotelId, usize> = HashMap::new();

        for r in reservations {
            if !customer_ids.contains(&r.customer_id) {
                report.missing_customer.push(*r);
            }
            if hotel_ids.contains(&r.hotel_id) {
                *per_hotel.entry(r.hotel_id).or_default() += 1;
            } else {
                report.missing_hotel.push(*r);
            }
        }

        for h in hotels {
            let count = per_hotel.get(&h.hotel_id).copied().unwrap_or(0);
            if count != h.booked_rooms() as usize {
                report.capacity_drift.push(CapacityDrift {
                    hotel_id: h.hotel_id,
                    booked_rooms: h.booked_rooms(),
                    reservation_count: count,
                });
            }
        }
        report.capacity_drift.sort_by_key(|d| d.hotel_id);
        report
    }

    /// Returns `true` if no inconsistency was found.
    pub fn is_clean(&self) -> bool {
        self.missing_customer.is_empty()
            && self.missing_hotel.is_empty()
            && self.capacity_drift.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeep_types::{CustomerId, ReservationId};

    fn booked(id: i64, rooms: u32, taken: u32) -> Hotel {
        let mut h = Hotel::new(HotelId::new(id), "h", "l", rooms);
        for _ in 0..taken {
            h.reserve_room();
        }
        h
    }

    fn res(id: i64, customer: i64, hotel: i64) -> Reservation {
        Reservation::new(ReservationId::new(id), CustomerId::new(customer), HotelId::new(hotel))
    }

    #[test]
    fn matching_collections_are_clean() {
        let customers = vec![Customer::new(CustomerId::new(1), "a", "a@x")];
        let hotels = vec![booked(1, 3, 2), booked(2, 1, 0)];
        let reservations = vec![res(1, 1, 1), res(2, 1, 1)];
        assert!(AuditReport::build(&customers, &hotels, &reservations).is_clean());
    }

    #[test]
    fn reports_orphans_and_drift() {
        let customers = vec![Customer::new(CustomerId::new(1), "a", "a@x")];
        let hotels = vec![booked(1, 3, 2)];
        let reservations = vec![res(1, 1, 1), res(2, 9, 7)];

        let report = AuditReport::build(&customers, &hotels, &reservations);
        assert_eq!(report.missing_customer, vec![res(2, 9, 7)]);
        assert_eq!(report.missing_hotel, vec![res(2, 9, 7)]);
        assert_eq!(
            report.capacity_drift,
            vec![CapacityDrift {
                hotel_id: HotelId::new(1),
                booked_rooms: 2,
                reservation_count: 1
            }]
        );
        assert!(!report.is_clean());
    }
}
