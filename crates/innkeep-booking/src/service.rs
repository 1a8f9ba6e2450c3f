use std::sync::Arc;

use innkeep_catalog::{CatalogError, CustomerStore, HotelStore, RecordSet};
use innkeep_store::Collection;
use innkeep_types::{CustomerId, HotelId, Reservation, ReservationId};
use tracing::{debug, info, warn};

use crate::audit::AuditReport;
use crate::config::BookingConfig;
use crate::error::{BookingError, BookingResult};
use crate::lock::BookingLocks;

/// Outcome of one locked cancellation attempt.
enum CancelAttempt {
    Cancelled(Reservation),
    /// The reservation now belongs to a different hotel's lock.
    Relock(HotelId),
}

/// Creates and cancels reservations against the customer and hotel stores.
///
/// The service owns the reservation collection. It reads customers and
/// hotels, and changes a hotel's availability only through
/// [`HotelStore::reserve_room`], [`HotelStore::cancel_room`] and
/// [`HotelStore::commit`].
#[derive(Debug)]
pub struct ReservationService {
    customers: Arc<CustomerStore>,
    hotels: Arc<HotelStore>,
    reservations: RecordSet<Reservation>,
    locks: BookingLocks,
    config: BookingConfig,
}

impl ReservationService {
    pub fn new(
        customers: Arc<CustomerStore>,
        hotels: Arc<HotelStore>,
        reservations: Arc<dyn Collection<Reservation>>,
        config: BookingConfig,
    ) -> Self {
        Self {
            customers,
            hotels,
            reservations: RecordSet::new(reservations),
            locks: BookingLocks::new(config.lock_mode),
            config,
        }
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    pub fn customers(&self) -> &CustomerStore {
        &self.customers
    }

    pub fn hotels(&self) -> &HotelStore {
        &self.hotels
    }

    // ---- Booking ----

    /// Book one room at `hotel_id` for `customer_id`.
    ///
    /// Returns `true` only if the customer and hotel exist, the hotel had a
    /// free room, and both the hotel and the new reservation were persisted.
    /// The reason for a `false` is logged.
    pub fn create_reservation(
        &self,
        reservation_id: ReservationId,
        customer_id: CustomerId,
        hotel_id: HotelId,
    ) -> bool {
        match self.try_create_reservation(reservation_id, customer_id, hotel_id) {
            Ok(_) => true,
            Err(e) => {
                warn!(reservation = %reservation_id, error = %e, "reservation not created");
                false
            }
        }
    }

    /// Book one room, reporting why the booking was refused.
    ///
    /// Steps, in order: check the customer, check the hotel, take a room,
    /// persist the hotel, persist the reservation. A rejection before the
    /// hotel write changes nothing. A failure of the final write leaves the
    /// hotel with one room fewer and no reservation record.
    pub fn try_create_reservation(
        &self,
        reservation_id: ReservationId,
        customer_id: CustomerId,
        hotel_id: HotelId,
    ) -> BookingResult<Reservation> {
        let reservation = Reservation::new(reservation_id, customer_id, hotel_id);
        self.locks.run(hotel_id, || self.create_locked(reservation))
    }

    fn create_locked(&self, reservation: Reservation) -> BookingResult<Reservation> {
        let Reservation {
            reservation_id,
            customer_id,
            hotel_id,
        } = reservation;
        let unique_ids = self.config.reject_duplicate_reservation_ids;

        if unique_ids && self.reservations.contains(reservation_id) {
            return Err(BookingError::DuplicateReservation(reservation_id));
        }
        if !self.customers.contains(customer_id) {
            return Err(BookingError::CustomerNotFound(customer_id));
        }
        let mut hotel = self
            .hotels
            .get(hotel_id)
            .ok_or(BookingError::HotelNotFound(hotel_id))?;
        if !HotelStore::reserve_room(&mut hotel) {
            return Err(BookingError::CapacityExhausted(hotel_id));
        }

        self.hotels.commit(&hotel).map_err(|e| match e {
            CatalogError::NotFound { .. } => BookingError::HotelNotFound(hotel_id),
            other => other.into(),
        })?;

        let appended = if unique_ids {
            self.reservations.insert(reservation)
        } else {
            self.reservations.append(reservation)
        };
        match appended {
            Ok(stored) => {
                info!(
                    reservation = %reservation_id,
                    customer = %customer_id,
                    hotel = %hotel_id,
                    available = hotel.available_rooms(),
                    "reservation created"
                );
                Ok(stored)
            }
            Err(CatalogError::DuplicateKey { .. }) => {
                // The id was claimed after the pre-check, by a booking at another hotel.
                self.release_room(hotel_id);
                Err(BookingError::DuplicateReservation(reservation_id))
            }
            Err(e) => {
                warn!(
                    reservation = %reservation_id,
                    hotel = %hotel_id,
                    "hotel availability reduced but reservation not recorded"
                );
                Err(e.into())
            }
        }
    }

    // ---- Cancellation ----

    /// Cancel a reservation and give its room back to the hotel.
    ///
    /// Returns `true` if the reservation was found and removed, whether or
    /// not the hotel's availability could be restored. A reservation whose
    /// hotel has been deleted is still removed.
    pub fn cancel_reservation(&self, reservation_id: ReservationId) -> bool {
        match self.try_cancel_reservation(reservation_id) {
            Ok(_) => true,
            Err(e) => {
                warn!(reservation = %reservation_id, error = %e, "reservation not cancelled");
                false
            }
        }
    }

    /// Cancel a reservation, returning the removed record.
    ///
    /// With duplicate ids, one record is removed per call.
    pub fn try_cancel_reservation(&self, reservation_id: ReservationId) -> BookingResult<Reservation> {
        let mut hotel_id = self
            .reservations
            .find(reservation_id)
            .ok_or(BookingError::ReservationNotFound(reservation_id))?
            .hotel_id;
        loop {
            match self
                .locks
                .run(hotel_id, || self.cancel_locked(reservation_id, hotel_id))?
            {
                CancelAttempt::Cancelled(removed) => return Ok(removed),
                CancelAttempt::Relock(other) => hotel_id = other,
            }
        }
    }

    fn cancel_locked(
        &self,
        reservation_id: ReservationId,
        hotel_id: HotelId,
    ) -> BookingResult<CancelAttempt> {
        // Re-read under the lock: a concurrent cancellation may have won.
        let candidates: Vec<Reservation> = self
            .reservations
            .load_all()
            .into_iter()
            .filter(|r| r.reservation_id == reservation_id)
            .collect();
        if !candidates.iter().any(|r| r.hotel_id == hotel_id) {
            return match candidates.first() {
                Some(other) => Ok(CancelAttempt::Relock(other.hotel_id)),
                None => Err(BookingError::ReservationNotFound(reservation_id)),
            };
        }

        let restored = self.release_room(hotel_id);

        let removed = self
            .reservations
            .take_first(reservation_id, |r| r.hotel_id == hotel_id)
            .map_err(|e| match e {
                CatalogError::NotFound { .. } => BookingError::ReservationNotFound(reservation_id),
                other => other.into(),
            })?;
        info!(
            reservation = %reservation_id,
            hotel = %hotel_id,
            restored,
            "reservation cancelled"
        );
        Ok(CancelAttempt::Cancelled(removed))
    }

    /// Return one room to `hotel_id` and persist the hotel, even when the
    /// hotel was already fully available. Returns whether a room was
    /// actually returned and persisted.
    fn release_room(&self, hotel_id: HotelId) -> bool {
        let Some(mut hotel) = self.hotels.get(hotel_id) else {
            debug!(hotel = %hotel_id, "hotel no longer exists; availability not restored");
            return false;
        };
        let returned = HotelStore::cancel_room(&mut hotel);
        match self.hotels.commit(&hotel) {
            Ok(()) => returned,
            Err(e) => {
                warn!(hotel = %hotel_id, error = %e, "cannot restore hotel availability");
                false
            }
        }
    }

    // ---- Queries ----

    /// All reservation records; empty if the collection cannot be read.
    pub fn reservations(&self) -> Vec<Reservation> {
        self.reservations.load_all()
    }

    pub fn find_reservation(&self, reservation_id: ReservationId) -> Option<Reservation> {
        self.reservations.find(reservation_id)
    }

    pub fn reservations_for_customer(&self, customer_id: CustomerId) -> Vec<Reservation> {
        self.reservations()
            .into_iter()
            .filter(|r| r.customer_id == customer_id)
            .collect()
    }

    pub fn reservations_for_hotel(&self, hotel_id: HotelId) -> Vec<Reservation> {
        self.reservations()
            .into_iter()
            .filter(|r| r.hotel_id == hotel_id)
            .collect()
    }

    /// Compare the three collections for orphaned reservations and hotels
    /// whose availability disagrees with their reservation records.
    pub fn audit(&self) -> AuditReport {
        AuditReport::build(
            &self.customers.load_all(),
            &self.hotels.load_all(),
            &self.reservations.load_all(),
        )
    }
}
