use innkeep_catalog::CatalogError;
use innkeep_types::{CustomerId, HotelId, ReservationId};

/// Reasons a reservation could not be created or cancelled.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// The referenced customer does not exist.
    #[error("{0} not found")]
    CustomerNotFound(CustomerId),

    /// The referenced hotel does not exist.
    #[error("{0} not found")]
    HotelNotFound(HotelId),

    /// No reservation with this id exists.
    #[error("{0} not found")]
    ReservationNotFound(ReservationId),

    /// The hotel has no free room.
    #[error("{0} has no rooms available")]
    CapacityExhausted(HotelId),

    /// The reservation id is already in use and duplicates are rejected.
    #[error("{0} already exists")]
    DuplicateReservation(ReservationId),

    /// A collection could not be written.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl BookingError {
    /// Returns `true` if the failure was a storage write rather than a
    /// rejected request.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Catalog(CatalogError::Persistence { .. }))
    }
}

/// Result alias for booking operations.
pub type BookingResult<T> = Result<T, BookingError>;
