//! Hotel records and the room-capacity primitives.
//!
//! `rooms` is the total capacity and `available_rooms` the number not yet
//! booked. Both fields are private so that every change goes through a
//! mutator that keeps `available_rooms <= rooms`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::TypeError;
use crate::identity::{HotelId, RecordKey};

/// A hotel record with a fixed capacity and a live availability count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredHotel")]
pub struct Hotel {
    pub hotel_id: HotelId,
    pub name: String,
    pub location: String,
    rooms: u32,
    available_rooms: u32,
}

/// On-disk shape of a hotel. `available_rooms` may be missing in documents
/// written before availability was tracked, and may be out of range in
/// hand-edited ones.
#[derive(Deserialize)]
struct StoredHotel {
    hotel_id: HotelId,
    name: String,
    location: String,
    rooms: u32,
    #[serde(default)]
    available_rooms: Option<u32>,
}

impl From<StoredHotel> for Hotel {
    fn from(stored: StoredHotel) -> Self {
        let available = stored.available_rooms.unwrap_or(stored.rooms);
        if available > stored.rooms {
            warn!(
                hotel = %stored.hotel_id,
                available,
                rooms = stored.rooms,
                "stored availability exceeds capacity; clamping"
            );
        }
        Self {
            hotel_id: stored.hotel_id,
            name: stored.name,
            location: stored.location,
            rooms: stored.rooms,
            available_rooms: available.min(stored.rooms),
        }
    }
}

impl Hotel {
    /// Create a hotel with every room available.
    pub fn new(
        hotel_id: HotelId,
        name: impl Into<String>,
        location: impl Into<String>,
        rooms: u32,
    ) -> Self {
        Self {
            hotel_id,
            name: name.into(),
            location: location.into(),
            rooms,
            available_rooms: rooms,
        }
    }

    /// Create a hotel with an explicit availability count.
    ///
    /// Fails if `available_rooms` exceeds `rooms`.
    pub fn with_availability(
        hotel_id: HotelId,
        name: impl Into<String>,
        location: impl Into<String>,
        rooms: u32,
        available_rooms: u32,
    ) -> Result<Self, TypeError> {
        if available_rooms > rooms {
            return Err(TypeError::InvalidAvailability {
                available: available_rooms,
                rooms,
            });
        }
        Ok(Self {
            available_rooms,
            ..Self::new(hotel_id, name, location, rooms)
        })
    }

    /// Total room capacity.
    pub fn rooms(&self) -> u32 {
        self.rooms
    }

    /// Rooms not currently booked.
    pub fn available_rooms(&self) -> u32 {
        self.available_rooms
    }

    /// Rooms currently booked (`rooms - available_rooms`).
    pub fn booked_rooms(&self) -> u32 {
        self.rooms - self.available_rooms
    }

    /// Returns `true` if at least one room is free.
    pub fn has_vacancy(&self) -> bool {
        self.available_rooms > 0
    }

    /// Take one room. Returns `false` and leaves the hotel unchanged when
    /// no room is available.
    ///
    /// This is the only operation that lowers `available_rooms`.
    pub fn reserve_room(&mut self) -> bool {
        if self.available_rooms == 0 {
            return false;
        }
        self.available_rooms -= 1;
        true
    }

    /// Give back one room. Returns `false` and leaves the hotel unchanged
    /// when the hotel is already at full availability.
    ///
    /// This is the only operation that raises `available_rooms`.
    pub fn cancel_room(&mut self) -> bool {
        if self.available_rooms >= self.rooms {
            return false;
        }
        self.available_rooms += 1;
        true
    }

    /// Change the total capacity, keeping the number of booked rooms where
    /// possible and clamping availability into `0..=rooms`.
    ///
    /// Growing a hotel adds the new rooms as available. Shrinking it below
    /// the booked count leaves no rooms available.
    pub fn set_rooms(&mut self, rooms: u32) {
        let booked = self.booked_rooms();
        self.rooms = rooms;
        self.available_rooms = rooms.saturating_sub(booked);
    }

    /// Overwrite only the supplied fields. A capacity edit goes through
    /// [`Self::set_rooms`].
    pub fn patch(&mut self, name: Option<String>, location: Option<String>, rooms: Option<u32>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(rooms) = rooms {
            self.set_rooms(rooms);
        }
    }
}

impl RecordKey for Hotel {
    type Key = HotelId;
    const ENTITY: &'static str = "hotel";

    fn key(&self) -> HotelId {
        self.hotel_id
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hotel {} | Name: {} | Location: {} | Rooms: {} ({} available)",
            self.hotel_id.get(),
            self.name,
            self.location,
            self.rooms,
            self.available_rooms
        )
    }
}
