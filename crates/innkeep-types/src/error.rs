use thiserror::Error;

/// Errors produced when constructing record values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("available rooms {available} exceed capacity {rooms}")]
    InvalidAvailability { available: u32, rooms: u32 },
}
