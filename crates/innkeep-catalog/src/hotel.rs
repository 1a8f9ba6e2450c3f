use std::sync::Arc;

use innkeep_store::Collection;
use innkeep_types::{Hotel, HotelId};
use tracing::{debug, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::records::RecordSet;

/// CRUD over the hotel collection, plus the room-capacity primitives.
///
/// The primitives act on an in-memory [`Hotel`]; callers write the mutated
/// value back with [`HotelStore::commit`].
#[derive(Debug)]
pub struct HotelStore {
    records: RecordSet<Hotel>,
}

impl HotelStore {
    pub fn new(backend: Arc<dyn Collection<Hotel>>) -> Self {
        Self {
            records: RecordSet::new(backend),
        }
    }

    /// All hotels; empty if the collection is missing or malformed.
    pub fn load_all(&self) -> Vec<Hotel> {
        self.records.load_all()
    }

    /// Replace the whole collection. Returns `false` if the write failed.
    pub fn save_all(&self, hotels: &[Hotel]) -> bool {
        self.records.save_all(hotels)
    }

    pub fn get(&self, id: HotelId) -> Option<Hotel> {
        self.records.find(id)
    }

    pub fn contains(&self, id: HotelId) -> bool {
        self.records.contains(id)
    }

    /// Create and persist a hotel with every room available. Fails with
    /// `DuplicateKey` if `id` is taken.
    pub fn create(
        &self,
        id: HotelId,
        name: impl Into<String>,
        location: impl Into<String>,
        rooms: u32,
    ) -> CatalogResult<Hotel> {
        let hotel = Hotel::new(id, name, location, rooms);
        match self.records.insert(hotel) {
            Ok(created) => {
                debug!(hotel = %id, rooms, "hotel created");
                Ok(created)
            }
            Err(e) => {
                warn!(hotel = %id, error = %e, "hotel not created");
                Err(e)
            }
        }
    }

    /// Delete a hotel. Returns whether a record was found and removed.
    /// Reservations against the hotel are left in place.
    pub fn delete(&self, id: HotelId) -> bool {
        self.records.remove(id)
    }

    /// Patch the supplied fields of an existing hotel and persist.
    ///
    /// A new `rooms` value re-clamps `available_rooms`; see
    /// [`Hotel::set_rooms`].
    pub fn modify(
        &self,
        id: HotelId,
        name: Option<String>,
        location: Option<String>,
        rooms: Option<u32>,
    ) -> CatalogResult<Hotel> {
        let updated = self.records.update(id, |h| h.patch(name, location, rooms))?;
        debug!(
            hotel = %id,
            rooms = updated.rooms(),
            available = updated.available_rooms(),
            "hotel modified"
        );
        Ok(updated)
    }

    /// Take one room from `hotel` if any is free.
    pub fn reserve_room(hotel: &mut Hotel) -> bool {
        let taken = hotel.reserve_room();
        if !taken {
            debug!(hotel = %hotel.hotel_id, "no rooms available");
        }
        taken
    }

    /// Return one room to `hotel` unless it is already fully available.
    pub fn cancel_room(hotel: &mut Hotel) -> bool {
        let returned = hotel.cancel_room();
        if !returned {
            debug!(hotel = %hotel.hotel_id, "hotel already at full availability");
        }
        returned
    }

    /// Write `hotel` back over the stored record with the same id.
    ///
    /// Fails with `NotFound` if that record has been deleted meanwhile, or
    /// `Persistence` if the write failed.
    pub fn commit(&self, hotel: &Hotel) -> CatalogResult<()> {
        self.records.mutate(|hotels| {
            let slot = hotels
                .iter_mut()
                .find(|h| h.hotel_id == hotel.hotel_id)
                .ok_or_else(|| CatalogError::not_found("hotel", hotel.hotel_id))?;
            *slot = hotel.clone();
            Ok(())
        })?;
        debug!(
            hotel = %hotel.hotel_id,
            available = hotel.available_rooms(),
            "hotel committed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeep_store::{InMemoryCollection, JsonFileCollection};

    fn store() -> (Arc<InMemoryCollection<Hotel>>, HotelStore) {
        let backend = Arc::new(InMemoryCollection::<Hotel>::new());
        let store = HotelStore::new(backend.clone());
        (backend, store)
    }

    #[test]
    fn create_initializes_availability() {
        let (_, store) = store();
        let h = store.create(HotelId::new(101), "Test Hotel", "CDMX", 10).unwrap();
        assert_eq!(h.available_rooms(), 10);
        assert_eq!(store.get(HotelId::new(101)).unwrap().available_rooms(), 10);
    }

    #[test]
    fn duplicate_id_is_rejected_and_collection_unchanged() {
        let (backend, store) = store();
        store.create(HotelId::new(1), "Plaza", "Cancun", 3).unwrap();
        let before = backend.snapshot();

        let err = store.create(HotelId::new(1), "Other", "Merida", 9).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(backend.snapshot(), before);
    }

    #[test]
    fn modify_name_keeps_capacity() {
        let (_, store) = store();
        store.create(HotelId::new(101), "Test Hotel", "CDMX", 10).unwrap();
        store
            .modify(HotelId::new(101), Some("Hotel Modificado".into()), None, None)
            .unwrap();

        let h = store.get(HotelId::new(101)).unwrap();
        assert_eq!(h.name, "Hotel Modificado");
        assert_eq!(h.location, "CDMX");
        assert_eq!(h.rooms(), 10);
    }

    #[test]
    fn modify_rooms_clamps_availability() {
        let (_, store) = store();
        let mut h = store.create(HotelId::new(1), "Plaza", "Cancun", 4).unwrap();
        HotelStore::reserve_room(&mut h);
        HotelStore::reserve_room(&mut h);
        HotelStore::reserve_room(&mut h);
        store.commit(&h).unwrap();

        let h = store.modify(HotelId::new(1), None, None, Some(2)).unwrap();
        assert_eq!(h.rooms(), 2);
        assert_eq!(h.available_rooms(), 0);
    }

    #[test]
    fn capacity_primitives_respect_bounds() {
        let mut h = Hotel::new(HotelId::new(1), "Plaza", "Cancun", 1);
        assert!(!HotelStore::cancel_room(&mut h));
        assert!(HotelStore::reserve_room(&mut h));
        assert!(!HotelStore::reserve_room(&mut h));
        assert_eq!(h.available_rooms(), 0);
        assert!(HotelStore::cancel_room(&mut h));
        assert_eq!(h.available_rooms(), 1);
    }

    #[test]
    fn commit_of_deleted_hotel_is_not_found() {
        let (_, store) = store();
        let h = store.create(HotelId::new(1), "Plaza", "Cancun", 1).unwrap();
        assert!(store.delete(HotelId::new(1)));

        let err = store.commit(&h).unwrap_err();
        assert!(err.is_not_found());
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn garbage_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hotels.json");
        std::fs::write(&path, "ESTO NO ES UN JSON VALIDO").unwrap();

        let store = HotelStore::new(Arc::new(JsonFileCollection::<Hotel>::open(&path)));
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn legacy_records_without_availability_load_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hotels.json");
        std::fs::write(
            &path,
            r#"[{"hotel_id": 1, "name": "Plaza", "location": "Cancun", "rooms": 4}]"#,
        )
        .unwrap();

        let store = HotelStore::new(Arc::new(JsonFileCollection::<Hotel>::open(&path)));
        assert_eq!(store.get(HotelId::new(1)).unwrap().available_rooms(), 4);
    }
}
