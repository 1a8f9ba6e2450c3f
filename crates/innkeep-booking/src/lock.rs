use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use innkeep_types::HotelId;

use crate::config::LockMode;

/// Pipeline locks for the reservation service.
///
/// The mutexes guard `()`: they order pipelines, they do not own data, so a
/// poisoned lock is simply taken over.
pub(crate) struct BookingLocks {
    mode: LockMode,
    global: Mutex<()>,
    hotels: Mutex<HashMap<HotelId, Arc<Mutex<()>>>>,
}

impl BookingLocks {
    pub(crate) fn new(mode: LockMode) -> Self {
        Self {
            mode,
            global: Mutex::new(()),
            hotels: Mutex::new(HashMap::new()),
        }
    }

    /// Run `f` while holding the lock that covers `hotel`.
    pub(crate) fn run<R>(&self, hotel: HotelId, f: impl FnOnce() -> R) -> R {
        match self.mode {
            LockMode::Disabled => f(),
            LockMode::Global => {
                let _guard = acquire(&self.global);
                f()
            }
            LockMode::PerHotel => {
                let slot = self.slot(hotel);
                let _guard = acquire(slot.as_ref());
                f()
            }
        }
    }

    fn slot(&self, hotel: HotelId) -> Arc<Mutex<()>> {
        acquire(&self.hotels).entry(hotel).or_default().clone()
    }
}

fn acquire<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl std::fmt::Debug for BookingLocks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hotels = acquire(&self.hotels).len();
        f.debug_struct("BookingLocks")
            .field("mode", &self.mode)
            .field("hotel_locks", &hotels)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Count the peak number of closures running at once for `mode`.
    fn peak_overlap(mode: LockMode, hotels: [i64; 4]) -> usize {
        let locks = BookingLocks::new(mode);
        let active = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);
        std::thread::scope(|s| {
            for h in hotels {
                let (locks, active, peak) = (&locks, &active, &peak);
                s.spawn(move || {
                    locks.run(HotelId::new(h), || {
                        let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                        peak.fetch_max(now, Ordering::SeqCst);
                        std::thread::sleep(Duration::from_millis(20));
                        active.fetch_sub(1, Ordering::SeqCst);
                    });
                });
            }
        });
        peak.load(Ordering::SeqCst)
    }

    #[test]
    fn same_hotel_is_serialized() {
        assert_eq!(peak_overlap(LockMode::PerHotel, [1, 1, 1, 1]), 1);
    }

    #[test]
    fn global_serializes_everything() {
        assert_eq!(peak_overlap(LockMode::Global, [1, 2, 3, 4]), 1);
    }

    #[test]
    fn per_hotel_reuses_one_slot_per_id() {
        let locks = BookingLocks::new(LockMode::PerHotel);
        locks.run(HotelId::new(1), || ());
        locks.run(HotelId::new(1), || ());
        locks.run(HotelId::new(2), || ());
        assert_eq!(acquire(&locks.hotels).len(), 2);
    }

    #[test]
    fn run_returns_closure_value() {
        let locks = BookingLocks::new(LockMode::Disabled);
        assert_eq!(locks.run(HotelId::new(1), || 7), 7);
    }
}
