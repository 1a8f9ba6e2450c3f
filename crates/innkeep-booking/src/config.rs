use serde::{Deserialize, Serialize};

/// How the booking pipeline is serialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LockMode {
    /// One lock per hotel id, held for the whole create/cancel pipeline.
    /// Bookings at different hotels proceed in parallel.
    #[default]
    PerHotel,
    /// One lock for every pipeline.
    Global,
    /// No pipeline lock. Only correct with a single writer: two concurrent
    /// bookings of a hotel's last room can both succeed.
    Disabled,
}

/// Configuration for the reservation service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Serialization of the booking pipeline.
    pub lock_mode: LockMode,
    /// Reject a new reservation whose id is already in use. When `false`,
    /// duplicate reservation ids are stored as given.
    pub reject_duplicate_reservation_ids: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            lock_mode: LockMode::PerHotel,
            reject_duplicate_reservation_ids: false,
        }
    }
}

impl BookingConfig {
    /// Per-hotel locking with unique reservation ids.
    pub fn strict() -> Self {
        Self {
            reject_duplicate_reservation_ids: true,
            ..Default::default()
        }
    }

    pub fn with_lock_mode(mut self, lock_mode: LockMode) -> Self {
        self.lock_mode = lock_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = BookingConfig::default();
        assert_eq!(c.lock_mode, LockMode::PerHotel);
        assert!(!c.reject_duplicate_reservation_ids);
    }

    #[test]
    fn strict_config() {
        let c = BookingConfig::strict().with_lock_mode(LockMode::Global);
        assert_eq!(c.lock_mode, LockMode::Global);
        assert!(c.reject_duplicate_reservation_ids);
    }

    #[test]
    fn parses_partial_toml() {
        let c: BookingConfig = toml::from_str(r#"lock_mode = "global""#).unwrap();
        assert_eq!(c.lock_mode, LockMode::Global);
        assert!(!c.reject_duplicate_reservation_ids);

        let c: BookingConfig = toml::from_str("").unwrap();
        assert_eq!(c, BookingConfig::default());
    }

    #[test]
    fn lock_mode_names_are_kebab_case() {
        assert_eq!(serde_json::to_string(&LockMode::PerHotel).unwrap(), "\"per-hotel\"");
        assert_eq!(serde_json::to_string(&LockMode::Disabled).unwrap(), "\"disabled\"");
    }
}
