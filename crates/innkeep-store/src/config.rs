use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::file::JsonFileCollection;

/// Where and how the three collections are stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the collection documents.
    pub data_dir: PathBuf,
    /// File name of the customers collection, relative to `data_dir`.
    pub customers_file: String,
    /// File name of the hotels collection, relative to `data_dir`.
    pub hotels_file: String,
    /// File name of the reservations collection, relative to `data_dir`.
    pub reservations_file: String,
    /// Write indented JSON.
    pub pretty: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            customers_file: "customers.json".into(),
            hotels_file: "hotels.json".into(),
            reservations_file: "reservations.json".into(),
            pretty: true,
        }
    }
}

impl StorageConfig {
    /// Default file names under a specific directory.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    pub fn customers_path(&self) -> PathBuf {
        self.data_dir.join(&self.customers_file)
    }

    pub fn hotels_path(&self) -> PathBuf {
        self.data_dir.join(&self.hotels_file)
    }

    pub fn reservations_path(&self) -> PathBuf {
        self.data_dir.join(&self.reservations_file)
    }

    /// Open a JSON file collection at `path` with this configuration's
    /// formatting.
    pub fn open<T>(&self, path: PathBuf) -> JsonFileCollection<T> {
        JsonFileCollection::open(path).pretty(self.pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let c = StorageConfig::default();
        assert_eq!(c.customers_path(), PathBuf::from("data/customers.json"));
        assert_eq!(c.hotels_path(), PathBuf::from("data/hotels.json"));
        assert_eq!(c.reservations_path(), PathBuf::from("data/reservations.json"));
        assert!(c.pretty);
    }

    #[test]
    fn in_dir_keeps_default_names() {
        let c = StorageConfig::in_dir("/var/lib/innkeep");
        assert_eq!(c.hotels_path(), PathBuf::from("/var/lib/innkeep/hotels.json"));
    }
}
