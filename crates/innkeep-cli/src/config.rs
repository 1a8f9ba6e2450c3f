use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use innkeep_booking::BookingConfig;
use innkeep_store::StorageConfig;

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "innkeep.toml";

/// Top-level `innkeep.toml`.
///
/// ```toml
/// [storage]
/// data_dir = "/var/lib/innkeep"
/// pretty = false
///
/// [booking]
/// lock_mode = "global"
/// reject_duplicate_reservation_ids = true
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InnkeepConfig {
    pub storage: StorageConfig,
    pub booking: BookingConfig,
}

impl InnkeepConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Load `explicit`, else `./innkeep.toml` if it exists, else defaults.
    /// `data_dir` replaces the configured data directory.
    pub fn resolve(explicit: Option<&Path>, data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::load_from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        if let Some(dir) = data_dir {
            config.storage.data_dir = dir;
        }
        tracing::debug!(data_dir = %config.storage.data_dir.display(), "configuration resolved");
        Ok(config)
    }
}
