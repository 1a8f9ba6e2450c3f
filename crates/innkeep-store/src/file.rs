use std::fs;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::codec::{decode_collection, encode_collection};
use crate::error::{StoreError, StoreResult};
use crate::traits::Collection;

/// A collection persisted as one JSON array document on disk.
///
/// Reads parse the whole file. Writes serialize the whole collection into a
/// temporary file in the same directory and rename it over the target, so
/// the document is replaced in one step. Parent directories are created on
/// first write.
pub struct JsonFileCollection<T> {
    path: PathBuf,
    pretty: bool,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileCollection<T> {
    /// Open a collection at `path`. Nothing is read or created until the
    /// first `load` or `save_all`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
            _records: PhantomData,
        }
    }

    /// Write compact (`false`) or indented (`true`, the default) JSON.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl<T> Collection<T> for JsonFileCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> StoreResult<Vec<T>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "collection file absent; treating as empty");
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.path)?;
        let records = decode_collection(&text)?;
        debug!(path = %self.path.display(), count = records.len(), "collection loaded");
        Ok(records)
    }

    fn save_all(&self, records: &[T]) -> StoreResult<()> {
        let text = encode_collection(records, self.pretty)?;

        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Persist {
            path: self.path.clone(),
            source: e.error,
        })?;

        debug!(path = %self.path.display(), count = records.len(), "collection saved");
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

impl<T> std::fmt::Debug for JsonFileCollection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileCollection")
            .field("path", &self.path)
            .field("pretty", &self.pretty)
            .finish()
    }
}
