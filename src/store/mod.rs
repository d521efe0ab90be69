//! Record store over flat JSON files.
//!
//! Each [`Collection`] lives in its own file holding a JSON array. Reads
//! always return the whole collection and writes always replace it. File I/O
//! is synchronous; [`AsyncJsonStore`] moves it onto the blocking pool via
//! `tokio::task::spawn_blocking`.

mod async_wrapper;
pub use async_wrapper::AsyncJsonStore;

use crate::error::{StoreError, StoreResult};
use crate::metrics::Metrics;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::NamedTempFile;

/// The three collections persisted by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Contacts,
    Bookings,
    Subscribers,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Contacts,
        Collection::Bookings,
        Collection::Subscribers,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Contacts => "contacts.json",
            Collection::Bookings => "bookings.json",
            Collection::Subscribers => "subscribers.json",
        }
    }

    fn index(self) -> usize {
        match self {
            Collection::Contacts => 0,
            Collection::Bookings => 1,
            Collection::Subscribers => 2,
        }
    }
}

/// What a collection read actually found.
///
/// Callers that only want records use [`LoadOutcome::into_records`]; the
/// other variants stay visible for logging and metrics.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    /// The file parsed; it may legitimately hold an empty array.
    Loaded(Vec<T>),

    /// The file did not exist and was recreated as `[]`.
    Missing,

    /// The file exists but could not be read.
    Unreadable(String),

    /// The file was read but is not a JSON array of the expected records.
    Corrupt(String),
}

impl<T> LoadOutcome<T> {
    /// True when records were hidden behind an empty result.
    pub fn is_failure(&self) -> bool {
        matches!(self, LoadOutcome::Unreadable(_) | LoadOutcome::Corrupt(_))
    }

    /// The records, with every failure collapsed to an empty collection.
    pub fn into_records(self) -> Vec<T> {
        match self {
            LoadOutcome::Loaded(records) => records,
            _ => Vec::new(),
        }
    }
}

/// Synchronous whole-collection JSON file store.
///
/// A lock per collection serialises read-modify-write cycles made through
/// [`JsonFileStore::update`] within this process. Separate processes writing
/// the same directory can still race.
pub struct JsonFileStore {
    data_dir: PathBuf,
    locks: [Mutex<()>; 3],
    metrics: Metrics,
}

impl JsonFileStore {
    /// Create a store rooted at `data_dir`. Nothing is touched on disk until
    /// [`JsonFileStore::init`] or the first read/write.
    pub fn new(data_dir: impl Into<PathBuf>, metrics: Metrics) -> Self {
        Self {
            data_dir: data_dir.into(),
            locks: [Mutex::new(()), Mutex::new(()), Mutex::new(())],
            metrics,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of a collection file.
    pub fn path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }

    /// Create the data directory and any missing collection file as `[]`.
    pub fn init(&self) -> StoreResult<()> {
        for collection in Collection::ALL {
            let _guard = self.lock(collection);
            self.create_if_missing(collection)?;
        }
        Ok(())
    }

    /// Create a collection file holding `[]` unless one already exists.
    ///
    /// The file appears complete or not at all, and an existing file is never
    /// replaced. Returns whether the file was created.
    fn create_if_missing(&self, collection: Collection) -> StoreResult<bool> {
        fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::io(&self.data_dir, e))?;

        let path = self.path(collection);
        let mut tmp =
            NamedTempFile::new_in(&self.data_dir).map_err(|e| StoreError::io(&self.data_dir, e))?;
        tmp.write_all(b"[]").map_err(|e| StoreError::io(tmp.path(), e))?;

        match tmp.persist_noclobber(&path) {
            Ok(_) => {
                tracing::info!("Created {} in {}", collection.file_name(), self.data_dir.display());
                Ok(true)
            }
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(StoreError::io(&path, e.error)),
        }
    }

    /// Read a whole collection, reporting exactly what was found.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> LoadOutcome<T> {
        let path = self.path(collection);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // Ephemeral storage may have been wiped since startup.
                if let Err(create_err) = self.create_if_missing(collection) {
                    tracing::warn!("Could not recreate {}: {}", path.display(), create_err);
                }
                return LoadOutcome::Missing;
            }
            Err(e) => return LoadOutcome::Unreadable(e.to_string()),
        };

        match serde_json::from_slice::<Vec<T>>(&bytes) {
            Ok(records) => LoadOutcome::Loaded(records),
            Err(e) => LoadOutcome::Corrupt(e.to_string()),
        }
    }

    /// Read a whole collection, serving failures as an empty collection.
    ///
    /// Failures are logged and counted rather than returned.
    pub fn load_or_empty<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        let outcome = self.load(collection);
        self.observe(collection, &outcome);
        outcome.into_records()
    }

    /// Replace a whole collection.
    pub fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> StoreResult<()> {
        let body = serde_json::to_vec_pretty(records)?;
        fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::io(&self.data_dir, e))?;
        write_atomic(&self.data_dir, &self.path(collection), &body)
    }

    /// Read, modify and write a collection while holding its lock.
    ///
    /// The collection is written back only when `apply` succeeds.
    pub fn update<T, R, F>(&self, collection: Collection, apply: F) -> StoreResult<R>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> StoreResult<R>,
    {
        let _guard = self.lock(collection);

        let mut records = self.load_or_empty(collection);
        let result = apply(&mut records)?;
        self.save(collection, &records)?;
        Ok(result)
    }

    fn lock(&self, collection: Collection) -> MutexGuard<'_, ()> {
        // A panic in another writer leaves no partial state behind the lock.
        self.locks[collection.index()]
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn observe<T>(&self, collection: Collection, outcome: &LoadOutcome<T>) {
        match outcome {
            LoadOutcome::Loaded(_) => {}
            LoadOutcome::Missing => {
                tracing::info!("{} was missing, serving empty collection", collection.file_name());
            }
            LoadOutcome::Unreadable(reason) | LoadOutcome::Corrupt(reason) => {
                self.metrics.record_store_read_failure();
                tracing::warn!(
                    "Failed to read {}, serving empty collection: {}",
                    collection.file_name(),
                    reason
                );
            }
        }
    }
}

/// Write through a uniquely named temp file in `dir` so readers never see a
/// partial array and concurrent writers never share a temp file.
fn write_atomic(dir: &Path, path: &Path, body: &[u8]) -> StoreResult<()> {
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    tmp.write_all(body).map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| StoreError::io(path, e.error))?;
    Ok(())
}
