//! Durable key-value storage for the profile and the two record collections.
//!
//! Every collection lives in its own slot and is rewritten in full whenever it
//! changes. Slots are independent: there is no transaction spanning two of
//! them, but each individual write replaces the whole value at once.
//!
//! ## Slots
//!
//! | Key                | Value                |
//! |--------------------|----------------------|
//! | `user_profile`     | `UserProfile`        |
//! | `daily_entries`    | `Vec<DailyEntry>`    |
//! | `extra_activities` | `Vec<ExtraActivity>` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fieldlog::libs::storage::{FileStore, Journal};
//! use fieldlog::libs::entry::{day_stamp, DailyEntry};
//! use chrono::Local;
//!
//! let mut journal = Journal::open(FileStore::new())?;
//! journal.add_entry(DailyEntry::new(day_stamp(Local::now().date_naive()), 2, 30, 1, None))?;
//! # Ok::<(), fieldlog::libs::storage::StorageError>(())
//! ```

use super::data_storage::DataStorage;
use super::entry::{DailyEntry, ExtraActivity};
use super::profile::{InvalidGoal, UserProfile};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const PROFILE_KEY: &str = "user_profile";
pub const ENTRIES_KEY: &str = "daily_entries";
pub const EXTRAS_KEY: &str = "extra_activities";

pub const ALL_KEYS: [&str; 3] = [PROFILE_KEY, ENTRIES_KEY, EXTRAS_KEY];

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for slot '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("slot '{key}' holds malformed data: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("refusing to write slot '{key}': {source}")]
    Invalid {
        key: String,
        #[source]
        source: InvalidGoal,
    },

    #[error("failed to serialize slot '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw string slots addressed by key.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Erases every known slot.
    fn clear(&self) -> Result<(), StorageError> {
        for key in ALL_KEYS {
            self.remove(key)?;
        }
        Ok(())
    }
}

/// One `<key>.json` file per slot in the application data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    storage: DataStorage,
}

impl FileStore {
    pub fn new() -> Self {
        Self::with_storage(DataStorage::new())
    }

    pub fn with_storage(storage: DataStorage) -> Self {
        Self { storage }
    }

    pub fn base_path(&self) -> &Path {
        self.storage.base_path()
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        self.storage.get_path(&format!("{}.json", key)).map_err(|source| StorageError::Io { key: key.to_string(), source })
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { key: key.to_string(), source }),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        let tmp_path = path.with_extension("json.tmp");
        let io_err = |source: io::Error| StorageError::Io { key: key.to_string(), source };

        // Write aside and rename so a slot is never left half-written.
        fs::write(&tmp_path, value).map_err(io_err)?;
        fs::rename(&tmp_path, &path).map_err(io_err)?;
        debug!(key, bytes = value.len(), "slot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { key: key.to_string(), source }),
        }
    }
}

/// In-process store, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.lock().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots.lock().remove(key);
        Ok(())
    }
}

impl<S: Store + ?Sized> Store for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Reads a slot, falling back to `T::default()` when it is absent.
///
/// Malformed data is an error, never silently replaced by the default.
pub fn load<T, S>(store: &S, key: &str) -> Result<T, StorageError>
where
    T: DeserializeOwned + Default,
    S: Store + ?Sized,
{
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt { key: key.to_string(), source }),
        None => Ok(T::default()),
    }
}

/// Serializes `value` and replaces the slot unconditionally.
pub fn save<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: Store + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize { key: key.to_string(), source })?;
    store.put(key, &raw)
}

/// Erases every slot. Callers reload defaults afterwards.
pub fn reset<S: Store + ?Sized>(store: &S) -> Result<(), StorageError> {
    store.clear()
}

/// The session's working copy of all persisted state.
///
/// Reads go to memory; every mutation rewrites the affected slot before
/// returning.
#[derive(Debug)]
pub struct Journal<S: Store> {
    store: S,
    profile: UserProfile,
    entries: Vec<DailyEntry>,
    extras: Vec<ExtraActivity>,
}

impl<S: Store> Journal<S> {
    /// Loads all three slots. Any malformed slot aborts the whole load.
    pub fn open(store: S) -> Result<Self, StorageError> {
        let profile = load(&store, PROFILE_KEY)?;
        let entries = load(&store, ENTRIES_KEY)?;
        let extras = load(&store, EXTRAS_KEY)?;
        Ok(Self { store, profile, entries, extras })
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn entries(&self) -> &[DailyEntry] {
        &self.entries
    }

    pub fn extras(&self) -> &[ExtraActivity] {
        &self.extras
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_entry(&mut self, entry: DailyEntry) -> Result<(), StorageError> {
        self.entries.push(entry);
        save(&self.store, ENTRIES_KEY, &self.entries)
    }

    /// Removes the entry with `id`. Returns `false` when nothing matched.
    pub fn delete_entry(&mut self, id: &str) -> Result<bool, StorageError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        save(&self.store, ENTRIES_KEY, &self.entries)?;
        Ok(true)
    }

    pub fn add_extra(&mut self, extra: ExtraActivity) -> Result<(), StorageError> {
        self.extras.push(extra);
        save(&self.store, EXTRAS_KEY, &self.extras)
    }

    pub fn delete_extra(&mut self, id: &str) -> Result<bool, StorageError> {
        let before = self.extras.len();
        self.extras.retain(|e| e.id != id);
        if self.extras.len() == before {
            return Ok(false);
        }
        save(&self.store, EXTRAS_KEY, &self.extras)?;
        Ok(true)
    }

    /// Applies `change` to the profile and persists it.
    ///
    /// When `change` fails the profile is left exactly as it was.
    pub fn update_profile<E, F>(&mut self, change: F) -> Result<(), E>
    where
        F: FnOnce(&mut UserProfile) -> Result<(), E>,
        E: From<StorageError>,
    {
        let mut draft = self.profile.clone();
        change(&mut draft)?;
        draft.validate().map_err(|source| StorageError::Invalid {
            key: PROFILE_KEY.to_string(),
            source,
        })?;
        save(&self.store, PROFILE_KEY, &draft)?;
        self.profile = draft;
        Ok(())
    }

    /// Erases every slot and returns to first-run defaults.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        reset(&self.store)?;
        self.profile = UserProfile::default();
        self.entries.clear();
        self.extras.clear();
        Ok(())
    }
}
