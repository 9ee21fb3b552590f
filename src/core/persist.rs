//! # Phone Book Persistence
//!
//! Load the store from a JSON file at startup and write it back at exit.
//!
//! The file is a top-level array of contacts, each tagged with `"type"`:
//!
//! ```text
//! [
//!   { "type": "Person", "name": "John", "lastName": "Smith", ... },
//!   { "type": "Organization", "name": "Acme", "address": "...", ... }
//! ]
//! ```
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::core::record::Contact;
use crate::core::store::ContactStore;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("phone book I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("phone book is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result of loading: the records plus whether the file may be written back.
#[derive(Debug)]
pub struct LoadedBook {
    pub store: ContactStore,
    /// `false` for in-memory sessions and for files that could not be read.
    pub persist: bool,
}

impl LoadedBook {
    fn empty(persist: bool) -> Self {
        Self {
            store: ContactStore::new(),
            persist,
        }
    }
}

/// Loads the phone book at `path`.
///
/// - `None`: in-memory session, empty store.
/// - Missing file: an empty file is created and the store starts empty.
/// - Unreadable path (permissions, a directory): empty store, never saved.
/// - Blank file: empty store.
/// - Anything else must parse; malformed content is an error.
pub fn load(path: Option<&Path>) -> Result<LoadedBook, PersistError> {
    let Some(path) = path else {
        info!("No phone book file given, running in memory only");
        return Ok(LoadedBook::empty(false));
    };

    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Phone book {} not found, creating it", path.display());
            fs::File::create(path)?;
            return Ok(LoadedBook::empty(true));
        }
        Err(e) if matches!(e.kind(), io::ErrorKind::PermissionDenied | io::ErrorKind::IsADirectory) => {
            warn!("Phone book {} is unreadable ({}), running in memory only", path.display(), e);
            return Ok(LoadedBook::empty(false));
        }
        Err(e) => return Err(e.into()),
    };

    if json.trim().is_empty() {
        debug!("Phone book {} is empty", path.display());
        return Ok(LoadedBook::empty(true));
    }

    let records: Vec<Contact> = serde_json::from_str(&json)?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(LoadedBook {
        store: ContactStore::from_records(records),
        persist: true,
    })
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<(), PersistError> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Writes the whole store to `path`.
///
/// Only saves when a path was given and the file still exists; returns
/// whether anything was written.
pub fn save(path: Option<&Path>, store: &ContactStore) -> Result<bool, PersistError> {
    let Some(path) = path else {
        return Ok(false);
    };
    if !path.exists() {
        warn!("Phone book {} disappeared, not saving", path.display());
        return Ok(false);
    }
    atomic_write_json(path, store.records())?;
    debug!("Saved {} records to {}", store.count(), path.display());
    Ok(true)
}
