//! Snapshot persistence for the whole aggregate.
//!
//! One JSON file holds the entire university. Saving writes to a temporary
//! file in the same directory and atomically renames it over the snapshot,
//! so a crash mid-write never corrupts the previously committed state.
//! Loading swallows corruption: an unreadable snapshot logs a warning and
//! falls back to the seeded default university.

use std::io::Write;
use std::path::{Path, PathBuf};

use campus_domain::University;
use thiserror::Error;

use crate::infrastructure::seed;

/// Persistence-layer failure, surfaced to the caller on save.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Loads and stores the university snapshot at a fixed path.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, or seed a fresh university.
    ///
    /// A missing file means a first run; an unreadable or corrupt file is
    /// logged and replaced by the default, never surfaced as an error.
    pub fn load(&self) -> University {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no snapshot found, seeding a new university");
            return seed::default_university();
        }

        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "snapshot unreadable, seeding a new university");
                return seed::default_university();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(university) => {
                tracing::info!(path = %self.path.display(), "snapshot loaded");
                university
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "snapshot corrupt, seeding a new university");
                seed::default_university()
            }
        }
    }

    /// Persist the snapshot atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on serialization or I/O failure; nothing is
    /// swallowed here.
    pub fn save(&self, university: &University) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(university)?;

        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = match dir {
            Some(dir) => tempfile::NamedTempFile::new_in(dir)?,
            None => tempfile::NamedTempFile::new_in(".")?,
        };
        tmp.write_all(&json)?;
        tmp.persist(&self.path).map_err(|err| err.error)?;

        tracing::info!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("campus_db.json"));

        let mut uni = University::new("RoundTrip U");
        uni.add_curriculum("IT").unwrap();
        uni.add_subject_to_curriculum("IT", "OOP").unwrap();
        uni.enroll_student("Ivan Petrov", 20, "IT").unwrap();

        store.save(&uni).unwrap();
        let restored = store.load();

        assert_eq!(restored.name(), "RoundTrip U");
        assert_eq!(restored.students().len(), 1);
    }

    #[test]
    fn missing_file_seeds_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("absent.json"));

        let uni = store.load();
        assert!(!uni.students().is_empty());
        assert!(!uni.curricula().is_empty());
    }

    #[test]
    fn corrupt_file_seeds_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus_db.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = SnapshotStore::new(&path);
        let uni = store.load();
        assert_eq!(uni.name(), seed::default_university().name());
    }

    #[test]
    fn save_replaces_the_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("campus_db.json"));

        let mut uni = University::new("First");
        store.save(&uni).unwrap();
        uni = University::new("Second");
        store.save(&uni).unwrap();

        assert_eq!(store.load().name(), "Second");
    }
}
