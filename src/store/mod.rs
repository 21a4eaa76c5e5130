//! Tasting record store
//!
//! Handles saving, loading, and managing tasting records. Each record is
//! one TOML file named by its id under the platform data directory; the
//! store keeps an in-memory cache and is the sole authority for ids and
//! timestamps.

use crate::domain::{NoteDraft, RecordId, TastingNote};
use crate::error::StoreError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Record store backed by one TOML file per record
pub struct RecordStore {
    /// Directory where record files live
    records_dir: PathBuf,

    /// Cached records keyed by id
    records: HashMap<RecordId, TastingNote>,
}

impl RecordStore {
    /// Create a store at the default data directory, loading existing records
    pub fn new() -> Self {
        Self::at(Self::default_records_dir())
    }

    /// Create a store at a specific directory, loading existing records
    pub fn at(records_dir: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            records_dir: records_dir.into(),
            records: HashMap::new(),
        };

        if let Err(e) = store.load_all() {
            log::warn!("Failed to load records: {}", e);
        }

        store
    }

    /// Default records directory under the platform data dir
    ///
    /// Honors the `VINOTECA_RECORDS_DIR` environment variable override.
    fn default_records_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("VINOTECA_RECORDS_DIR") {
            if !dir.trim().is_empty() {
                return PathBuf::from(dir);
            }
        }

        dirs::data_dir()
            .unwrap_or_else(|| {
                std::env::var("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join(".local")
                    .join("share")
            })
            .join("vinoteca")
            .join("records")
    }

    /// The directory this store persists to
    pub fn records_dir(&self) -> &Path {
        &self.records_dir
    }

    /// Ensure the records directory exists
    fn ensure_dir(&self) -> Result<(), StoreError> {
        if !self.records_dir.exists() {
            fs::create_dir_all(&self.records_dir)?;
        }
        Ok(())
    }

    /// Path of the file holding a record
    fn record_path(&self, id: &RecordId) -> PathBuf {
        self.records_dir.join(format!("{}.toml", id))
    }

    /// Load all records from disk, skipping unreadable files
    pub fn load_all(&mut self) -> Result<(), StoreError> {
        self.ensure_dir()?;
        self.records.clear();

        if let Ok(entries) = fs::read_dir(&self.records_dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    match Self::load_record_from_path(&path) {
                        Ok(note) => {
                            self.records.insert(note.id.clone(), note);
                        }
                        Err(e) => {
                            log::warn!("Failed to load record {:?}: {}", path, e);
                        }
                    }
                }
            }
        }

        log::info!("Loaded {} tasting records", self.records.len());
        Ok(())
    }

    fn load_record_from_path(path: &Path) -> Result<TastingNote, StoreError> {
        let content = fs::read_to_string(path)?;
        let note: TastingNote = toml::from_str(&content)?;
        Ok(note)
    }

    fn write_record(&self, note: &TastingNote) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let path = self.record_path(&note.id);
        let content = toml::to_string_pretty(note)?;
        fs::write(&path, content)?;
        log::info!("Saved record {} to {:?}", note.id, path);
        Ok(())
    }

    /// Create a new record from a draft, assigning id and timestamps
    ///
    /// # Errors
    /// Returns `StoreError::Validation` for an invalid draft, or an IO error
    pub fn create(&mut self, draft: NoteDraft) -> Result<TastingNote, StoreError> {
        let note = TastingNote::from_draft(RecordId::generate(), draft)?;
        self.write_record(&note)?;
        self.records.insert(note.id.clone(), note.clone());
        Ok(note)
    }

    /// Get a record by id
    pub fn get(&self, id: &RecordId) -> Option<&TastingNote> {
        self.records.get(id)
    }

    /// All records, newest first
    pub fn list(&self) -> Vec<&TastingNote> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.as_str().cmp(a.id.as_str())));
        records
    }

    /// Replace a record's editable fields from a draft, bumping modified_at
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` for an unknown id
    pub fn update(&mut self, id: &RecordId, draft: NoteDraft) -> Result<TastingNote, StoreError> {
        let note = self
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        note.apply_draft(draft)?;
        let updated = note.clone();
        self.write_record(&updated)?;
        Ok(updated)
    }

    /// Delete a record by id
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` for an unknown id
    pub fn delete(&mut self, id: &RecordId) -> Result<(), StoreError> {
        if !self.records.contains_key(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }

        let path = self.record_path(id);
        if path.exists() {
            fs::remove_file(&path)?;
        }

        self.records.remove(id);
        log::info!("Deleted record {}", id);
        Ok(())
    }

    /// Check whether a record exists
    pub fn exists(&self, id: &RecordId) -> bool {
        self.records.contains_key(id)
    }

    /// Number of records
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Export the whole cellar as pretty-printed JSON, newest first
    pub fn export_json(&self) -> Result<String, StoreError> {
        let records: Vec<&TastingNote> = self.list();
        Ok(serde_json::to_string_pretty(&records)?)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Characteristic, CharacteristicSet, CharacteristicValue, TastingRating};

    fn temp_store() -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::at(dir.path());
        (dir, store)
    }

    #[test]
    fn test_create_assigns_id_and_timestamps() {
        let (_dir, mut store) = temp_store();
        let note = store.create(NoteDraft::new("Rioja Reserva")).unwrap();

        assert!(!note.id.as_str().is_empty());
        assert_eq!(note.created_at, note.modified_at);
        assert!(store.exists(&note.id));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_create_rejects_invalid_draft() {
        let (_dir, mut store) = temp_store();
        let result = store.create(NoteDraft::new(""));
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_records_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let id = {
            let mut store = RecordStore::at(dir.path());
            let characteristics = CharacteristicSet::default().with_value(
                Characteristic::Sweetness,
                CharacteristicValue::new(85).unwrap(),
            );
            store
                .create(
                    NoteDraft::new("Sauternes")
                        .with_characteristics(characteristics)
                        .with_rating(TastingRating::new(4).unwrap()),
                )
                .unwrap()
                .id
        };

        let store = RecordStore::at(dir.path());
        let note = store.get(&id).expect("record should reload");
        assert_eq!(note.name, "Sauternes");
        assert_eq!(
            note.characteristics
                .get(Characteristic::Sweetness)
                .as_percentage(),
            85
        );
        assert_eq!(note.rating.unwrap().stars(), 4);
    }

    #[test]
    fn test_list_is_newest_first() {
        let (_dir, mut store) = temp_store();
        let first = store.create(NoteDraft::new("First")).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = store.create(NoteDraft::new("Second")).unwrap();

        let listed = store.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[test]
    fn test_update_bumps_modified_at() {
        let (_dir, mut store) = temp_store();
        let note = store.create(NoteDraft::new("Chablis")).unwrap();
        let created_at = note.created_at.clone();

        std::thread::sleep(std::time::Duration::from_millis(5));
        let mut draft = note.to_draft();
        draft.notes = Some("flinty".to_string());
        let updated = store.update(&note.id, draft).unwrap();

        assert_eq!(updated.created_at, created_at);
        assert!(updated.modified_at > created_at);
        assert_eq!(updated.notes.as_deref(), Some("flinty"));
    }

    #[test]
    fn test_update_unknown_id() {
        let (_dir, mut store) = temp_store();
        let result = store.update(&RecordId::generate(), NoteDraft::new("Ghost"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_delete_removes_file() {
        let (dir, mut store) = temp_store();
        let note = store.create(NoteDraft::new("Beaujolais")).unwrap();
        let path = dir.path().join(format!("{}.toml", note.id));
        assert!(path.exists());

        store.delete(&note.id).unwrap();
        assert!(!path.exists());
        assert!(!store.exists(&note.id));
        assert!(matches!(
            store.delete(&note.id),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_unreadable_file_is_skipped() {
        let (dir, mut store) = temp_store();
        store.create(NoteDraft::new("Good")).unwrap();
        fs::write(dir.path().join("broken.toml"), "not a record").unwrap();

        let store = RecordStore::at(dir.path());
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_export_json() {
        let (_dir, mut store) = temp_store();
        store.create(NoteDraft::new("Nebbiolo")).unwrap();

        let json = store.export_json().unwrap();
        assert!(json.contains("\"name\": \"Nebbiolo\""));
        assert!(json.contains("\"sweetness\": 50"));
    }
}
