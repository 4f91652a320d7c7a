//! Entry repository for JSON storage
//!
//! One repository instance per collection (incomes or expenses), each
//! persisting to its own file. The persisted form is a bare JSON array of
//! entries, and the in-memory order is the insertion order of the array —
//! reports and tables rely on it, so no sorting happens here.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GastoError;
use crate::models::{Entry, EntryId, EntryPatch};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for one entry collection
pub struct EntryRepository {
    path: PathBuf,
    entries: RwLock<Vec<Entry>>,
}

impl EntryRepository {
    /// Create a new repository persisting to the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Load entries from disk
    ///
    /// A missing or malformed file loads as an empty collection.
    pub fn load(&self) -> Result<(), GastoError> {
        let file_data: Vec<Entry> = read_json_or_default(&self.path)?;

        let mut entries = self
            .entries
            .write()
            .map_err(|e| GastoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *entries = file_data;
        Ok(())
    }

    /// Save entries to disk
    pub fn save(&self) -> Result<(), GastoError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| GastoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*entries)
    }

    /// Get an entry by ID
    pub fn get(&self, id: EntryId) -> Result<Option<Entry>, GastoError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| GastoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.iter().find(|e| e.id == id).cloned())
    }

    /// Get all entries in insertion order
    pub fn get_all(&self) -> Result<Vec<Entry>, GastoError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| GastoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.clone())
    }

    /// Append a new entry
    pub fn append(&self, entry: Entry) -> Result<(), GastoError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| GastoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.push(entry);
        Ok(())
    }

    /// Apply a patch to the entry with the given id, in place
    ///
    /// Returns the updated entry, or `None` if no entry has that id.
    /// Identity and position are preserved.
    pub fn update_in_place(
        &self,
        id: EntryId,
        patch: &EntryPatch,
    ) -> Result<Option<Entry>, GastoError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| GastoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };

        if let Some(concept) = &patch.concept {
            entry.concept = concept.clone();
        }
        if let Some(amount) = patch.amount {
            entry.amount = amount;
        }
        if let Some(date) = patch.date {
            entry.date = date;
        }

        Ok(Some(entry.clone()))
    }

    /// Remove the entry with the given id
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&self, id: EntryId) -> Result<bool, GastoError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| GastoError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = entries.len();
        entries.retain(|e| e.id != id);
        Ok(entries.len() != before)
    }

    /// Count entries
    pub fn count(&self) -> Result<usize, GastoError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| GastoError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, EntryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("incomes.json");
        let repo = EntryRepository::new(path);
        (temp_dir, repo)
    }

    fn entry(concept: &str, cents: i64, day: u32) -> Entry {
        Entry::new(
            concept,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let e = entry("Subsidio", 100000, 1);
        let id = e.id;
        repo.append(e).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.concept, "Subsidio");
        assert_eq!(retrieved.amount.cents(), 100000);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        // Insert with dates out of order; the repository must not sort
        repo.append(entry("C", 300, 20)).unwrap();
        repo.append(entry("A", 100, 5)).unwrap();
        repo.append(entry("B", 200, 12)).unwrap();

        let all = repo.get_all().unwrap();
        let concepts: Vec<_> = all.iter().map(|e| e.concept.as_str()).collect();
        assert_eq!(concepts, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let e = entry("Luz", 4500, 10);
        let id = e.id;
        repo.append(e).unwrap();
        repo.save().unwrap();

        let repo2 = EntryRepository::new(temp_dir.path().join("incomes.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.cents(), 4500);
    }

    #[test]
    fn test_persisted_as_bare_array() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.append(entry("Gas", 3000, 8)).unwrap();
        repo.save().unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("incomes.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_file_loads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("incomes.json");
        std::fs::write(&path, "][ definitely not json").unwrap();

        let repo = EntryRepository::new(path);
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_update_in_place() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(entry("First", 100, 1)).unwrap();
        let e = entry("Luz", 4500, 10);
        let id = e.id;
        repo.append(e).unwrap();

        let patch = EntryPatch {
            amount: Some(Money::from_cents(5000)),
            ..Default::default()
        };
        let updated = repo.update_in_place(id, &patch).unwrap().unwrap();
        assert_eq!(updated.amount.cents(), 5000);
        assert_eq!(updated.concept, "Luz");
        assert_eq!(updated.id, id);

        // Position preserved
        let all = repo.get_all().unwrap();
        assert_eq!(all[1].id, id);
    }

    #[test]
    fn test_update_missing_id() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let patch = EntryPatch::default();
        assert!(repo
            .update_in_place(EntryId::new(), &patch)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let e = entry("Moto", 12000, 22);
        let id = e.id;
        repo.append(e).unwrap();

        assert!(repo.remove(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
        assert!(!repo.remove(id).unwrap());
    }
}
