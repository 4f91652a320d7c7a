//! Entry service
//!
//! Provides the CRUD business logic for both collections. Every mutation
//! is validated before it reaches the store; the in-memory collection is
//! mutated first and persisted immediately after, so a rejected write never
//! leaves a partial entry behind. A persistence failure surfaces as a
//! storage error without rolling back the in-memory state.

use crate::error::{GastoError, GastoResult};
use crate::models::{Entry, EntryDraft, EntryId, EntryKind, EntryPatch};
use crate::storage::Storage;

/// Service for entry management
pub struct EntryService<'a> {
    storage: &'a Storage,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new entry to the given collection, minting a fresh id
    pub fn add(&self, kind: EntryKind, draft: EntryDraft) -> GastoResult<Entry> {
        let entry = Entry::new(draft.concept, draft.amount, draft.date);

        entry
            .validate()
            .map_err(|e| GastoError::Validation(e.to_string()))?;

        let repo = self.storage.collection(kind);
        repo.append(entry.clone())?;
        repo.save()?;

        Ok(entry)
    }

    /// Apply field changes to an existing entry, preserving its identity
    pub fn update(&self, kind: EntryKind, id: EntryId, patch: EntryPatch) -> GastoResult<Entry> {
        let repo = self.storage.collection(kind);

        // Validate against the patched entry before mutating the store
        let current = repo
            .get(id)?
            .ok_or_else(|| GastoError::entry_not_found(id.to_string()))?;

        let mut preview = current;
        if let Some(concept) = &patch.concept {
            preview.concept = concept.clone();
        }
        if let Some(amount) = patch.amount {
            preview.amount = amount;
        }
        if let Some(date) = patch.date {
            preview.date = date;
        }
        preview
            .validate()
            .map_err(|e| GastoError::Validation(e.to_string()))?;

        let updated = repo
            .update_in_place(id, &patch)?
            .ok_or_else(|| GastoError::entry_not_found(id.to_string()))?;
        repo.save()?;

        Ok(updated)
    }

    /// Remove an entry from the given collection
    ///
    /// Returns `false` if no entry had that id; the collection is left
    /// untouched and nothing is persisted in that case.
    pub fn remove(&self, kind: EntryKind, id: EntryId) -> GastoResult<bool> {
        let repo = self.storage.collection(kind);

        if repo.remove(id)? {
            repo.save()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Get all entries of a collection in insertion order
    pub fn list(&self, kind: EntryKind) -> GastoResult<Vec<Entry>> {
        self.storage.collection(kind).get_all()
    }

    /// Get a single entry
    pub fn get(&self, kind: EntryKind, id: EntryId) -> GastoResult<Option<Entry>> {
        self.storage.collection(kind).get(id)
    }
}
