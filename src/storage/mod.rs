//! Storage layer for GastoZero
//!
//! Provides JSON file storage with atomic writes. The two collections are
//! persisted independently, so a corrupt or missing file on one side never
//! affects the other.

pub mod entries;
pub mod file_io;

pub use entries::EntryRepository;
pub use file_io::{read_json_or_default, write_json_atomic};

use crate::config::paths::GastoPaths;
use crate::error::GastoError;
use crate::models::EntryKind;

/// Main storage coordinator owning both entry collections
pub struct Storage {
    paths: GastoPaths,
    pub incomes: EntryRepository,
    pub expenses: EntryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: GastoPaths) -> Result<Self, GastoError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            incomes: EntryRepository::new(paths.incomes_file()),
            expenses: EntryRepository::new(paths.expenses_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &GastoPaths {
        &self.paths
    }

    /// The repository backing the given kind
    pub fn collection(&self, kind: EntryKind) -> &EntryRepository {
        match kind {
            EntryKind::Income => &self.incomes,
            EntryKind::Expense => &self.expenses,
        }
    }

    /// Load both collections from disk
    pub fn load_all(&mut self) -> Result<(), GastoError> {
        self.incomes.load()?;
        self.expenses.load()?;
        Ok(())
    }

    /// Save both collections to disk
    pub fn save_all(&self) -> Result<(), GastoError> {
        self.incomes.save()?;
        self.expenses.save()?;
        Ok(())
    }
}
