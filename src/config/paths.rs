//! Path management for GastoZero
//!
//! Provides XDG-compliant path resolution for the data files.
//!
//! ## Path Resolution Order
//!
//! 1. `GASTOZERO_DATA_DIR` environment variable (if set)
//! 2. Platform config directory via `directories`
//!    (Linux: `~/.config/gastozero`, macOS: `~/Library/Application
//!    Support/gastozero`, Windows: `%APPDATA%\gastozero`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::GastoError;

/// Manages all paths used by GastoZero
#[derive(Debug, Clone)]
pub struct GastoPaths {
    /// Base directory for all GastoZero data
    base_dir: PathBuf,
}

impl GastoPaths {
    /// Create a new GastoPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, GastoError> {
        let base_dir = if let Ok(custom) = std::env::var("GASTOZERO_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "gastozero").ok_or_else(|| {
                GastoError::Config("Could not determine a home directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create GastoPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to incomes.json
    pub fn incomes_file(&self) -> PathBuf {
        self.data_dir().join("incomes.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), GastoError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GastoError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| GastoError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastoPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastoPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.incomes_file(),
            temp_dir.path().join("data").join("incomes.json")
        );
        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join("data").join("expenses.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastoPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }
}
