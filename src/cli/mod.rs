//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod entries;
pub mod export;
pub mod summary;

pub use entries::{handle_entry_command, EntryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use summary::handle_summary_command;

use crate::error::{GastoError, GastoResult};
use crate::models::MonthKey;

/// Parse a `YYYY-MM` month argument, defaulting to the current month
pub fn month_or_current(month: Option<&str>) -> GastoResult<MonthKey> {
    match month {
        Some(text) => MonthKey::parse(text)
            .map_err(|e| GastoError::Validation(format!("Invalid month '{}': {}", text, e))),
        None => Ok(MonthKey::current()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_or_current_parses() {
        let month = month_or_current(Some("2024-03")).unwrap();
        assert_eq!(month, MonthKey::new(2024, 3).unwrap());
    }

    #[test]
    fn test_month_or_current_rejects_garbage() {
        assert!(month_or_current(Some("marzo")).is_err());
        assert!(month_or_current(Some("2024-13")).is_err());
    }

    #[test]
    fn test_month_or_current_defaults() {
        assert_eq!(month_or_current(None).unwrap(), MonthKey::current());
    }
}
