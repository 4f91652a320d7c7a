//! Business logic layer
//!
//! Services sit between the CLI and the storage layer: they validate
//! mutations before anything is persisted, and compute the pure
//! month-scoped views (filter, totals, summary).

pub mod entries;
pub mod summary;

pub use entries::EntryService;
pub use summary::{filter_by_month, total, MonthSummary};
