//! Core data models for GastoZero
//!
//! This module contains the data structures that represent the tracking
//! domain: entries, monetary amounts, and calendar month keys.

pub mod entry;
pub mod ids;
pub mod money;
pub mod month;

pub use entry::{suggested_concepts, Entry, EntryDraft, EntryKind, EntryPatch};
pub use ids::EntryId;
pub use money::Money;
pub use month::MonthKey;
