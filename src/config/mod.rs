//! Configuration for GastoZero
//!
//! Currently limited to path management; there are no tunable settings.

pub mod paths;

pub use paths::GastoPaths;
