//! GastoZero - Terminal-based personal income and expense tracker
//!
//! This library provides the core functionality for GastoZero: dated,
//! categorized monetary entries kept in two independent collections
//! (incomes and expenses), month-scoped summaries, and exportable
//! tabular reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the on-disk data files
//! - `error`: Custom error types
//! - `models`: Core data models (entries, money, month keys)
//! - `storage`: JSON file storage layer, one file per collection
//! - `services`: Business logic (entry CRUD, month filtering, aggregation)
//! - `reports`: Renderer-agnostic report model and the report builders
//! - `display`: Terminal rendering of reports and summaries
//! - `export`: Document backends (paginated text, CSV)
//! - `cli`: Command handlers bridging clap and the service layer

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{GastoError, GastoResult};
