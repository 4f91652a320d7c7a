//! Document export backends
//!
//! Consumers of the renderer-agnostic report model that produce files:
//! a paginated plain-text document and a CSV dump.

pub mod csv;
pub mod document;

pub use csv::write_report_csv;
pub use document::render_document;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Csv,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
        }
    }
}
