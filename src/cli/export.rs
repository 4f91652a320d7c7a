//! Export CLI commands
//!
//! Builds a report for one month and writes it to disk as a paginated
//! text document or as CSV.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{GastoError, GastoResult};
use crate::export::{render_document, write_report_csv, ExportFormat};
use crate::models::{EntryKind, MonthKey};
use crate::reports::{balance_report, entry_report, Report};
use crate::storage::Storage;

use super::month_or_current;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export the month's incomes
    Incomes {
        /// Month to export (YYYY-MM, defaults to current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Output file (defaults to gastozero_<report>_<month>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: text or csv
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Export the month's expenses
    Expenses {
        /// Month to export (YYYY-MM, defaults to current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Output file (defaults to gastozero_<report>_<month>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: text or csv
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Export the combined balance for a month
    Balance {
        /// Month to export (YYYY-MM, defaults to current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Output file (defaults to gastozero_<report>_<month>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: text or csv
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn parse_format(text: &str) -> GastoResult<ExportFormat> {
    match text {
        "text" | "txt" => Ok(ExportFormat::Text),
        "csv" => Ok(ExportFormat::Csv),
        other => Err(GastoError::Validation(format!(
            "Unknown format '{}' (expected 'text' or 'csv')",
            other
        ))),
    }
}

fn default_filename(label: &str, month: MonthKey, format: ExportFormat) -> PathBuf {
    PathBuf::from(format!(
        "gastozero_{}_{}.{}",
        label,
        month,
        format.extension()
    ))
}

fn write_report(report: &Report, format: ExportFormat, path: &PathBuf) -> GastoResult<()> {
    let file = File::create(path)
        .map_err(|e| GastoError::Export(format!("Cannot create {}: {}", path.display(), e)))?;

    match format {
        ExportFormat::Text => {
            let mut file = file;
            file.write_all(render_document(report).as_bytes())
                .map_err(|e| GastoError::Export(e.to_string()))?;
        }
        ExportFormat::Csv => write_report_csv(report, file)?,
    }

    Ok(())
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> GastoResult<()> {
    let (label, kind, month, output, format) = match cmd {
        ExportCommands::Incomes {
            month,
            output,
            format,
        } => ("ingresos", Some(EntryKind::Income), month, output, format),
        ExportCommands::Expenses {
            month,
            output,
            format,
        } => ("gastos", Some(EntryKind::Expense), month, output, format),
        ExportCommands::Balance {
            month,
            output,
            format,
        } => ("balance", None, month, output, format),
    };

    let month = month_or_current(month.as_deref())?;
    let format = parse_format(&format)?;

    let report = match kind {
        Some(kind) => entry_report(&storage.collection(kind).get_all()?, month, kind),
        None => {
            let incomes = storage.incomes.get_all()?;
            let expenses = storage.expenses.get_all()?;
            balance_report(&incomes, &expenses, month)
        }
    };

    let path = output.unwrap_or_else(|| default_filename(label, month, format));
    write_report(&report, format, &path)?;

    println!("Exportado {} de {} a {}", label, month.friendly(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("text").unwrap(), ExportFormat::Text);
        assert_eq!(parse_format("csv").unwrap(), ExportFormat::Csv);
        assert!(parse_format("pdf").is_err());
    }

    #[test]
    fn test_default_filename() {
        let month = MonthKey::new(2024, 3).unwrap();
        assert_eq!(
            default_filename("balance", month, ExportFormat::Csv),
            PathBuf::from("gastozero_balance_2024-03.csv")
        );
        assert_eq!(
            default_filename("ingresos", month, ExportFormat::Text),
            PathBuf::from("gastozero_ingresos_2024-03.txt")
        );
    }
}
