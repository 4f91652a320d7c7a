//! CSV export backend
//!
//! Flattens a report to CSV records. CSV has no styling channel, so signed
//! amount cells are joined to their plain `"+ 1.234,50 €"` form and the
//! summary row is written as a regular final record.

use std::io::Write;

use crate::error::{GastoError, GastoResult};
use crate::reports::Report;

/// Write a report as CSV
pub fn write_report_csv<W: Write>(report: &Report, writer: W) -> GastoResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let labels: Vec<&str> = report.columns.iter().map(|c| c.label.as_str()).collect();
    csv_writer
        .write_record(&labels)
        .map_err(|e| GastoError::Export(e.to_string()))?;

    for row in report.all_rows() {
        let record: Vec<String> = row.cells.iter().map(|c| c.as_plain_text()).collect();
        csv_writer
            .write_record(&record)
            .map_err(|e| GastoError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| GastoError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, EntryKind, Money, MonthKey};
    use crate::reports::{balance_report, entry_report};
    use chrono::NaiveDate;

    fn entry(concept: &str, cents: i64, date: &str) -> Entry {
        Entry::new(
            concept,
            Money::from_cents(cents),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
    }

    fn march() -> MonthKey {
        MonthKey::new(2024, 3).unwrap()
    }

    #[test]
    fn test_entry_report_csv() {
        let entries = vec![entry("Luz", 4500, "2024-03-10")];
        let report = entry_report(&entries, march(), EntryKind::Expense);

        let mut buffer = Vec::new();
        write_report_csv(&report, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3); // header + 1 data row + total row
        assert_eq!(lines[0], "Concepto,Fecha,Cantidad");
        assert!(lines[1].contains("Luz"));
        assert!(lines[1].contains("10/03/2024"));
        assert!(lines[2].starts_with("Total"));
    }

    #[test]
    fn test_balance_report_csv_signs_joined() {
        let incomes = vec![entry("Subsidio", 100000, "2024-03-01")];
        let expenses = vec![entry("Luz", 4500, "2024-03-10")];
        let report = balance_report(&incomes, &expenses, march());

        let mut buffer = Vec::new();
        write_report_csv(&report, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("+ 1.000,00 €"));
        assert!(output.contains("- 45,00 €"));
        assert!(output.contains("+ 955,00 €"));
    }
}
