//! Single-type report builder
//!
//! Lays out one collection (incomes or expenses) for a month: one row per
//! entry in insertion order, closed by a bold "Total" row. An empty month
//! still yields the Total row, reading `0,00 €`.

use crate::models::{Entry, EntryKind, MonthKey};
use crate::services::summary::{filter_by_month, total};

use super::{Align, Cell, Column, ColumnWidth, Report, Row};

/// Build the report for one collection scoped to one month
pub fn entry_report(entries: &[Entry], month: MonthKey, kind: EntryKind) -> Report {
    let filtered = filter_by_month(entries, month);

    let rows = filtered
        .iter()
        .map(|entry| {
            Row::data(vec![
                Cell::Text(entry.concept.clone()),
                Cell::Text(entry.formatted_date()),
                Cell::Text(entry.amount.to_string()),
            ])
        })
        .collect();

    let summary = Row::summary(vec![
        Cell::Text("Total".to_string()),
        Cell::Empty,
        Cell::Text(total(&filtered).to_string()),
    ]);

    Report {
        title: format!("GastoZero - {}", kind.plural_label()),
        subtitle: month.friendly(),
        columns: vec![
            Column::new("Concepto", Align::Center, ColumnWidth::Auto),
            Column::new("Fecha", Align::Center, ColumnWidth::Fixed(12)),
            Column::new("Cantidad", Align::Center, ColumnWidth::Fixed(14)),
        ],
        rows,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::RowEmphasis;
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
    fn test_row_count_is_filtered_plus_total() {
        let entries = vec![
            entry("Luz", 4500, "2024-03-10"),
            entry("Gas", 3000, "2024-03-12"),
            entry("Abril", 9999, "2024-04-01"),
        ];

        let report = entry_report(&entries, march(), EntryKind::Expense);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.row_count(), 3);
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let entries = vec![
            entry("Late", 100, "2024-03-28"),
            entry("Early", 200, "2024-03-02"),
        ];

        let report = entry_report(&entries, march(), EntryKind::Expense);
        assert_eq!(report.rows[0].cells[0], Cell::Text("Late".into()));
        assert_eq!(report.rows[1].cells[0], Cell::Text("Early".into()));
    }

    #[test]
    fn test_row_layout() {
        let entries = vec![entry("Hipoteca", 123450, "2024-03-05")];

        let report = entry_report(&entries, march(), EntryKind::Expense);
        let cells = &report.rows[0].cells;
        assert_eq!(cells[0], Cell::Text("Hipoteca".into()));
        assert_eq!(cells[1], Cell::Text("05/03/2024".into()));
        assert_eq!(cells[2], Cell::Text("1.234,50 €".into()));
    }

    #[test]
    fn test_total_row() {
        let entries = vec![
            entry("Luz", 4500, "2024-03-10"),
            entry("Gas", 3000, "2024-03-12"),
        ];

        let report = entry_report(&entries, march(), EntryKind::Expense);
        assert_eq!(report.summary.emphasis, RowEmphasis::Summary);
        assert_eq!(report.summary.cells[0], Cell::Text("Total".into()));
        assert_eq!(report.summary.cells[2], Cell::Text("75,00 €".into()));
    }

    #[test]
    fn test_empty_month_still_has_total_row() {
        let report = entry_report(&[], march(), EntryKind::Income);
        assert_eq!(report.rows.len(), 0);
        assert_eq!(report.row_count(), 1);
        assert_eq!(report.summary.cells[2], Cell::Text("0,00 €".into()));
    }

    #[test]
    fn test_title_and_subtitle() {
        let report = entry_report(&[], march(), EntryKind::Income);
        assert_eq!(report.title, "GastoZero - Ingresos");
        assert_eq!(report.subtitle, "Marzo de 2024");
    }
}
