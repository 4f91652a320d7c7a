//! Paginated plain-text document backend
//!
//! Lays a report out as a printable text document: a header with title and
//! subtitle on every page, the table split across pages at a fixed row
//! count, and a page footer. Plain text carries no styling, so the summary
//! row is set off by a rule instead of a bold face.

use crate::reports::{Align, Cell, Column, ColumnWidth, Report, Row};

/// Data rows per page before a break is inserted
const ROWS_PER_PAGE: usize = 25;

/// Padding between columns
const GUTTER: &str = "  ";

fn pad(text: &str, align: Align, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(width - len)),
        Align::Right => format!("{}{}", " ".repeat(width - len), text),
        Align::Center => {
            let left = (width - len) / 2;
            format!(
                "{}{}{}",
                " ".repeat(left),
                text,
                " ".repeat(width - len - left)
            )
        }
    }
}

/// Resolve column widths from hints and the widest content
fn column_widths(report: &Report) -> Vec<usize> {
    report
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let content_max = report
                .all_rows()
                .filter_map(|row| row.cells.get(i))
                .map(|cell| cell.as_plain_text().chars().count())
                .max()
                .unwrap_or(0);
            let min = column.label.chars().count().max(content_max);
            match column.width {
                ColumnWidth::Auto => min,
                ColumnWidth::Fixed(w) => w.max(min),
            }
        })
        .collect()
}

fn format_row(row: &Row, columns: &[Column], widths: &[usize]) -> String {
    let cells: Vec<String> = columns
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (column, &width))| {
            let cell = row.cells.get(i).cloned().unwrap_or(Cell::Empty);
            pad(&cell.as_plain_text(), column.align, width)
        })
        .collect();
    cells.join(GUTTER).trim_end().to_string()
}

fn page_header(report: &Report, columns_line: &str, rule: &str) -> String {
    format!(
        "{}\n{}\n\n{}\n{}\n",
        report.title, report.subtitle, columns_line, rule
    )
}

fn page_footer(page: usize, total: usize, width: usize) -> String {
    let text = format!("Página {} de {}", page, total);
    pad(&text, Align::Right, width)
}

/// Render a report as a paginated plain-text document
pub fn render_document(report: &Report) -> String {
    let widths = column_widths(report);
    let total_width: usize =
        widths.iter().sum::<usize>() + GUTTER.len() * widths.len().saturating_sub(1);
    let rule = "─".repeat(total_width);

    let columns_line: String = report
        .columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| pad(&column.label, column.align, width))
        .collect::<Vec<_>>()
        .join(GUTTER)
        .trim_end()
        .to_string();

    let pages: Vec<&[Row]> = if report.rows.is_empty() {
        vec![&report.rows[..]]
    } else {
        report.rows.chunks(ROWS_PER_PAGE).collect()
    };
    let total_pages = pages.len();

    let mut output = String::new();
    for (index, page_rows) in pages.iter().enumerate() {
        let page_number = index + 1;
        let last_page = page_number == total_pages;

        if index > 0 {
            output.push('\x0c');
        }
        output.push_str(&page_header(report, &columns_line, &rule));

        for row in *page_rows {
            output.push_str(&format_row(row, &report.columns, &widths));
            output.push('\n');
        }

        // The summary row only appears once, after the last data row
        if last_page {
            output.push_str(&rule);
            output.push('\n');
            output.push_str(&format_row(&report.summary, &report.columns, &widths));
            output.push('\n');
        }

        output.push('\n');
        output.push_str(&page_footer(page_number, total_pages, total_width));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, EntryKind, Money, MonthKey};
    use crate::reports::{balance_report, entry_report};
    use chrono::NaiveDate;

    fn entry(concept: &str, cents: i64, day: u32) -> Entry {
        Entry::new(
            concept,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        )
    }

    fn march() -> MonthKey {
        MonthKey::new(2024, 3).unwrap()
    }

    #[test]
    fn test_single_page_document() {
        let entries = vec![entry("Luz", 4500, 10)];
        let report = entry_report(&entries, march(), EntryKind::Expense);
        let doc = render_document(&report);

        assert!(doc.contains("GastoZero - Gastos"));
        assert!(doc.contains("Marzo de 2024"));
        assert!(doc.contains("Luz"));
        assert!(doc.contains("10/03/2024"));
        assert!(doc.contains("Total"));
        assert!(doc.contains("Página 1 de 1"));
        assert!(!doc.contains('\x0c'));
    }

    #[test]
    fn test_long_report_breaks_into_pages() {
        let entries: Vec<Entry> = (1..=28).map(|day| entry("Café", 150, day)).collect();
        let report = entry_report(&entries, march(), EntryKind::Expense);
        let doc = render_document(&report);

        assert_eq!(doc.matches('\x0c').count(), 1);
        assert!(doc.contains("Página 1 de 2"));
        assert!(doc.contains("Página 2 de 2"));
        // Header repeats on every page
        assert_eq!(doc.matches("GastoZero - Gastos").count(), 2);
        // The total row appears only once, on the last page
        assert_eq!(doc.matches("Total").count(), 1);
        let after_break = doc.split('\x0c').nth(1).unwrap();
        assert!(after_break.contains("Total"));
    }

    #[test]
    fn test_empty_report_still_renders_summary() {
        let report = entry_report(&[], march(), EntryKind::Income);
        let doc = render_document(&report);

        assert!(doc.contains("Total"));
        assert!(doc.contains("0,00 €"));
        assert!(doc.contains("Página 1 de 1"));
    }

    #[test]
    fn test_balance_document_keeps_signs() {
        let incomes = vec![entry("Subsidio", 100000, 1)];
        let expenses = vec![entry("Luz", 4500, 10)];
        let report = balance_report(&incomes, &expenses, march());
        let doc = render_document(&report);

        assert!(doc.contains("+ 1.000,00 €"));
        assert!(doc.contains("- 45,00 €"));
        assert!(doc.contains("+ 955,00 €"));
    }
}
