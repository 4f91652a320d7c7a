//! ANSI table rendering for reports
//!
//! Renders a [`Report`](crate::reports::Report) to the terminal: bold
//! header, bold sign glyphs inside signed amount cells, and a bold summary
//! row set off by a separator. All padding is computed on the plain text
//! so ANSI escapes never skew the layout.

use crate::reports::{Align, Cell, Column, ColumnWidth, Report, Row, RowEmphasis};
use crate::services::MonthSummary;

use super::{center_align, format_money_colored, left_align, right_align, separator, BOLD, RESET};

/// Padding between columns
const GUTTER: &str = "  ";

/// Resolve the effective width of each column from hints and content
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

fn align(text: &str, column: &Column, width: usize) -> String {
    match column.align {
        Align::Left => left_align(text, width),
        Align::Center => center_align(text, width),
        Align::Right => right_align(text, width),
    }
}

/// Render one cell, applying the sign/number split styling
///
/// The sign and the number stay centered as one unit: the padded plain
/// text is produced first and the escape codes are spliced in afterwards.
fn render_cell(cell: &Cell, column: &Column, width: usize, row_bold: bool) -> String {
    let plain = cell.as_plain_text();
    let padded = align(&plain, column, width);

    if row_bold {
        return format!("{}{}{}", BOLD, padded, RESET);
    }

    match cell {
        Cell::SignedAmount { sign, .. } => {
            // Emphasize only the sign glyph inside the already padded text
            padded.replacen(sign, &format!("{}{}{}", BOLD, sign, RESET), 1)
        }
        _ => padded,
    }
}

fn render_row(row: &Row, columns: &[Column], widths: &[usize]) -> String {
    let bold = row.emphasis == RowEmphasis::Summary;
    let cells: Vec<String> = columns
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (column, &width))| {
            let cell = row.cells.get(i).cloned().unwrap_or(Cell::Empty);
            render_cell(&cell, column, width, bold)
        })
        .collect();
    cells.join(GUTTER)
}

/// Render a report for terminal display
pub fn render_report(report: &Report) -> String {
    let widths = column_widths(report);
    let total_width: usize =
        widths.iter().sum::<usize>() + GUTTER.len() * widths.len().saturating_sub(1);

    let mut output = String::new();

    output.push_str(&format!("{}{}{}\n", BOLD, report.title, RESET));
    output.push_str(&format!("{}\n\n", report.subtitle));

    // Header
    let header: Vec<String> = report
        .columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| align(&column.label, column, width))
        .collect();
    output.push_str(&format!("{}{}{}\n", BOLD, header.join(GUTTER), RESET));
    output.push_str(&separator(total_width));
    output.push('\n');

    for row in &report.rows {
        output.push_str(&render_row(row, &report.columns, &widths));
        output.push('\n');
    }

    output.push_str(&separator(total_width));
    output.push('\n');
    output.push_str(&render_row(&report.summary, &report.columns, &widths));
    output.push('\n');

    output
}

/// Render the month summary panel (totals and balance)
pub fn render_summary(summary: &MonthSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}Resumen de {}{}\n",
        BOLD,
        summary.month.friendly(),
        RESET
    ));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!(
        "Ingresos: {}\n",
        right_align(&summary.total_income.to_string(), 16)
    ));
    output.push_str(&format!(
        "Gastos:   {}\n",
        right_align(&summary.total_expense.to_string(), 16)
    ));
    output.push_str(&separator(40));
    output.push('\n');

    let balance_plain = summary.balance.to_string();
    let pad = 16usize.saturating_sub(balance_plain.chars().count());
    output.push_str(&format!(
        "Balance:  {}{}\n",
        " ".repeat(pad),
        format_money_colored(summary.balance)
    ));

    output
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
    fn test_render_entry_report() {
        let entries = vec![entry("Luz", 4500, "2024-03-10")];
        let report = entry_report(&entries, march(), EntryKind::Expense);
        let rendered = render_report(&report);

        assert!(rendered.contains("GastoZero - Gastos"));
        assert!(rendered.contains("Marzo de 2024"));
        assert!(rendered.contains("Concepto"));
        assert!(rendered.contains("Luz"));
        assert!(rendered.contains("10/03/2024"));
        assert!(rendered.contains("45,00 €"));
        assert!(rendered.contains("Total"));
    }

    #[test]
    fn test_render_balance_report_bold_signs() {
        let incomes = vec![entry("Subsidio", 100000, "2024-03-01")];
        let expenses = vec![entry("Luz", 4500, "2024-03-10")];
        let report = balance_report(&incomes, &expenses, march());
        let rendered = render_report(&report);

        // The sign glyph is emphasized independently of the number
        assert!(rendered.contains(&format!("{}+{}", BOLD, RESET)));
        assert!(rendered.contains(&format!("{}-{}", BOLD, RESET)));
        assert!(rendered.contains("1.000,00 €"));
    }

    #[test]
    fn test_summary_row_is_bold() {
        let report = entry_report(&[], march(), EntryKind::Income);
        let rendered = render_report(&report);

        let summary_line = rendered.lines().last().unwrap();
        assert!(summary_line.contains(BOLD));
        assert!(summary_line.contains("0,00 €"));
    }

    #[test]
    fn test_render_summary_panel() {
        let summary = MonthSummary::compute(
            &[entry("Subsidio", 100000, "2024-03-01")],
            &[entry("Hipoteca", 25050, "2024-03-15")],
            march(),
        );
        let rendered = render_summary(&summary);

        assert!(rendered.contains("Resumen de Marzo de 2024"));
        assert!(rendered.contains("1.000,00 €"));
        assert!(rendered.contains("250,50 €"));
        assert!(rendered.contains("749,50 €"));
    }
}
