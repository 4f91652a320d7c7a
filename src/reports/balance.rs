//! Balance report builder
//!
//! Merges the month's incomes and expenses into one stream ordered by date
//! and lays out each row with an explicit sign token. The trailing balance
//! row shows the signed month balance and is rendered bold/shaded by the
//! backends.

use crate::models::{Entry, EntryKind, Money, MonthKey};
use crate::services::summary::{filter_by_month, MonthSummary};

use super::{Align, Cell, Column, ColumnWidth, Report, Row};

/// An entry tagged with the collection it came from
#[derive(Debug, Clone)]
struct TaggedEntry {
    kind: EntryKind,
    entry: Entry,
}

/// Merge month-filtered incomes and expenses into one date-ordered stream
///
/// Incomes are concatenated before expenses and the sort is stable, so for
/// equal dates the relative order is: incomes first (in insertion order),
/// then expenses (in insertion order). This tie-break is deliberate and
/// relied upon by the report tests.
fn merge_by_date(incomes: &[Entry], expenses: &[Entry], month: MonthKey) -> Vec<TaggedEntry> {
    let mut merged: Vec<TaggedEntry> = filter_by_month(incomes, month)
        .into_iter()
        .map(|entry| TaggedEntry {
            kind: EntryKind::Income,
            entry,
        })
        .chain(
            filter_by_month(expenses, month)
                .into_iter()
                .map(|entry| TaggedEntry {
                    kind: EntryKind::Expense,
                    entry,
                }),
        )
        .collect();

    merged.sort_by_key(|t| t.entry.date);
    merged
}

/// Sign token for a balance value: `+` covers the zero balance as well
fn balance_sign(balance: Money) -> &'static str {
    if balance.is_negative() {
        "-"
    } else {
        "+"
    }
}

/// Build the combined balance report for one month
pub fn balance_report(incomes: &[Entry], expenses: &[Entry], month: MonthKey) -> Report {
    let merged = merge_by_date(incomes, expenses, month);
    let summary = MonthSummary::compute(incomes, expenses, month);

    let rows = merged
        .iter()
        .map(|tagged| {
            Row::data(vec![
                Cell::Text(tagged.entry.concept.clone()),
                Cell::Text(tagged.entry.formatted_date()),
                Cell::SignedAmount {
                    sign: tagged.kind.sign(),
                    amount: tagged.entry.amount.to_string(),
                },
            ])
        })
        .collect();

    // The balance row is bold as a whole, so its amount is pre-joined text
    // rather than a split sign/number pair.
    let balance_cell = Cell::Text(format!(
        "{} {}",
        balance_sign(summary.balance),
        summary.balance.abs()
    ));

    Report {
        title: "GastoZero - Balance".to_string(),
        subtitle: month.friendly(),
        columns: vec![
            Column::new("Concepto", Align::Center, ColumnWidth::Auto),
            Column::new("Fecha", Align::Center, ColumnWidth::Fixed(12)),
            Column::new("Cantidad", Align::Center, ColumnWidth::Fixed(16)),
        ],
        rows,
        summary: Row::summary(vec![Cell::Empty, Cell::Empty, balance_cell]),
    }
}
