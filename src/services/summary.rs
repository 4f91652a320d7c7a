//! Month filtering and aggregation
//!
//! Pure functions over entry slices: no storage access, no mutation of the
//! input. Sums accumulate in exact cents; rounding only ever happens at
//! display time through `Money`'s formatting.

use crate::models::{Entry, Money, MonthKey};
use crate::storage::Storage;

/// Select the entries whose date falls within the given calendar month
///
/// Day is ignored; input order is preserved.
pub fn filter_by_month(entries: &[Entry], month: MonthKey) -> Vec<Entry> {
    entries
        .iter()
        .filter(|e| month.contains(e.date))
        .cloned()
        .collect()
}

/// Sum the amounts of a sequence of entries; an empty sequence sums to zero
pub fn total(entries: &[Entry]) -> Money {
    entries.iter().map(|e| e.amount).sum()
}

/// Month-scoped totals for both collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSummary {
    pub month: MonthKey,
    pub total_income: Money,
    pub total_expense: Money,
    /// `total_income - total_expense`; may be negative
    pub balance: Money,
}

impl MonthSummary {
    /// Compute the summary for one month from both collections
    pub fn compute(incomes: &[Entry], expenses: &[Entry], month: MonthKey) -> Self {
        let total_income = total(&filter_by_month(incomes, month));
        let total_expense = total(&filter_by_month(expenses, month));

        Self {
            month,
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    /// Compute the summary for one month straight from storage
    pub fn generate(storage: &Storage, month: MonthKey) -> crate::GastoResult<Self> {
        let incomes = storage.incomes.get_all()?;
        let expenses = storage.expenses.get_all()?;
        Ok(Self::compute(&incomes, &expenses, month))
    }
}
