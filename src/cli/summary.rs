//! Summary CLI command
//!
//! Prints the month panel with total income, total expense and the balance.

use crate::display::render_summary;
use crate::error::GastoResult;
use crate::services::MonthSummary;
use crate::storage::Storage;

use super::month_or_current;

/// Handle the `summary` command
pub fn handle_summary_command(storage: &Storage, month: Option<&str>) -> GastoResult<()> {
    let month = month_or_current(month)?;
    let summary = MonthSummary::generate(storage, month)?;
    print!("{}", render_summary(&summary));
    Ok(())
}
