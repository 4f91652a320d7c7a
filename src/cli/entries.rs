//! Entry CLI commands
//!
//! Implements the shared add/edit/remove/list commands for both entry
//! collections. The same subcommand enum is mounted under `income` and
//! `expense`; the kind is passed down by the dispatcher.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::render_report;
use crate::error::{GastoError, GastoResult};
use crate::models::{EntryDraft, EntryId, EntryKind, EntryPatch, Money};
use crate::reports::entry_report;
use crate::services::{filter_by_month, EntryService};
use crate::storage::Storage;

use super::month_or_current;

/// Entry subcommands, shared by `income` and `expense`
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Record a new entry
    Add {
        /// Concept (e.g., "Mercadona")
        concept: String,

        /// Amount in euros (e.g., "45,50" or "45.50")
        amount: String,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Edit an existing entry
    Edit {
        /// Entry id (or a unique prefix of it)
        id: String,

        /// New concept
        #[arg(short, long)]
        concept: Option<String>,

        /// New amount in euros
        #[arg(short, long)]
        amount: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Remove an entry
    Remove {
        /// Entry id (or a unique prefix of it)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List entries for a month
    List {
        /// Month to list (YYYY-MM, defaults to current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Show entry ids alongside the table
        #[arg(long)]
        ids: bool,
    },
}

fn parse_amount(text: &str) -> GastoResult<Money> {
    Money::parse(text).map_err(|e| GastoError::Validation(format!("Invalid amount: {}", e)))
}

fn parse_date(text: Option<&str>) -> GastoResult<NaiveDate> {
    match text {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
            GastoError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", text))
        }),
        None => Ok(Local::now().date_naive()),
    }
}

/// Resolve a full id or a unique prefix against one collection
fn resolve_id(storage: &Storage, kind: EntryKind, input: &str) -> GastoResult<EntryId> {
    if let Ok(id) = EntryId::from_str(input) {
        return Ok(id);
    }

    let matches: Vec<EntryId> = storage
        .collection(kind)
        .get_all()?
        .into_iter()
        .map(|entry| entry.id)
        .filter(|id| id.to_string().starts_with(input))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(GastoError::entry_not_found(input)),
        _ => Err(GastoError::Validation(format!(
            "Id prefix '{}' is ambiguous ({} matches)",
            input,
            matches.len()
        ))),
    }
}

fn confirm(prompt: &str) -> GastoResult<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "s" || answer == "si" || answer == "sí")
}

/// Handle an entry command against one collection
pub fn handle_entry_command(
    storage: &Storage,
    kind: EntryKind,
    cmd: EntryCommands,
) -> GastoResult<()> {
    let service = EntryService::new(storage);

    match cmd {
        EntryCommands::Add {
            concept,
            amount,
            date,
        } => {
            let draft = EntryDraft {
                concept,
                amount: parse_amount(&amount)?,
                date: parse_date(date.as_deref())?,
            };

            let entry = service.add(kind, draft)?;
            println!(
                "Añadido {} '{}' de {} con fecha {} (id {})",
                kind.label(),
                entry.concept,
                entry.amount,
                entry.formatted_date(),
                entry.id.short()
            );
        }

        EntryCommands::Edit {
            id,
            concept,
            amount,
            date,
        } => {
            let id = resolve_id(storage, kind, &id)?;
            let patch = EntryPatch {
                concept,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                date: date.as_deref().map(|d| parse_date(Some(d))).transpose()?,
            };

            if patch.is_empty() {
                println!("Nada que cambiar: indica --concept, --amount o --date.");
                return Ok(());
            }

            let entry = service.update(kind, id, patch)?;
            println!(
                "Actualizado {} '{}': {} con fecha {}",
                kind.label(),
                entry.concept,
                entry.amount,
                entry.formatted_date()
            );
        }

        EntryCommands::Remove { id, yes } => {
            let id = resolve_id(storage, kind, &id)?;

            if !yes {
                let concept = service
                    .get(kind, id)?
                    .map(|entry| entry.concept)
                    .unwrap_or_else(|| id.short());
                if !confirm(&format!("¿Eliminar {} '{}'?", kind.label(), concept))? {
                    println!("Cancelado.");
                    return Ok(());
                }
            }

            if service.remove(kind, id)? {
                println!("Eliminado {} {}", kind.label(), id.short());
            } else {
                println!("No existe ningún {} con id {}", kind.label(), id.short());
            }
        }

        EntryCommands::List { month, ids } => {
            let month = month_or_current(month.as_deref())?;
            let all = service.list(kind)?;
            let entries = filter_by_month(&all, month);

            if entries.is_empty() {
                println!(
                    "No hay {} en {}.",
                    kind.plural_label().to_lowercase(),
                    month.friendly()
                );
                return Ok(());
            }

            let report = entry_report(&entries, month, kind);
            print!("{}", render_report(&report));

            if ids {
                println!();
                for entry in &entries {
                    println!("{}  {}", entry.id.short(), entry.concept);
                }
            }
        }
    }

    Ok(())
}
