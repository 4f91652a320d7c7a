//! Entry model
//!
//! A single income or expense record: concept label, positive amount, and
//! calendar date. Entries live in one of two disjoint collections selected
//! by [`EntryKind`] and never move between them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;
use super::money::Money;

/// Which collection an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// Singular Spanish label ("ingreso"/"gasto")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "ingreso",
            Self::Expense => "gasto",
        }
    }

    /// Plural Spanish label, used in report titles and file names
    pub fn plural_label(&self) -> &'static str {
        match self {
            Self::Income => "Ingresos",
            Self::Expense => "Gastos",
        }
    }

    /// Sign token carried by this kind's rows in the balance report
    pub fn sign(&self) -> &'static str {
        match self {
            Self::Income => "+",
            Self::Expense => "-",
        }
    }
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, stable across edits
    pub id: EntryId,

    /// Category label, never empty
    pub concept: String,

    /// Amount, strictly positive
    pub amount: Money,

    /// Calendar date (day precision)
    pub date: NaiveDate,
}

impl Entry {
    /// Create a new entry with a freshly minted id
    pub fn new(concept: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: EntryId::new(),
            concept: concept.into(),
            amount,
            date,
        }
    }

    /// Check the entry invariants: non-empty concept, positive amount
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.concept.trim().is_empty() {
            return Err(EntryValidationError::EmptyConcept);
        }
        if !self.amount.is_positive() {
            return Err(EntryValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }

    /// Entry date formatted for tables: dd/mm/yyyy
    pub fn formatted_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

/// Field values for a new entry, before an id is minted
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub concept: String,
    pub amount: Money,
    pub date: NaiveDate,
}

/// Partial field changes for an edit; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub concept: Option<String>,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
}

impl EntryPatch {
    /// Check if the patch changes anything
    pub fn is_empty(&self) -> bool {
        self.concept.is_none() && self.amount.is_none() && self.date.is_none()
    }
}

/// Suggested concept labels shown by the entry form
pub fn suggested_concepts(kind: EntryKind) -> &'static [&'static str] {
    match kind {
        EntryKind::Income => &["Ayuntamiento", "Subsidio", "Aportación"],
        EntryKind::Expense => &[
            "Hipoteca",
            "Defunción",
            "Adeslas",
            "Luz",
            "Movistar+",
            "Orange",
            "Uñas",
            "Google",
            "Gas",
            "Moto",
            "Agua",
            "Horno",
            "Gasolina",
            "Tabaco",
            "Pilates",
            "Mercadona",
            "Ropa",
            "Nespresso",
        ],
    }
}

/// Error type for entry validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyConcept,
    NonPositiveAmount(Money),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyConcept => write!(f, "concept must not be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for EntryValidationError {}
