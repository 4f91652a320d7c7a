//! Renderer-agnostic report model and report builders
//!
//! A [`Report`] describes the content and layout of an exportable table —
//! title, subtitle, column hints, body rows, and a distinguished summary
//! row — without committing to any output format. Rendering backends
//! (`display::table`, `export::document`, `export::csv`) consume this
//! description.
//!
//! Amount cells in the balance report carry the sign token and the
//! formatted number as two separate substrings so a backend can style them
//! independently (emphasized sign, normal-weight number) while centering
//! them as one visual unit.

pub mod balance;
pub mod entries;

pub use balance::balance_report;
pub use entries::entry_report;

/// Horizontal alignment hint for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Column width hint for rendering backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Size to content
    Auto,
    /// Fixed number of character cells
    Fixed(usize),
}

/// One table column: header label plus layout hints
#[derive(Debug, Clone)]
pub struct Column {
    pub label: String,
    pub align: Align,
    pub width: ColumnWidth,
}

impl Column {
    pub fn new(label: impl Into<String>, align: Align, width: ColumnWidth) -> Self {
        Self {
            label: label.into(),
            align,
            width,
        }
    }
}

/// A single cell of a report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Plain text content
    Text(String),
    /// An amount with an explicit sign token, kept as two substrings so the
    /// backend can style the sign independently of the number
    SignedAmount { sign: &'static str, amount: String },
    /// No content
    Empty,
}

impl Cell {
    /// The cell content flattened to plain text, signs joined with a space
    pub fn as_plain_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::SignedAmount { sign, amount } => format!("{} {}", sign, amount),
            Cell::Empty => String::new(),
        }
    }
}

/// Visual emphasis of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEmphasis {
    /// Regular data row
    Normal,
    /// Bold, shaded summary row (the Total / balance line)
    Summary,
}

/// One report row
#[derive(Debug, Clone)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub emphasis: RowEmphasis,
}

impl Row {
    /// A regular data row
    pub fn data(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            emphasis: RowEmphasis::Normal,
        }
    }

    /// A bold, shaded summary row
    pub fn summary(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            emphasis: RowEmphasis::Summary,
        }
    }
}

/// A structured, renderer-agnostic description of tabular report content
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub subtitle: String,
    pub columns: Vec<Column>,
    /// Data rows, in the order the builder decided
    pub rows: Vec<Row>,
    /// The trailing Total / balance row
    pub summary: Row,
}

impl Report {
    /// All rows in render order: data rows followed by the summary row
    pub fn all_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().chain(std::iter::once(&self.summary))
    }

    /// Total row count including the summary row
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_plain_text() {
        assert_eq!(Cell::Text("Luz".into()).as_plain_text(), "Luz");
        assert_eq!(
            Cell::SignedAmount {
                sign: "+",
                amount: "1.234,50 €".into()
            }
            .as_plain_text(),
            "+ 1.234,50 €"
        );
        assert_eq!(Cell::Empty.as_plain_text(), "");
    }

    #[test]
    fn test_all_rows_ends_with_summary() {
        let report = Report {
            title: "t".into(),
            subtitle: "s".into(),
            columns: vec![],
            rows: vec![Row::data(vec![Cell::Text("a".into())])],
            summary: Row::summary(vec![Cell::Text("Total".into())]),
        };

        let rows: Vec<_> = report.all_rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].emphasis, RowEmphasis::Summary);
        assert_eq!(report.row_count(), 2);
    }
}
