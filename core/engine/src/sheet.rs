//! FILENAME: core/engine/src/sheet.rs
//! PURPOSE: Row-oriented worksheet model.
//! CONTEXT: A `Sheet` is an ordered list of `Row`s where row 0 is the header
//! and the remaining rows are data. Rows may be shorter than the header;
//! any index past the end of a row reads as an empty cell.

use crate::cell::CellValue;
use serde::{Deserialize, Serialize};

static EMPTY_CELL: CellValue = CellValue::Empty;

// ============================================================================
// ROW
// ============================================================================

/// An ordered sequence of cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Row { cells }
    }

    /// Builds a row where every cell is text.
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        Row {
            cells: texts.iter().map(|t| CellValue::text(t.as_ref())).collect(),
        }
    }

    /// Returns the cell at `index`, or `Empty` when the row is shorter.
    pub fn get(&self, index: usize) -> &CellValue {
        self.cells.get(index).unwrap_or(&EMPTY_CELL)
    }

    /// Text payload of the cell at `index`, if it is a text cell.
    pub fn text(&self, index: usize) -> Option<&str> {
        self.get(index).as_text()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CellValue> {
        self.cells.iter()
    }

    /// Drops trailing empty cells.
    pub fn trim_trailing_empty(&mut self) {
        while matches!(self.cells.last(), Some(CellValue::Empty)) {
            self.cells.pop();
        }
    }
}

// ============================================================================
// SHEET
// ============================================================================

/// A single worksheet: header row followed by data rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Sheet {
            name: name.into(),
            rows,
        }
    }

    /// The header row. An empty sheet has an empty header.
    pub fn header(&self) -> &Row {
        static EMPTY_ROW: Row = Row { cells: Vec::new() };
        self.rows.first().unwrap_or(&EMPTY_ROW)
    }

    /// Data rows paired with their index in `rows` (always >= 1).
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.rows.iter().enumerate().skip(1)
    }

    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }
}
