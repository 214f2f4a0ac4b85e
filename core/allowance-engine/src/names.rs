//! FILENAME: core/allowance-engine/src/names.rs
//! Employee name catalog.
//!
//! The catalog is the list of options offered by the name filter: a leading
//! `All` option followed by every distinct employee name in order of first
//! appearance.

use crate::header::ColumnIndex;
use engine::{Row, Sheet};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Label shown for the clear-filter option.
pub const ALL_OPTION_LABEL: &str = "All";

// ============================================================================
// FILTER OPTION
// ============================================================================

/// One entry of the name filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterOption {
    /// Clears the selection. Never stored in a `FilterSelection`.
    All,
    /// A single employee.
    Name(String),
}

impl FilterOption {
    pub fn label(&self) -> &str {
        match self {
            FilterOption::All => ALL_OPTION_LABEL,
            FilterOption::Name(name) => name,
        }
    }
}

// ============================================================================
// NAME EXTRACTION
// ============================================================================

/// Trimmed employee name of a row.
///
/// Returns `None` when the name column is missing, the cell is not text, the
/// trimmed value is blank, or the value is the column label itself (a header
/// row repeated inside the data).
pub fn employee_name<'r>(row: &'r Row, columns: &ColumnIndex) -> Option<&'r str> {
    let index = columns.employee_name?;
    let name = row.text(index)?.trim();
    if name.is_empty() || name == columns.name_label() {
        return None;
    }
    Some(name)
}

/// True when the row's name cell repeats the header label.
pub fn is_repeated_header(row: &Row, columns: &ColumnIndex) -> bool {
    columns
        .employee_name
        .and_then(|index| row.text(index))
        .is_some_and(|name| name.trim() == columns.name_label())
}

/// Distinct employee names of all data rows, in order of first appearance,
/// preceded by `FilterOption::All`.
pub fn extract_names(sheet: &Sheet, columns: &ColumnIndex) -> Vec<FilterOption> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut options = vec![FilterOption::All];

    for (_, row) in sheet.data_rows() {
        if let Some(name) = employee_name(row, columns) {
            if seen.insert(name) {
                options.push(FilterOption::Name(name.to_string()));
            }
        }
    }

    options
}

// ============================================================================
// NAME CATALOG
// ============================================================================

/// Filter options derived once per loaded sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCatalog {
    options: Vec<FilterOption>,
}

impl NameCatalog {
    pub fn build(sheet: &Sheet, columns: &ColumnIndex) -> Self {
        NameCatalog {
            options: extract_names(sheet, columns),
        }
    }

    /// All options, `All` first.
    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    /// Employee names only, for rendering one checkbox per name.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.options.iter().filter_map(|option| match option {
            FilterOption::All => None,
            FilterOption::Name(name) => Some(name.as_str()),
        })
    }

    pub fn len(&self) -> usize {
        self.options.len() - usize::from(!self.options.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
