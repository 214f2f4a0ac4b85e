//! FILENAME: core/allowance-engine/src/filter.rs
//! Name filter - which employees are selected and which rows that leaves visible.

use crate::header::ColumnIndex;
use crate::names::{employee_name, is_repeated_header, FilterOption, ALL_OPTION_LABEL};
use engine::{Row, Sheet};
use rustc_hash::FxHashSet;

// ============================================================================
// FILTER SELECTION
// ============================================================================

/// The set of selected employee names. Empty means no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    names: FxHashSet<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterSelection {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the selection after the user picks `option`.
    ///
    /// `All` clears the selection. A name is added when absent and removed
    /// when present, so toggling twice restores the original selection.
    pub fn toggle(&self, option: &FilterOption) -> Self {
        match option {
            FilterOption::All => Self::new(),
            FilterOption::Name(name) => {
                let mut names = self.names.clone();
                if !names.remove(name) {
                    names.insert(name.clone());
                }
                FilterSelection { names }
            }
        }
    }

    /// Same as `toggle` for a plain label; the label `"All"` clears.
    pub fn toggle_name(&self, name: &str) -> Self {
        if name == ALL_OPTION_LABEL {
            self.toggle(&FilterOption::All)
        } else {
            self.toggle(&FilterOption::Name(name.to_string()))
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Selected names in lexical order.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

// ============================================================================
// VISIBLE ROWS
// ============================================================================

/// Data rows currently shown, aggregated and exported.
/// Stored as indices into `Sheet::rows`, in sheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleRows {
    indices: Vec<usize>,
}

impl VisibleRows {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The visible rows of `sheet`, paired with their sheet index.
    pub fn rows<'s>(&'s self, sheet: &'s Sheet) -> impl Iterator<Item = (usize, &'s Row)> + 's {
        self.indices
            .iter()
            .filter_map(move |&index| sheet.row(index).map(|row| (index, row)))
    }
}

/// Computes the visible rows for `selection`.
///
/// The header row is never included, nor is any data row repeating the name
/// column label. With an empty selection every other data row is visible;
/// otherwise only rows whose trimmed name is selected.
pub fn apply_filter(sheet: &Sheet, columns: &ColumnIndex, selection: &FilterSelection) -> VisibleRows {
    let indices = sheet
        .data_rows()
        .filter(|(_, row)| !is_repeated_header(row, columns))
        .filter(|(_, row)| {
            selection.is_empty()
                || employee_name(row, columns).is_some_and(|name| selection.contains(name))
        })
        .map(|(index, _)| index)
        .collect();

    VisibleRows { indices }
}
