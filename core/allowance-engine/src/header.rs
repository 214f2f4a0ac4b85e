//! FILENAME: core/allowance-engine/src/header.rs
//! Column resolution against the header row.
//!
//! A column that cannot be found resolves to `None`. There is no integer
//! sentinel, so a missing column can never alias a real cell.

use crate::definition::ColumnNames;
use engine::{CellValue, Row};

/// Returns the position of the first header cell equal to `name`.
pub fn resolve_column(header: &Row, name: &str) -> Option<usize> {
    header
        .iter()
        .position(|cell| matches!(cell, CellValue::Text(s) if s == name))
}

/// Resolved positions of the columns the engine reads.
/// Computed once per loaded sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    pub employee_name: Option<usize>,
    pub allowance_type: Option<usize>,
    pub amount: Option<usize>,

    /// The labels these positions were resolved from.
    pub names: ColumnNames,
}

impl ColumnIndex {
    pub fn resolve(header: &Row, names: &ColumnNames) -> Self {
        let index = ColumnIndex {
            employee_name: resolve_column(header, &names.employee_name),
            allowance_type: resolve_column(header, &names.allowance_type),
            amount: resolve_column(header, &names.amount),
            names: names.clone(),
        };

        log::debug!(
            "resolved columns name={:?} type={:?} amount={:?}",
            index.employee_name,
            index.allowance_type,
            index.amount
        );

        index
    }

    /// Label of the name column, used to recognise duplicated header rows.
    pub fn name_label(&self) -> &str {
        &self.names.employee_name
    }

    /// Names of the aggregation columns that were not found.
    pub fn missing_aggregation_columns(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.allowance_type.is_none() {
            missing.push(self.names.allowance_type.clone());
        }
        if self.amount.is_none() {
            missing.push(self.names.amount.clone());
        }
        missing
    }
}
