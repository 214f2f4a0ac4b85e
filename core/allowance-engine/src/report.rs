//! FILENAME: core/allowance-engine/src/report.rs
//! Report assembly: the header followed by the visible rows, unchanged.

use crate::filter::VisibleRows;
use engine::{Row, Sheet};

/// Worksheet name used for exported reports.
pub const DEFAULT_REPORT_SHEET_NAME: &str = "Payroll Report";

/// Builds the export table for the visible rows of `sheet`.
pub fn assemble(sheet: &Sheet, visible: &VisibleRows) -> Sheet {
    assemble_named(DEFAULT_REPORT_SHEET_NAME, sheet, visible)
}

/// Same as `assemble` with an explicit worksheet name.
pub fn assemble_named(name: &str, sheet: &Sheet, visible: &VisibleRows) -> Sheet {
    let mut rows: Vec<Row> = Vec::with_capacity(visible.len() + 1);
    rows.push(sheet.header().clone());
    rows.extend(visible.rows(sheet).map(|(_, row)| row.clone()));
    Sheet::new(name, rows)
}
