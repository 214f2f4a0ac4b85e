//! FILENAME: core/allowance-engine/src/lib.rs
//! Shift allowance aggregation and filtering.
//!
//! Works on a loaded `engine::Sheet` whose first row is a header. Columns are
//! located by name, never by fixed offset.
//!
//! Layers:
//! - `definition`: Column names, summary labels and shift categories
//! - `header`: Column resolution against the header row
//! - `names`: Employee name catalog used to populate the filter
//! - `aggregate`: Per-category totals and counts
//! - `filter`: Name selection and the visible row subset
//! - `report`: Export table assembly
//! - `dashboard`: State holder tying the above together

pub mod definition;
pub mod header;
pub mod names;
pub mod aggregate;
pub mod filter;
pub mod report;
pub mod dashboard;

pub use definition::*;
pub use header::{resolve_column, ColumnIndex};
pub use names::{employee_name, extract_names, is_repeated_header, FilterOption, NameCatalog, ALL_OPTION_LABEL};
pub use aggregate::{
    aggregate, parse_amount, summary_totals, Aggregation, ShiftCounts, SummaryTotals, Totals,
    UnparsableAmount,
};
pub use filter::{apply_filter, FilterSelection, VisibleRows};
pub use report::{assemble, assemble_named, DEFAULT_REPORT_SHEET_NAME};
pub use dashboard::{Dashboard, DashboardView};
