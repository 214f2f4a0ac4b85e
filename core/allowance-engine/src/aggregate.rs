//! FILENAME: core/allowance-engine/src/aggregate.rs
//! Aggregation - turns rows into per-shift totals.
//!
//! Two independent sources of totals exist:
//! 1. `aggregate` classifies every row by its allowance type and sums amounts.
//! 2. `summary_totals` reads precomputed "Total amount for M/A/N" rows.
//!
//! They are never merged. Callers decide which one to show.
//!
//! In both, the grand total is the sum of the three category totals. Amounts
//! that do not parse are reported alongside the totals instead of being
//! counted as zero.

use crate::definition::{ShiftCategory, SummaryLabels};
use crate::header::ColumnIndex;
use engine::{CellValue, Row};
use serde::{Deserialize, Serialize};

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Amount totals per shift category plus the grand total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub morning: f64,
    pub afternoon: f64,
    pub night: f64,
    /// Always `morning + afternoon + night`.
    pub grand: f64,
}

impl Totals {
    fn add(&mut self, category: ShiftCategory, amount: f64) {
        match category {
            ShiftCategory::Morning => self.morning += amount,
            ShiftCategory::Afternoon => self.afternoon += amount,
            ShiftCategory::Night => self.night += amount,
            ShiftCategory::Uncategorized => return,
        }
        self.grand = self.morning + self.afternoon + self.night;
    }
}

/// Number of rows per shift category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCounts {
    pub morning: usize,
    pub afternoon: usize,
    pub night: usize,
}

impl ShiftCounts {
    fn increment(&mut self, category: ShiftCategory) {
        match category {
            ShiftCategory::Morning => self.morning += 1,
            ShiftCategory::Afternoon => self.afternoon += 1,
            ShiftCategory::Night => self.night += 1,
            ShiftCategory::Uncategorized => {}
        }
    }

    pub fn total(&self) -> usize {
        self.morning + self.afternoon + self.night
    }
}

/// An amount cell that could not be read as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnparsableAmount {
    /// Index of the row within the sheet (0 is the header).
    pub row: usize,
    /// The cell as it appears in the sheet.
    pub raw: String,
}

/// Output of row-by-row classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub totals: Totals,
    pub counts: ShiftCounts,
    /// Categorized rows whose amount was left out of the totals.
    pub unparsable: Vec<UnparsableAmount>,
    /// Rows whose allowance type matched no category.
    pub uncategorized: usize,
    /// Required columns absent from the header. Non-empty means totals are unavailable.
    pub missing_columns: Vec<String>,
}

impl Aggregation {
    /// True when every categorized row contributed to the totals.
    pub fn is_complete(&self) -> bool {
        self.unparsable.is_empty() && self.missing_columns.is_empty()
    }

    pub fn is_available(&self) -> bool {
        self.missing_columns.is_empty()
    }
}

/// Output of reading the embedded summary rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTotals {
    pub totals: Totals,
    /// Rows that carried one of the summary labels.
    pub rows_matched: usize,
    pub unparsable: Vec<UnparsableAmount>,
}

impl SummaryTotals {
    /// True when the sheet carries at least one summary row.
    pub fn is_present(&self) -> bool {
        self.rows_matched > 0
    }
}

// ============================================================================
// AMOUNT PARSING
// ============================================================================

/// Reads a cell as a decimal amount.
/// Numbers pass through; text is trimmed and parsed. Anything else, and any
/// non-finite result, is `None`.
pub fn parse_amount(cell: &CellValue) -> Option<f64> {
    let value = match cell {
        CellValue::Number(n) => *n,
        CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

// ============================================================================
// ROW CLASSIFICATION
// ============================================================================

/// Classifies `rows` and sums their amounts per shift category.
///
/// `rows` yields `(sheet_row_index, row)` pairs. Rows whose allowance type is
/// not text are uncategorized. Amounts are only read for categorized rows.
pub fn aggregate<'a, I>(rows: I, columns: &ColumnIndex) -> Aggregation
where
    I: IntoIterator<Item = (usize, &'a Row)>,
{
    let (type_index, amount_index) = match (columns.allowance_type, columns.amount) {
        (Some(t), Some(a)) => (t, a),
        _ => {
            let missing_columns = columns.missing_aggregation_columns();
            log::warn!(
                "aggregation unavailable, missing columns: {}",
                missing_columns.join(", ")
            );
            return Aggregation {
                missing_columns,
                ..Aggregation::default()
            };
        }
    };

    let mut result = Aggregation::default();

    for (row_index, row) in rows {
        let category = row
            .text(type_index)
            .map(ShiftCategory::classify)
            .unwrap_or_default();

        if !category.is_categorized() {
            result.uncategorized += 1;
            continue;
        }

        result.counts.increment(category);

        let cell = row.get(amount_index);
        match parse_amount(cell) {
            Some(amount) => result.totals.add(category, amount),
            None => result.unparsable.push(UnparsableAmount {
                row: row_index,
                raw: cell.display_value(),
            }),
        }
    }

    if !result.unparsable.is_empty() {
        log::warn!(
            "{} row(s) with unparsable amounts left out of totals",
            result.unparsable.len()
        );
    }

    result
}

// ============================================================================
// EMBEDDED SUMMARY ROWS
// ============================================================================

/// Reads precomputed totals from rows carrying a summary label.
///
/// For each row the labels are tested morning, afternoon, night; the first one
/// present decides the category and the cell right after it holds the value.
/// Repeated labels accumulate.
pub fn summary_totals<'a, I>(rows: I, labels: &SummaryLabels) -> SummaryTotals
where
    I: IntoIterator<Item = (usize, &'a Row)>,
{
    let mut result = SummaryTotals::default();

    for (row_index, row) in rows {
        let found = labels.in_priority_order().into_iter().find_map(|(category, label)| {
            row.iter()
                .position(|cell| cell.as_text() == Some(label))
                .map(|position| (category, position))
        });

        let Some((category, position)) = found else {
            continue;
        };

        result.rows_matched += 1;
        let cell = row.get(position + 1);
        match parse_amount(cell) {
            Some(amount) => result.totals.add(category, amount),
            None => result.unparsable.push(UnparsableAmount {
                row: row_index,
                raw: cell.display_value(),
            }),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::ColumnNames;

    fn header() -> Row {
        Row::from_texts(&["Employee Name", "Allowance Type", "Amount as per policy"])
    }

    fn row(name: &str, kind: &str, amount: CellValue) -> Row {
        Row::new(vec![CellValue::text(name), CellValue::text(kind), amount])
    }

    fn columns() -> ColumnIndex {
        ColumnIndex::resolve(&header(), &ColumnNames::default())
    }

    fn indexed(rows: &[Row]) -> impl Iterator<Item = (usize, &Row)> {
        rows.iter().enumerate().map(|(i, r)| (i + 1, r))
    }

    #[test]
    fn test_aggregate_basic_categories() {
        let rows = vec![
            row("Alice", "Morning Shift", CellValue::Number(100.0)),
            row("Bob", "MORNING", CellValue::Number(50.0)),
            row("Alice", "Night Duty", CellValue::Number(30.0)),
        ];
        let result = aggregate(indexed(&rows), &columns());

        assert_eq!(result.totals.morning, 150.0);
        assert_eq!(result.totals.afternoon, 0.0);
        assert_eq!(result.totals.night, 30.0);
        assert_eq!(result.totals.grand, 180.0);
        assert_eq!(
            result.counts,
            ShiftCounts { morning: 2, afternoon: 0, night: 1 }
        );
        assert!(result.is_complete());
    }

    #[test]
    fn test_aggregate_text_amounts() {
        let rows = vec![
            row("Alice", "Afternoon", CellValue::text(" 12.5 ")),
            row("Alice", "afternoon", CellValue::text("7.5")),
        ];
        let result = aggregate(indexed(&rows), &columns());
        assert_eq!(result.totals.afternoon, 20.0);
        assert_eq!(result.totals.grand, 20.0);
    }

    #[test]
    fn test_uncategorized_excluded_from_grand_total() {
        let rows = vec![
            row("Alice", "Morning", CellValue::Number(10.0)),
            row("Alice", "Travel", CellValue::Number(999.0)),
            Row::new(vec![CellValue::text("Bob"), CellValue::Number(3.0), CellValue::Number(5.0)]),
        ];
        let result = aggregate(indexed(&rows), &columns());
        assert_eq!(result.totals.grand, 10.0);
        assert_eq!(result.uncategorized, 2);
        assert_eq!(result.counts.total(), 1);
    }

    #[test]
    fn test_unparsable_amount_is_flagged_not_zeroed() {
        let rows = vec![
            row("Alice", "Night", CellValue::Number(40.0)),
            row("Alice", "Night", CellValue::text("forty")),
            row("Bob", "Night", CellValue::Empty),
        ];
        let result = aggregate(indexed(&rows), &columns());

        assert_eq!(result.totals.night, 40.0);
        assert_eq!(result.counts.night, 3);
        assert!(!result.is_complete());
        assert_eq!(
            result.unparsable,
            vec![
                UnparsableAmount { row: 2, raw: "forty".to_string() },
                UnparsableAmount { row: 3, raw: String::new() },
            ]
        );
    }

    #[test]
    fn test_short_row_amount_is_unparsable() {
        let rows = vec![Row::from_texts(&["Alice", "Morning"])];
        let result = aggregate(indexed(&rows), &columns());
        assert_eq!(result.counts.morning, 1);
        assert_eq!(result.unparsable.len(), 1);
    }

    #[test]
    fn test_missing_column_degrades_to_nothing() {
        let header = Row::from_texts(&["Employee Name", "Allowance Type"]);
        let cols = ColumnIndex::resolve(&header, &ColumnNames::default());
        let rows = vec![row("Alice", "Morning", CellValue::Number(10.0))];
        let result = aggregate(indexed(&rows), &cols);

        assert_eq!(result.totals, Totals::default());
        assert_eq!(result.counts, ShiftCounts::default());
        assert!(!result.is_available());
        assert_eq!(result.missing_columns, vec!["Amount as per policy".to_string()]);
    }

    #[test]
    fn test_missing_column_never_reads_last_cell() {
        // Without an amount column the trailing cell must not be summed.
        let header = Row::from_texts(&["Allowance Type", "Other"]);
        let cols = ColumnIndex::resolve(&header, &ColumnNames::default());
        let rows = vec![Row::new(vec![CellValue::text("Morning"), CellValue::Number(10.0)])];
        assert_eq!(aggregate(indexed(&rows), &cols).totals.grand, 0.0);
    }

    #[test]
    fn test_empty_rows_give_zero_totals() {
        let result = aggregate(indexed(&[]), &columns());
        assert_eq!(result.totals, Totals::default());
        assert!(result.is_complete());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(&CellValue::Number(3.5)), Some(3.5));
        assert_eq!(parse_amount(&CellValue::text("-2")), Some(-2.0));
        assert_eq!(parse_amount(&CellValue::text("NaN")), None);
        assert_eq!(parse_amount(&CellValue::text("inf")), None);
        assert_eq!(parse_amount(&CellValue::text("12abc")), None);
        assert_eq!(parse_amount(&CellValue::Boolean(true)), None);
        assert_eq!(parse_amount(&CellValue::Empty), None);
    }

    #[test]
    fn test_summary_totals() {
        let rows = vec![
            header(),
            row("Alice", "Morning", CellValue::Number(10.0)),
            Row::new(vec![CellValue::Empty, CellValue::text("Total amount for M"), CellValue::Number(500.0)]),
            Row::new(vec![CellValue::text("Total amount for A"), CellValue::text("250")]),
            Row::new(vec![CellValue::text("Total amount for N"), CellValue::Number(125.0)]),
        ];
        let result = summary_totals(rows.iter().enumerate(), &SummaryLabels::default());

        assert!(result.is_present());
        assert_eq!(result.rows_matched, 3);
        assert_eq!(result.totals.morning, 500.0);
        assert_eq!(result.totals.afternoon, 250.0);
        assert_eq!(result.totals.night, 125.0);
        assert_eq!(result.totals.grand, 875.0);
    }

    #[test]
    fn test_summary_totals_first_label_wins() {
        let rows = vec![Row::new(vec![
            CellValue::text("Total amount for N"),
            CellValue::Number(1.0),
            CellValue::text("Total amount for M"),
            CellValue::Number(2.0),
        ])];
        let result = summary_totals(rows.iter().enumerate(), &SummaryLabels::default());
        assert_eq!(result.totals.morning, 2.0);
        assert_eq!(result.totals.night, 0.0);
    }

    #[test]
    fn test_summary_totals_repeated_label_accumulates() {
        let rows = vec![
            Row::new(vec![CellValue::text("Total amount for M"), CellValue::Number(5.0)]),
            Row::new(vec![CellValue::text("Total amount for M"), CellValue::text("7")]),
        ];
        let result = summary_totals(rows.iter().enumerate(), &SummaryLabels::default());

        assert_eq!(result.rows_matched, 2);
        assert_eq!(result.totals.morning, 12.0);
        assert_eq!(result.totals.grand, 12.0);
        assert!(result.unparsable.is_empty());
    }

    #[test]
    fn test_summary_totals_flags_bad_value() {
        let rows = vec![Row::from_texts(&["Total amount for M"])];
        let result = summary_totals(rows.iter().enumerate(), &SummaryLabels::default());
        assert_eq!(result.rows_matched, 1);
        assert_eq!(result.totals.grand, 0.0);
        assert_eq!(result.unparsable, vec![UnparsableAmount { row: 0, raw: String::new() }]);
    }

    #[test]
    fn test_summary_totals_absent() {
        let rows = vec![header(), row("Alice", "Morning", CellValue::Number(10.0))];
        let result = summary_totals(rows.iter().enumerate(), &SummaryLabels::default());
        assert!(!result.is_present());
        assert_eq!(result.totals, Totals::default());
    }
}
