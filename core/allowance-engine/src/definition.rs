//! FILENAME: core/allowance-engine/src/definition.rs
//! Allowance sheet definition - names the engine looks for in a sheet.
//!
//! Nothing here depends on the sheet contents. These are the configurable
//! labels (column headers, summary row labels) and the fixed set of shift
//! categories rows are classified into.

use serde::{Deserialize, Serialize};

// ============================================================================
// COLUMN NAMES
// ============================================================================

/// Header labels of the columns the engine reads.
/// Matched exactly (case and whitespace included) against header cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ColumnNames {
    /// Column holding the employee name used for filtering.
    pub employee_name: String,

    /// Free-text column classifying a row into a shift category.
    pub allowance_type: String,

    /// Column holding the amount paid for the row.
    pub amount: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        ColumnNames {
            employee_name: "Employee Name".to_string(),
            allowance_type: "Allowance Type".to_string(),
            amount: "Amount as per policy".to_string(),
        }
    }
}

// ============================================================================
// SUMMARY LABELS
// ============================================================================

/// Labels of precomputed total rows embedded in some sheets.
/// The value is read from the cell right after the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SummaryLabels {
    pub morning: String,
    pub afternoon: String,
    pub night: String,
}

impl Default for SummaryLabels {
    fn default() -> Self {
        SummaryLabels {
            morning: "Total amount for M".to_string(),
            afternoon: "Total amount for A".to_string(),
            night: "Total amount for N".to_string(),
        }
    }
}

impl SummaryLabels {
    /// Labels in the order they are tested against a row.
    pub fn in_priority_order(&self) -> [(ShiftCategory, &str); 3] {
        [
            (ShiftCategory::Morning, self.morning.as_str()),
            (ShiftCategory::Afternoon, self.afternoon.as_str()),
            (ShiftCategory::Night, self.night.as_str()),
        ]
    }
}

// ============================================================================
// SHIFT CATEGORY
// ============================================================================

/// Shift a row belongs to, derived from its allowance type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftCategory {
    Morning,
    Afternoon,
    Night,
    #[default]
    Uncategorized,
}

impl ShiftCategory {
    /// Keywords tested in priority order. The first keyword contained in the
    /// lower-cased allowance type decides the category.
    const KEYWORDS: [(&'static str, ShiftCategory); 3] = [
        ("morning", ShiftCategory::Morning),
        ("afternoon", ShiftCategory::Afternoon),
        ("night", ShiftCategory::Night),
    ];

    /// Classifies an allowance type by case-insensitive substring match.
    pub fn classify(allowance_type: &str) -> Self {
        let lowered = allowance_type.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, category)| *category)
            .unwrap_or(ShiftCategory::Uncategorized)
    }

    pub fn is_categorized(self) -> bool {
        self != ShiftCategory::Uncategorized
    }
}
