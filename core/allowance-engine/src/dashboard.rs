//! FILENAME: core/allowance-engine/src/dashboard.rs
//! Dashboard - state of one loaded allowance sheet.
//!
//! The sheet, its resolved columns and its name catalog are fixed at
//! construction. The only mutable part is the current `DashboardView`, which
//! is replaced as a whole on every filter change: selection, visible rows and
//! aggregation are always computed together, from scratch.

use crate::aggregate::{aggregate, summary_totals, Aggregation, ShiftCounts, SummaryTotals, Totals};
use crate::definition::{ColumnNames, SummaryLabels};
use crate::filter::{apply_filter, FilterSelection, VisibleRows};
use crate::header::ColumnIndex;
use crate::names::{FilterOption, NameCatalog};
use crate::report::assemble_named;
use crate::report::DEFAULT_REPORT_SHEET_NAME;
use engine::Sheet;

// ============================================================================
// VIEW
// ============================================================================

/// What is currently displayed: a selection and everything derived from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    pub selection: FilterSelection,
    pub visible: VisibleRows,
    pub aggregation: Aggregation,
}

impl DashboardView {
    pub fn totals(&self) -> &Totals {
        &self.aggregation.totals
    }

    pub fn counts(&self) -> &ShiftCounts {
        &self.aggregation.counts
    }

    /// Per-category row counts are only shown while a name filter is active.
    pub fn shows_shift_counts(&self) -> bool {
        !self.selection.is_empty()
    }
}

// ============================================================================
// DASHBOARD
// ============================================================================

#[derive(Debug, Clone)]
pub struct Dashboard {
    sheet: Sheet,
    columns: ColumnIndex,
    catalog: NameCatalog,
    summary_labels: SummaryLabels,
    view: DashboardView,
}

impl Dashboard {
    /// Derives column positions and the name catalog, then computes the
    /// unfiltered view.
    pub fn new(sheet: Sheet, names: &ColumnNames, summary_labels: SummaryLabels) -> Self {
        let columns = ColumnIndex::resolve(sheet.header(), names);
        let catalog = NameCatalog::build(&sheet, &columns);
        let view = Self::compute_view(&sheet, &columns, FilterSelection::new());

        log::debug!(
            "dashboard ready: sheet={} rows={} names={}",
            sheet.name,
            sheet.data_row_count(),
            catalog.len()
        );

        Dashboard {
            sheet,
            columns,
            catalog,
            summary_labels,
            view,
        }
    }

    fn compute_view(sheet: &Sheet, columns: &ColumnIndex, selection: FilterSelection) -> DashboardView {
        let visible = apply_filter(sheet, columns, &selection);
        let aggregation = aggregate(visible.rows(sheet), columns);
        DashboardView {
            selection,
            visible,
            aggregation,
        }
    }

    /// Replaces the selection and recomputes visible rows and totals.
    pub fn set_filter(&mut self, selection: FilterSelection) -> &DashboardView {
        self.view = Self::compute_view(&self.sheet, &self.columns, selection);

        log::debug!(
            "filter applied: selected={} visible={} grand={}",
            self.view.selection.len(),
            self.view.visible.len(),
            self.view.aggregation.totals.grand
        );

        &self.view
    }

    /// Applies one filter interaction (`All` or a name checkbox).
    pub fn toggle(&mut self, option: &FilterOption) -> &DashboardView {
        let next = self.view.selection.toggle(option);
        self.set_filter(next)
    }

    pub fn toggle_name(&mut self, name: &str) -> &DashboardView {
        let next = self.view.selection.toggle_name(name);
        self.set_filter(next)
    }

    pub fn clear_filter(&mut self) -> &DashboardView {
        self.set_filter(FilterSelection::new())
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    pub fn columns(&self) -> &ColumnIndex {
        &self.columns
    }

    pub fn catalog(&self) -> &NameCatalog {
        &self.catalog
    }

    /// Totals read from the sheet's embedded summary rows, ignoring the filter.
    pub fn summary_totals(&self) -> SummaryTotals {
        summary_totals(self.sheet.rows.iter().enumerate(), &self.summary_labels)
    }

    /// Export table for the current view.
    pub fn report(&self) -> Sheet {
        self.report_named(DEFAULT_REPORT_SHEET_NAME)
    }

    pub fn report_named(&self, name: &str) -> Sheet {
        assemble_named(name, &self.sheet, &self.view.visible)
    }
}
