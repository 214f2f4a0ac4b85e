//! FILENAME: app/src/session.rs
//! PURPOSE: One interactive dashboard session.
//! CONTEXT: Owns the load state and routes filter interactions and exports to
//! the loaded `Dashboard`. Loading is the only asynchronous step; the blocking
//! XLSX read runs on tokio's blocking pool. Every other operation runs to
//! completion synchronously.

use crate::config::PayrollConfig;
use crate::error::AppError;
use crate::{log_enter_info, log_error, log_exit_info, log_info, log_warn};
use allowance_engine::{
    Dashboard, DashboardView, FilterOption, FilterSelection, SummaryTotals,
};
use engine::Sheet;
use persistence::{save_xlsx, write_xlsx_to_buffer, SheetSource};
use std::path::{Path, PathBuf};

// ============================================================================
// LOAD STATE
// ============================================================================

#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// Nothing loaded yet.
    #[default]
    NotLoaded,
    /// The last load failed. No derived state is kept.
    Failed(String),
    /// A sheet is loaded and all derived state is available.
    Ready(Dashboard),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// ============================================================================
// SESSION
// ============================================================================

pub struct PayrollSession {
    config: PayrollConfig,
    state: LoadState,
}

impl PayrollSession {
    pub fn new(config: PayrollConfig) -> Self {
        PayrollSession {
            config,
            state: LoadState::NotLoaded,
        }
    }

    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Loads a sheet from `source`, replacing any previous state.
    ///
    /// Failures are logged and recorded as `LoadState::Failed`; they are not
    /// returned to the caller.
    pub async fn load<S>(&mut self, source: S) -> &LoadState
    where
        S: SheetSource + Send + 'static,
    {
        let description = source.describe();
        log_enter_info!("LOAD", "load", "source={}", description);

        // Drop the previous sheet before reading the next one.
        self.state = LoadState::NotLoaded;

        let result = tokio::task::spawn_blocking(move || source.read_sheet())
            .await
            .map_err(|e| AppError::LoadTask(e.to_string()))
            .and_then(|read| read.map_err(AppError::from));

        self.state = match result {
            Ok(sheet) => {
                let dashboard = Dashboard::new(
                    sheet,
                    &self.config.columns,
                    self.config.summary_labels.clone(),
                );
                let missing = &dashboard.view().aggregation.missing_columns;
                if !missing.is_empty() {
                    log_warn!(
                        "LOAD",
                        "totals unavailable, missing column(s): {}",
                        missing.join(", ")
                    );
                }
                log_exit_info!(
                    "LOAD",
                    "load",
                    "rows={} names={}",
                    dashboard.sheet().data_row_count(),
                    dashboard.catalog().len()
                );
                LoadState::Ready(dashboard)
            }
            Err(e) => {
                log_error!("LOAD", "failed to load {}: {}", description, e);
                LoadState::Failed(e.to_string())
            }
        };

        &self.state
    }

    /// Loads the source named in the configuration.
    pub async fn load_configured(&mut self) -> &LoadState {
        let source = self.config.source();
        self.load(source).await
    }

    pub fn dashboard(&self) -> Result<&Dashboard, AppError> {
        match &self.state {
            LoadState::Ready(dashboard) => Ok(dashboard),
            _ => Err(AppError::NotLoaded),
        }
    }

    fn dashboard_mut(&mut self) -> Result<&mut Dashboard, AppError> {
        match &mut self.state {
            LoadState::Ready(dashboard) => Ok(dashboard),
            _ => Err(AppError::NotLoaded),
        }
    }

    // ========================================================================
    // FILTERING
    // ========================================================================

    /// Filter options, `All` first.
    pub fn filter_options(&self) -> Result<&[FilterOption], AppError> {
        Ok(self.dashboard()?.catalog().options())
    }

    pub fn view(&self) -> Result<&DashboardView, AppError> {
        Ok(self.dashboard()?.view())
    }

    pub fn toggle(&mut self, option: &FilterOption) -> Result<&DashboardView, AppError> {
        log_info!("FILTER", "toggle {}", option.label());
        Ok(self.dashboard_mut()?.toggle(option))
    }

    pub fn toggle_name(&mut self, name: &str) -> Result<&DashboardView, AppError> {
        log_info!("FILTER", "toggle {}", name);
        Ok(self.dashboard_mut()?.toggle_name(name))
    }

    pub fn set_filter(&mut self, selection: FilterSelection) -> Result<&DashboardView, AppError> {
        log_info!("FILTER", "set selection of {} name(s)", selection.len());
        Ok(self.dashboard_mut()?.set_filter(selection))
    }

    pub fn clear_filter(&mut self) -> Result<&DashboardView, AppError> {
        Ok(self.dashboard_mut()?.clear_filter())
    }

    /// Totals from the sheet's embedded summary rows.
    pub fn summary_totals(&self) -> Result<SummaryTotals, AppError> {
        Ok(self.dashboard()?.summary_totals())
    }

    // ========================================================================
    // EXPORT
    // ========================================================================

    /// The export table for the current view.
    pub fn report(&self) -> Result<Sheet, AppError> {
        Ok(self.dashboard()?.report_named(&self.config.report_sheet_name))
    }

    /// Writes the current view to `<dir>/<report file name>` and returns the path.
    pub fn export(&self, dir: &Path) -> Result<PathBuf, AppError> {
        let report = self.report()?;
        let path = dir.join(&self.config.report_file_name);

        log_enter_info!("EXPORT", "export", "path={}", path.display());
        save_xlsx(&report, &path)?;
        log_exit_info!("EXPORT", "export", "rows={}", report.rows.len().saturating_sub(1));

        Ok(path)
    }

    /// The current view as XLSX file contents.
    pub fn export_to_buffer(&self) -> Result<Vec<u8>, AppError> {
        let report = self.report()?;
        Ok(write_xlsx_to_buffer(&report)?)
    }
}
