//! FILENAME: app/src/lib.rs
// PURPOSE: Library entry point for the payroll allowance dashboard.
// CONTEXT: Ties configuration, logging, loading, filtering and export together
// behind `PayrollSession`. Presentation layers drive a session; the
// aggregation rules themselves live in `allowance-engine`.

pub mod logging;
pub mod config;
pub mod error;
pub mod session;

pub use config::{PayrollConfig, DEFAULT_REPORT_FILE_NAME, DEFAULT_SOURCE_FILE};
pub use error::AppError;
pub use logging::{init_log_file, init_logging, set_echo_stdout, write_log};
pub use session::{LoadState, PayrollSession};

pub use allowance_engine::{
    Aggregation, DashboardView, FilterOption, FilterSelection, ShiftCategory, ShiftCounts,
    SummaryTotals, Totals, UnparsableAmount,
};

/// Creates a session for `config`, installing the unified logger first.
pub fn create_session(config: PayrollConfig) -> Result<PayrollSession, AppError> {
    init_logging(config.log_file.as_deref(), log::LevelFilter::Info)?;
    log_info!("SYS", "Creating PayrollSession source={}", config.source.display());
    Ok(PayrollSession::new(config))
}
