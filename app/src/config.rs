//! FILENAME: app/src/config.rs
//! PURPOSE: Session configuration.
//! CONTEXT: Where the allowance sheet comes from, which columns and summary
//! labels to look for, and how exported reports are named. Stored as JSON;
//! every field is optional and falls back to the defaults below.

use crate::error::AppError;
use allowance_engine::{ColumnNames, SummaryLabels, DEFAULT_REPORT_SHEET_NAME};
use persistence::XlsxFile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_FILE: &str = "Payroll.xlsx";
pub const DEFAULT_REPORT_FILE_NAME: &str = "allowance_report.xlsx";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PayrollConfig {
    /// XLSX file holding the allowance sheet.
    pub source: PathBuf,
    /// Worksheet to read; the first one when absent.
    pub sheet: Option<String>,
    pub columns: ColumnNames,
    pub summary_labels: SummaryLabels,
    /// File name of exported reports.
    pub report_file_name: String,
    /// Worksheet name inside exported reports.
    pub report_sheet_name: String,
    /// Unified log file; console only when absent.
    pub log_file: Option<PathBuf>,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        PayrollConfig {
            source: PathBuf::from(DEFAULT_SOURCE_FILE),
            sheet: None,
            columns: ColumnNames::default(),
            summary_labels: SummaryLabels::default(),
            report_file_name: DEFAULT_REPORT_FILE_NAME.to_string(),
            report_sheet_name: DEFAULT_REPORT_SHEET_NAME.to_string(),
            log_file: None,
        }
    }
}

impl PayrollConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a JSON config file. Relative `source` and `logFile` paths are
    /// resolved against the config file's directory.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_json(&text)?;

        if let Some(base) = path.parent() {
            if config.source.is_relative() {
                config.source = base.join(&config.source);
            }
            if let Some(log_file) = config.log_file.as_mut() {
                if log_file.is_relative() {
                    *log_file = base.join(&*log_file);
                }
            }
        }

        Ok(config)
    }

    /// The configured sheet source.
    pub fn source(&self) -> XlsxFile {
        XlsxFile {
            path: self.source.clone(),
            sheet: self.sheet.clone(),
        }
    }
}
