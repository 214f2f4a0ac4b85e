//! FILENAME: core/persistence/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("failed to write report: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("failed to read workbook: {0}")]
    XlsxRead(#[from] calamine::XlsxError),

    #[error("unreadable worksheet: {0}")]
    InvalidFormat(String),

    #[error("worksheet '{0}' not found in workbook")]
    SheetNotFound(String),
}
