//! FILENAME: core/persistence/src/lib.rs
//! Payroll Persistence Module
//!
//! Reads allowance sheets from XLSX files and writes exported reports back
//! to XLSX.

mod error;
mod xlsx_reader;
mod xlsx_writer;

pub use error::PersistenceError;
pub use xlsx_reader::{load_xlsx, load_xlsx_from_bytes};
pub use xlsx_writer::{save_xlsx, write_xlsx_to_buffer};

use engine::Sheet;
use std::path::PathBuf;

// ============================================================================
// SHEET SOURCES
// ============================================================================

/// Something a sheet can be loaded from.
pub trait SheetSource {
    /// Short human-readable description, used in log lines.
    fn describe(&self) -> String;

    fn read_sheet(&self) -> Result<Sheet, PersistenceError>;
}

/// An XLSX file on disk.
#[derive(Debug, Clone)]
pub struct XlsxFile {
    pub path: PathBuf,
    /// Worksheet to read; the first one when `None`.
    pub sheet: Option<String>,
}

impl XlsxFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        XlsxFile {
            path: path.into(),
            sheet: None,
        }
    }
}

impl SheetSource for XlsxFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_sheet(&self) -> Result<Sheet, PersistenceError> {
        load_xlsx(&self.path, self.sheet.as_deref())
    }
}

/// An XLSX file already fetched into memory.
#[derive(Debug, Clone)]
pub struct XlsxBytes {
    pub bytes: Vec<u8>,
    pub sheet: Option<String>,
}

impl XlsxBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        XlsxBytes { bytes, sheet: None }
    }
}

impl SheetSource for XlsxBytes {
    fn describe(&self) -> String {
        format!("<{} bytes>", self.bytes.len())
    }

    fn read_sheet(&self) -> Result<Sheet, PersistenceError> {
        load_xlsx_from_bytes(&self.bytes, self.sheet.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{CellError, CellValue, Row};

    fn report() -> Sheet {
        Sheet::new(
            "Payroll Report",
            vec![
                Row::from_texts(&["Employee Name", "Allowance Type", "Amount as per policy"]),
                Row::new(vec![
                    CellValue::text("Alice"),
                    CellValue::text("Morning Shift"),
                    CellValue::Number(100.0),
                ]),
                Row::new(vec![CellValue::text("Bob"), CellValue::text("Night Shift")]),
                Row::new(vec![
                    CellValue::text("Carol"),
                    CellValue::Empty,
                    CellValue::Boolean(true),
                ]),
            ],
        )
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("allowance_report.xlsx");

        save_xlsx(&report(), &path).unwrap();
        let loaded = XlsxFile::new(&path).read_sheet().unwrap();

        assert_eq!(loaded, report());
    }

    #[test]
    fn test_buffer_source() {
        let bytes = write_xlsx_to_buffer(&report()).unwrap();
        let source = XlsxBytes::new(bytes);
        assert!(source.describe().ends_with("bytes>"));

        let loaded = source.read_sheet().unwrap();
        assert_eq!(loaded.name, "Payroll Report");
        assert_eq!(loaded.rows.len(), 4);
        assert_eq!(loaded.rows[2].len(), 2);
    }

    #[test]
    fn test_named_sheet() {
        let bytes = write_xlsx_to_buffer(&report()).unwrap();
        let source = XlsxBytes {
            bytes: bytes.clone(),
            sheet: Some("Payroll Report".to_string()),
        };
        assert!(source.read_sheet().is_ok());

        let missing = XlsxBytes {
            bytes,
            sheet: Some("Roster".to_string()),
        };
        assert!(matches!(
            missing.read_sheet(),
            Err(PersistenceError::SheetNotFound(name)) if name == "Roster"
        ));
    }

    #[test]
    fn test_missing_sheet_message_names_sheet() {
        let bytes = write_xlsx_to_buffer(&report()).unwrap();
        let missing = XlsxBytes {
            bytes,
            sheet: Some("Roster".to_string()),
        };
        let err = missing.read_sheet().unwrap_err();
        assert_eq!(err.to_string(), "worksheet 'Roster' not found in workbook");
    }

    #[test]
    fn test_error_cells_export_as_error_text() {
        let sheet = Sheet::new(
            "Payroll Report",
            vec![
                Row::from_texts(&["Employee Name", "Amount as per policy"]),
                Row::new(vec![
                    CellValue::text("Alice"),
                    CellValue::Error(CellError::Div0),
                ]),
            ],
        );

        let bytes = write_xlsx_to_buffer(&sheet).unwrap();
        let loaded = XlsxBytes::new(bytes).read_sheet().unwrap();

        assert_eq!(loaded.rows[1].get(0), &CellValue::text("Alice"));
        assert_eq!(loaded.rows[1].get(1), &CellValue::text("#ERROR!"));
    }

    #[test]
    fn test_invalid_sheet_name_is_an_error() {
        let mut sheet = report();
        sheet.name = "[invalid]".to_string();
        assert!(write_xlsx_to_buffer(&sheet).is_err());
    }
}
