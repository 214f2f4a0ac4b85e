//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for payroll session integration tests.

#![allow(dead_code)]

use app_lib::{set_echo_stdout, PayrollConfig, PayrollSession};
use engine::{CellValue, Row, Sheet};
use persistence::save_xlsx;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness owning a session and a scratch directory.
pub struct TestHarness {
    pub session: PayrollSession,
    pub dir: TempDir,
}

impl TestHarness {
    /// A harness with default configuration and nothing loaded.
    pub fn new() -> Self {
        set_echo_stdout(false);
        TestHarness {
            session: PayrollSession::new(PayrollConfig::default()),
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Write `sheet` as an XLSX file inside the scratch directory.
    pub fn write_xlsx(&self, file_name: &str, sheet: &Sheet) -> PathBuf {
        let path = self.dir.path().join(file_name);
        save_xlsx(sheet, &path).expect("write fixture xlsx");
        path
    }

    /// A harness whose session has the payroll fixture loaded.
    pub async fn with_payroll() -> Self {
        let mut harness = Self::new();
        let path = harness.write_xlsx("Payroll.xlsx", &PayrollFixture::sheet());
        let state = harness.session.load(persistence::XlsxFile::new(path)).await;
        assert!(state.is_ready(), "fixture failed to load: {:?}", state.error());
        harness
    }
}

/// Payroll allowance data as it appears in the monthly sheet.
pub struct PayrollFixture;

impl PayrollFixture {
    pub fn headers() -> Vec<&'static str> {
        vec![
            "Employee ID",
            "Employee Name",
            "Allowance Type",
            "Month",
            "Date Of Which Allowance is claimed",
            "Amount as per policy",
            "Project Code",
        ]
    }

    /// (id, name, allowance type, date, amount, project)
    pub fn data() -> Vec<(&'static str, &'static str, &'static str, &'static str, f64, &'static str)> {
        vec![
            ("E101", "Alice", "Morning Shift", "2024-01-03", 100.0, "P-7"),
            ("E102", "Bob", "Afternoon Shift", "2024-01-04", 80.0, "P-7"),
            ("E101", "Alice", "Night Shift", "2024-01-05", 120.0, "P-9"),
            ("E103", "Carol", "Morning Shift", "2024-01-05", 100.0, "P-9"),
            ("E102", "Bob", "Night Shift", "2024-01-06", 120.0, "P-7"),
        ]
    }

    pub fn row(id: &str, name: &str, kind: &str, date: &str, amount: CellValue, project: &str) -> Row {
        Row::new(vec![
            CellValue::text(id),
            CellValue::text(name),
            CellValue::text(kind),
            CellValue::text("January"),
            CellValue::text(date),
            amount,
            CellValue::text(project),
        ])
    }

    pub fn sheet() -> Sheet {
        let mut rows = vec![Row::from_texts(&Self::headers())];
        for (id, name, kind, date, amount, project) in Self::data() {
            rows.push(Self::row(id, name, kind, date, CellValue::Number(amount), project));
        }
        Sheet::new("Sheet1", rows)
    }

    /// The fixture followed by precomputed summary rows.
    pub fn sheet_with_summary() -> Sheet {
        let mut sheet = Self::sheet();
        for (label, value) in [
            ("Total amount for M", 200.0),
            ("Total amount for A", 80.0),
            ("Total amount for N", 240.0),
        ] {
            sheet.rows.push(Row::new(vec![
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Empty,
                CellValue::text(label),
                CellValue::Number(value),
            ]));
        }
        sheet
    }
}
