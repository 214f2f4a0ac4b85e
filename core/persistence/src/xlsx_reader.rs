// FILENAME: core\persistence\src\xlsx_reader.rs

use crate::PersistenceError;
use calamine::{open_workbook, CellErrorType, Data, Reader, Xlsx};
use engine::{CellError, CellValue, Row, Sheet};
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// Reads one worksheet of an XLSX file. The first sheet is used when
/// `sheet_name` is `None`.
pub fn load_xlsx(path: &Path, sheet_name: Option<&str>) -> Result<Sheet, PersistenceError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    read_sheet(&mut workbook, sheet_name)
}

/// Same as `load_xlsx` for an in-memory file.
pub fn load_xlsx_from_bytes(bytes: &[u8], sheet_name: Option<&str>) -> Result<Sheet, PersistenceError> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))?;
    read_sheet(&mut workbook, sheet_name)
}

fn read_sheet<RS: Read + Seek>(
    workbook: &mut Xlsx<RS>,
    sheet_name: Option<&str>,
) -> Result<Sheet, PersistenceError> {
    let sheet_names = workbook.sheet_names().to_vec();

    let name = match sheet_name {
        Some(requested) => sheet_names
            .iter()
            .find(|name| name.as_str() == requested)
            .cloned()
            .ok_or_else(|| PersistenceError::SheetNotFound(requested.to_string()))?,
        None => sheet_names.first().cloned().ok_or_else(|| {
            PersistenceError::InvalidFormat("Workbook contains no sheets".to_string())
        })?,
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;

    let rows: Vec<Row> = range
        .rows()
        .map(|cells| {
            let mut row = Row::new(cells.iter().map(convert_cell).collect());
            row.trim_trailing_empty();
            row
        })
        .collect();

    log::debug!("read sheet '{}' with {} rows", name, rows.len());

    Ok(Sheet::new(name, rows))
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(convert_error(e)),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

fn convert_error(error: &CellErrorType) -> CellError {
    match error {
        CellErrorType::Div0 => CellError::Div0,
        CellErrorType::NA => CellError::NA,
        CellErrorType::Name => CellError::Name,
        CellErrorType::Ref => CellError::Ref,
        CellErrorType::Value => CellError::Value,
        other => CellError::Other(format!("{:?}", other)),
    }
}
