//! FILENAME: core/persistence/src/xlsx_writer.rs

use crate::PersistenceError;
use engine::{CellValue, Sheet};
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook};
use std::path::Path;

/// Writes `sheet` as a single-worksheet XLSX file. Row 0 is written bold.
pub fn save_xlsx(sheet: &Sheet, path: &Path) -> Result<(), PersistenceError> {
    let mut xlsx = build_workbook(sheet)?;
    xlsx.save(path)?;
    Ok(())
}

/// Same as `save_xlsx`, returning the file contents.
pub fn write_xlsx_to_buffer(sheet: &Sheet) -> Result<Vec<u8>, PersistenceError> {
    let mut xlsx = build_workbook(sheet)?;
    Ok(xlsx.save_to_buffer()?)
}

fn build_workbook(sheet: &Sheet) -> Result<XlsxWorkbook, PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = xlsx.add_worksheet();
    worksheet.set_name(&sheet.name)?;

    for (row_idx, row) in sheet.rows.iter().enumerate() {
        let xl_row = u32::try_from(row_idx)
            .map_err(|_| PersistenceError::InvalidFormat(format!("row {} out of range", row_idx)))?;

        for (col_idx, cell) in row.iter().enumerate() {
            let xl_col = u16::try_from(col_idx).map_err(|_| {
                PersistenceError::InvalidFormat(format!("column {} out of range", col_idx))
            })?;

            let format = (row_idx == 0).then_some(&header_format);

            match cell {
                CellValue::Empty => {}
                CellValue::Number(n) => {
                    if let Some(fmt) = format {
                        worksheet.write_number_with_format(xl_row, xl_col, *n, fmt)?;
                    } else {
                        worksheet.write_number(xl_row, xl_col, *n)?;
                    }
                }
                CellValue::Text(s) => {
                    if let Some(fmt) = format {
                        worksheet.write_string_with_format(xl_row, xl_col, s, fmt)?;
                    } else {
                        worksheet.write_string(xl_row, xl_col, s)?;
                    }
                }
                CellValue::Boolean(b) => {
                    if let Some(fmt) = format {
                        worksheet.write_boolean_with_format(xl_row, xl_col, *b, fmt)?;
                    } else {
                        worksheet.write_boolean(xl_row, xl_col, *b)?;
                    }
                }
                CellValue::Error(_) => {
                    worksheet.write_string(xl_row, xl_col, "#ERROR!")?;
                }
            }
        }
    }

    Ok(xlsx)
}
