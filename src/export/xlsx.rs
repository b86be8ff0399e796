// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{CellValue, SheetData};
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

/// Width floor for generic and attendance exports.
pub const DEFAULT_MIN_WIDTH: usize = 15;
/// Width floor for the grade sheet, which has many narrow columns.
pub const GRADES_MIN_WIDTH: usize = 12;

/// Column widths in character units: `max(header width + 2, min_width)`.
pub fn column_widths(headers: &[String], min_width: usize) -> Vec<usize> {
    headers
        .iter()
        .map(|h| (UnicodeWidthStr::width(h.as_str()) + 2).max(min_width))
        .collect()
}

/// Build the workbook in memory and return the serialized `.xlsx` bytes.
pub(crate) fn build_xlsx(data: &SheetData, sheet_name: &str, min_width: usize) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(sheet_name).map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in data.headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col_index(col)?, header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Rows
    // ---------------------------
    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, export_row) in data.rows.iter().enumerate() {
        let row = u32::try_from(row_index + 1)
            .map_err(|_| AppError::Export("too many rows for one sheet".into()))?;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, header) in data.headers.iter().enumerate() {
            if let Some(value) = export_row.get(header) {
                write_cell(worksheet, row, col_index(col)?, value, band)?;
            }
        }
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    for (c, w) in column_widths(&data.headers, min_width).iter().enumerate() {
        worksheet
            .set_column_width(col_index(c)?, *w as f64)
            .map_err(to_export_error)?;
    }

    workbook.save_to_buffer().map_err(to_export_error)
}

/// Write one cell keeping its JSON type: numbers stay numeric, IDs stay text.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    bg: Color,
) -> AppResult<()> {
    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match value {
        CellValue::Number(n) => worksheet.write_number_with_format(row, col, *n, &fmt),
        CellValue::Bool(b) => worksheet.write_boolean_with_format(row, col, *b, &fmt),
        CellValue::Text(s) => worksheet.write_string_with_format(row, col, s, &fmt),
    }
    .map_err(to_export_error)?;

    Ok(())
}

fn col_index(col: usize) -> AppResult<u16> {
    u16::try_from(col).map_err(|_| AppError::Export(format!("column index {col} out of range")))
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
