// src/export/mod.rs

mod attendance;
mod fs_utils;
mod grades;
pub mod labels;
mod model;
mod table;
mod xlsx;

pub use attendance::{AttendanceRecord, AttendanceStatus, RawAttendance, attendance_columns};
pub use grades::{GradeRecord, Subject, SubjectGrades, grade_sheet};
pub use model::{CellValue, ColumnSpec, EMPTY_PLACEHOLDER, ExportRow, Record, SheetData, project_rows};
pub use xlsx::{DEFAULT_MIN_WIDTH, GRADES_MIN_WIDTH, column_widths};

use crate::ui::messages::success;
use chrono::{NaiveDate, Utc};
use log::{debug, error};
use std::fmt;
use std::path::{Path, PathBuf};

/// Shared completion message for every export kind.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Write a sheet to an explicit path, propagating errors.
pub(crate) fn write_sheet_file(
    path: &Path,
    data: &SheetData,
    sheet: &str,
    min_width: usize,
) -> crate::errors::AppResult<()> {
    let bytes = xlsx::build_xlsx(data, sheet, min_width)?;
    fs_utils::write_atomically(path, &bytes)
}

/// Why an export did not produce a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportFailure {
    NoColumns,
    DuplicateHeader(String),
    /// Building or serializing the workbook failed.
    Build(String),
    /// The workbook was built but could not be written.
    Write { path: PathBuf, reason: String },
}

impl fmt::Display for ExportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFailure::NoColumns => write!(f, "no columns to export"),
            ExportFailure::DuplicateHeader(h) => write!(f, "duplicate column header '{h}'"),
            ExportFailure::Build(reason) => write!(f, "could not build workbook: {reason}"),
            ExportFailure::Write { path, reason } => {
                write!(f, "could not write {}: {reason}", path.display())
            }
        }
    }
}

/// Result of an export call. Exports never return `Err` and never panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    Failed(ExportFailure),
}

impl ExportOutcome {
    /// `true` when a file was written.
    pub fn succeeded(&self) -> bool {
        matches!(self, ExportOutcome::Written(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ExportOutcome::Written(p) => Some(p),
            ExportOutcome::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ExportFailure> {
        match self {
            ExportOutcome::Written(_) => None,
            ExportOutcome::Failed(f) => Some(f),
        }
    }
}

/// Writes `.xlsx` files named `{prefix}_{YYYY-MM-DD}.xlsx` into one directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
    date: NaiveDate,
}

impl Exporter {
    /// Exporter stamping files with today's UTC date.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            date: Utc::now().date_naive(),
        }
    }

    /// Override the date used in file names.
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Target path for a given prefix.
    pub fn file_path(&self, prefix: &str) -> PathBuf {
        let name = format!(
            "{}_{}.xlsx",
            fs_utils::sanitize_prefix(prefix),
            self.date.format("%Y-%m-%d")
        );
        self.output_dir.join(name)
    }

    /// Export records projected through `columns`.
    ///
    /// Each output row is keyed by `column.header`; absent fields become `''`.
    pub fn export(
        &self,
        data: &[Record],
        columns: &[ColumnSpec],
        prefix: &str,
        sheet: Option<&str>,
    ) -> ExportOutcome {
        let sheet_data = SheetData {
            headers: columns.iter().map(|c| c.header.clone()).collect(),
            rows: project_rows(data, columns),
        };

        self.write_sheet(
            &sheet_data,
            prefix,
            sheet.unwrap_or(labels::SHEET_DEFAULT),
            DEFAULT_MIN_WIDTH,
        )
    }

    /// Shared write path for all exports.
    pub(crate) fn write_sheet(
        &self,
        data: &SheetData,
        prefix: &str,
        sheet: &str,
        min_width: usize,
    ) -> ExportOutcome {
        let outcome = self.try_write_sheet(data, prefix, sheet, min_width);

        match &outcome {
            ExportOutcome::Written(path) => {
                debug!("exported {} rows to {}", data.rows.len(), path.display());
            }
            ExportOutcome::Failed(failure) => {
                error!("Error exporting to Excel: {failure}");
            }
        }

        outcome
    }

    fn try_write_sheet(
        &self,
        data: &SheetData,
        prefix: &str,
        sheet: &str,
        min_width: usize,
    ) -> ExportOutcome {
        if data.headers.is_empty() {
            return ExportOutcome::Failed(ExportFailure::NoColumns);
        }

        if let Some(dup) = model::duplicate_header(&data.headers) {
            return ExportOutcome::Failed(ExportFailure::DuplicateHeader(dup.to_string()));
        }

        let bytes = match xlsx::build_xlsx(data, sheet, min_width) {
            Ok(b) => b,
            Err(e) => return ExportOutcome::Failed(ExportFailure::Build(e.to_string())),
        };

        let path = self.file_path(prefix);
        match fs_utils::write_atomically(&path, &bytes) {
            Ok(()) => ExportOutcome::Written(path),
            Err(e) => ExportOutcome::Failed(ExportFailure::Write {
                path,
                reason: e.to_string(),
            }),
        }
    }
}
