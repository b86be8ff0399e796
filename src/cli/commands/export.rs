use crate::cli::parser::{Commands, ExportKind};
use crate::context::AppContext;
use crate::errors::{AppError, AppResult};
use crate::export::{
    AttendanceRecord, ColumnSpec, ExportOutcome, Exporter, GradeRecord, RawAttendance, Record,
    Subject, notify_export_success,
};
use crate::ui::messages::{info, warning};
use serde::de::DeserializeOwned;
use std::fs;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Export { kind } = cmd else {
        return Ok(());
    };

    let (label, outcome) = match kind {
        ExportKind::Table {
            data,
            columns,
            column,
            prefix,
            sheet,
            output,
        } => {
            let records: Vec<Record> = read_json(data)?;
            let columns = load_columns(columns, column)?;
            warn_if_empty(records.len());

            let exporter = Exporter::new(ctx.output_dir(&output.dir));
            let outcome = match sheet {
                Some(s) => exporter.export(&records, &columns, prefix, Some(s.as_str())),
                None => exporter.export_table(&records, &columns, prefix),
            };
            ("Table", outcome)
        }

        ExportKind::Grades {
            students,
            subjects,
            prefix,
            output,
        } => {
            let students: Vec<GradeRecord> = read_json(students)?;
            let subjects: Vec<Subject> = read_json(subjects)?;
            warn_if_empty(students.len());
            info(format!(
                "Exporting grades for {} students across {} subjects",
                students.len(),
                subjects.len()
            ));

            let exporter = Exporter::new(ctx.output_dir(&output.dir));
            ("Grades", exporter.export_grades(&students, &subjects, prefix))
        }

        ExportKind::Attendance {
            records,
            course,
            date,
            output,
        } => {
            let raw: Vec<RawAttendance> = read_json(records)?;
            let records: Vec<AttendanceRecord> = raw.into_iter().map(AttendanceRecord::from).collect();
            warn_if_empty(records.len());

            let exporter = Exporter::new(ctx.output_dir(&output.dir));
            ("Attendance", exporter.export_attendance(&records, course, date))
        }
    };

    match outcome {
        ExportOutcome::Written(path) => {
            notify_export_success(label, &path);
            Ok(())
        }
        ExportOutcome::Failed(failure) => Err(AppError::Export(failure.to_string())),
    }
}

fn warn_if_empty(n: usize) {
    if n == 0 {
        warning("No records in input: the sheet will only contain headers.");
    }
}

/// Columns from a JSON file or from repeated `--column key=Header` flags.
fn load_columns(file: &Option<String>, inline: &[String]) -> AppResult<Vec<ColumnSpec>> {
    let columns: Vec<ColumnSpec> = match file {
        Some(path) => read_json(path)?,
        None => inline
            .iter()
            .map(|c| ColumnSpec::parse(c))
            .collect::<AppResult<_>>()?,
    };

    if columns.is_empty() {
        return Err(AppError::InvalidColumn("at least one column is required".into()));
    }

    Ok(columns)
}

fn read_json<T: DeserializeOwned>(path: &str) -> AppResult<T> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::InvalidData(format!("{path}: {e}")))
}
