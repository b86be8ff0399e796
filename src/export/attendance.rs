// src/export/attendance.rs

use crate::export::labels::{
    ATTENDANCE_PREFIX, HEADER_NAME, HEADER_NATIONAL_ID, HEADER_STATUS, SHEET_ATTENDANCE,
    STATUS_ABSENT, STATUS_LATE, STATUS_PRESENT,
};
use crate::export::model::{ColumnSpec, Record};
use crate::export::{ExportOutcome, Exporter};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    /// Any other literal, passed through unchanged.
    Other(String),
}

impl AttendanceStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "PRESENT" => AttendanceStatus::Present,
            "ABSENT" => AttendanceStatus::Absent,
            "LATE" => AttendanceStatus::Late,
            other => AttendanceStatus::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AttendanceStatus::Present => STATUS_PRESENT,
            AttendanceStatus::Absent => STATUS_ABSENT,
            AttendanceStatus::Late => STATUS_LATE,
            AttendanceStatus::Other(s) => s,
        }
    }
}

/// Attendance row as upstream endpoints return it. Depending on the source
/// the name and ID live under `full_name`/`national_id` or
/// `student_name`/`student_national_id`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawAttendance {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub student_national_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Canonical attendance record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub full_name: String,
    pub national_id: String,
    pub status: AttendanceStatus,
}

fn first_non_empty(primary: Option<String>, fallback: Option<String>) -> String {
    primary
        .filter(|s| !s.is_empty())
        .or(fallback)
        .unwrap_or_default()
}

impl RawAttendance {
    pub fn normalize(self) -> AttendanceRecord {
        AttendanceRecord {
            full_name: first_non_empty(self.full_name, self.student_name),
            national_id: first_non_empty(self.national_id, self.student_national_id),
            status: AttendanceStatus::parse(self.status.as_deref().unwrap_or_default()),
        }
    }
}

impl From<RawAttendance> for AttendanceRecord {
    fn from(raw: RawAttendance) -> Self {
        raw.normalize()
    }
}

pub fn attendance_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("full_name", HEADER_NAME),
        ColumnSpec::new("national_id", HEADER_NATIONAL_ID),
        ColumnSpec::new("status", HEADER_STATUS),
    ]
}

impl AttendanceRecord {
    fn to_record(&self) -> Record {
        let mut r = Record::new();
        r.insert("full_name".into(), Value::String(self.full_name.clone()));
        r.insert("national_id".into(), Value::String(self.national_id.clone()));
        r.insert("status".into(), Value::String(self.status.label().to_string()));
        r
    }
}

impl Exporter {
    /// Export attendance as `حضور_{course}_{date}_{export date}.xlsx`.
    pub fn export_attendance(
        &self,
        records: &[AttendanceRecord],
        course_name: &str,
        date: &str,
    ) -> ExportOutcome {
        let data: Vec<Record> = records.iter().map(AttendanceRecord::to_record).collect();
        let prefix = format!("{ATTENDANCE_PREFIX}_{course_name}_{date}");

        self.export(&data, &attendance_columns(), &prefix, Some(SHEET_ATTENDANCE))
    }
}
