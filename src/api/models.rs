//! Wire types exchanged with the faculty backend.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Outcome of a bulk ingestion call.
///
/// Staff and doctor uploads skip rows that already exist and report `skipped`.
/// Student uploads update existing rows instead and report `updated`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub created: u64,
    #[serde(default)]
    pub skipped: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<u64>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Error payload returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionRequest {
    pub id: i64,
    pub doctor_name: String,
    pub doctor_national_id: String,
    pub requested_by_name: String,
    #[serde(default)]
    pub reason: Option<String>,
    pub created_at: String,
}

impl DeletionRequest {
    /// Calendar date of `created_at`, or the raw value if it does not parse.
    pub fn created_date(&self) -> String {
        let raw = self.created_at.trim();

        if let Ok(dt) = DateTime::<FixedOffset>::parse_from_rfc3339(raw) {
            return dt.date_naive().format("%Y-%m-%d").to_string();
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return dt.date().format("%Y-%m-%d").to_string();
        }
        if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return d.format("%Y-%m-%d").to_string();
        }

        raw.to_string()
    }

    pub fn reason_or_dash(&self) -> &str {
        match self.reason.as_deref() {
            Some(r) if !r.trim().is_empty() => r,
            _ => "-",
        }
    }
}

/// The two terminal moderation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewAction::Approve => "approve",
            ReviewAction::Reject => "reject",
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReviewBody {
    pub action: ReviewAction,
}

/// Bulk ingestion endpoints sharing the [`UploadResult`] contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UploadTarget {
    /// Student-affairs staff accounts
    Staff,
    /// Doctor accounts
    Doctors,
    /// Student records
    Students,
}

impl UploadTarget {
    pub fn endpoint(&self) -> &'static str {
        match self {
            UploadTarget::Staff => "/api/academic/staff-affairs/upload-staff/",
            UploadTarget::Doctors => "/api/academic/staff-affairs/upload-doctors/",
            UploadTarget::Students => "/api/academic/student-affairs/upload/",
        }
    }

    /// Expected spreadsheet columns as `(name, required)`.
    pub fn expected_columns(&self) -> &'static [(&'static str, bool)] {
        match self {
            UploadTarget::Staff | UploadTarget::Doctors => {
                &[("national_id", true), ("full_name", true), ("email", false)]
            }
            UploadTarget::Students => &[
                ("national_id", true),
                ("full_name", true),
                ("academic_year", true),
                ("level", true),
                ("department_code", false),
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadTarget::Staff => "staff",
            UploadTarget::Doctors => "doctors",
            UploadTarget::Students => "students",
        }
    }
}
