// src/export/labels.rs
//
// Localized sheet, header and status labels.

pub const SHEET_DEFAULT: &str = "Sheet1";
pub const SHEET_GRADES: &str = "الدرجات";
pub const SHEET_ATTENDANCE: &str = "الحضور";

pub const HEADER_NAME: &str = "الاسم";
pub const HEADER_NATIONAL_ID: &str = "الرقم القومي";
pub const HEADER_STATUS: &str = "الحالة";

pub const SUFFIX_COURSEWORK: &str = "أعمال";
pub const SUFFIX_MIDTERM: &str = "ميدترم";
pub const SUFFIX_FINAL: &str = "نهائي";

pub const STATUS_PRESENT: &str = "حاضر";
pub const STATUS_ABSENT: &str = "غائب";
pub const STATUS_LATE: &str = "متأخر";

pub const ATTENDANCE_PREFIX: &str = "حضور";

/// Placeholder for a grade the student has no record of.
pub const GRADE_PLACEHOLDER: &str = "-";
