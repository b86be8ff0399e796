// src/export/grades.rs

use crate::export::labels::{
    GRADE_PLACEHOLDER, HEADER_NAME, HEADER_NATIONAL_ID, SHEET_GRADES, SUFFIX_COURSEWORK,
    SUFFIX_FINAL, SUFFIX_MIDTERM,
};
use crate::export::model::{CellValue, ExportRow, SheetData};
use crate::export::xlsx::GRADES_MIN_WIDTH;
use crate::export::{ExportOutcome, Exporter};
use serde::{Deserialize, Serialize};

/// A subject column group in the grade sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
}

/// One student's grades for one subject; every component may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectGrades {
    pub subject_id: i64,
    #[serde(default)]
    pub coursework: Option<CellValue>,
    #[serde(default)]
    pub midterm: Option<CellValue>,
    #[serde(default, rename = "final")]
    pub final_exam: Option<CellValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub full_name: String,
    pub national_id: String,
    #[serde(default)]
    pub subjects: Vec<SubjectGrades>,
}

impl GradeRecord {
    /// Grades for `subject_id`; the first match wins.
    pub fn grades_for(&self, subject_id: i64) -> Option<&SubjectGrades> {
        self.subjects.iter().find(|s| s.subject_id == subject_id)
    }
}

fn grade_headers(subject: &Subject) -> [String; 3] {
    [
        format!("{} - {}", subject.name, SUFFIX_COURSEWORK),
        format!("{} - {}", subject.name, SUFFIX_MIDTERM),
        format!("{} - {}", subject.name, SUFFIX_FINAL),
    ]
}

/// Build the grade sheet: name, national ID, then three columns per subject
/// in `subjects` order.
pub fn grade_sheet(students: &[GradeRecord], subjects: &[Subject]) -> SheetData {
    let mut headers = vec![HEADER_NAME.to_string(), HEADER_NATIONAL_ID.to_string()];
    for subject in subjects {
        headers.extend(grade_headers(subject));
    }

    let placeholder = || CellValue::text(GRADE_PLACEHOLDER);

    let rows = students
        .iter()
        .map(|student| {
            let mut row = ExportRow::new();
            row.insert(HEADER_NAME, CellValue::text(&student.full_name));
            row.insert(HEADER_NATIONAL_ID, CellValue::text(&student.national_id));

            for subject in subjects {
                let empty = SubjectGrades::default();
                let grades = student.grades_for(subject.id).unwrap_or(&empty);
                let [cw, mid, fin] = grade_headers(subject);

                row.insert(cw, grades.coursework.clone().unwrap_or_else(placeholder));
                row.insert(mid, grades.midterm.clone().unwrap_or_else(placeholder));
                row.insert(fin, grades.final_exam.clone().unwrap_or_else(placeholder));
            }

            row
        })
        .collect();

    SheetData { headers, rows }
}

impl Exporter {
    /// Export a grade sheet named `الدرجات`.
    pub fn export_grades(
        &self,
        students: &[GradeRecord],
        subjects: &[Subject],
        prefix: &str,
    ) -> ExportOutcome {
        let sheet = grade_sheet(students, subjects);
        self.write_sheet(&sheet, prefix, SHEET_GRADES, GRADES_MIN_WIDTH)
    }
}
