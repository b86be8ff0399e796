//! Text rendering of upload results and deletion-request lists.

use crate::api::{DeletionRequest, UploadResult};
use crate::utils::table::{Column, Table};

/// Only the first few row errors are listed; the total is always shown.
pub const MAX_DISPLAYED_ERRORS: usize = 5;

pub const EMPTY_REQUESTS_MESSAGE: &str = "لا توجد طلبات حذف معلقة";

/// Lines describing a successful upload.
///
/// An `updated` count replaces the skipped line.
pub fn upload_result_lines(result: &UploadResult) -> Vec<String> {
    let mut lines = vec![
        "تم رفع الملف بنجاح!".to_string(),
        format!("تم إنشاء: {} حساب", result.created),
    ];

    lines.push(match result.updated {
        Some(updated) => format!("تم تحديث: {updated} (موجود مسبقاً)"),
        None => format!("تم تخطي: {} (موجود مسبقاً)", result.skipped),
    });

    if !result.errors.is_empty() {
        lines.push(format!("أخطاء: {}", result.errors.len()));
        lines.extend(
            result
                .errors
                .iter()
                .take(MAX_DISPLAYED_ERRORS)
                .map(|e| format!("  {e}")),
        );
    }

    lines
}

pub fn requests_title(count: usize) -> String {
    format!("الطلبات المعلقة ({count})")
}

/// Deletion requests as a plain-text table.
pub fn requests_table(requests: &[DeletionRequest]) -> String {
    let mut table = Table::new(vec![
        Column::new("#"),
        Column::new("الدكتور"),
        Column::new("الرقم القومي"),
        Column::new("مقدم الطلب"),
        Column::new("السبب"),
        Column::new("التاريخ"),
    ]);

    for req in requests {
        table.add_row(vec![
            req.id.to_string(),
            req.doctor_name.clone(),
            req.doctor_national_id.clone(),
            req.requested_by_name.clone(),
            req.reason_or_dash().to_string(),
            req.created_date(),
        ]);
    }

    table.render()
}
