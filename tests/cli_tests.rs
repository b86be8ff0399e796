mod common;
use chrono::Utc;
use common::{FakeBackend, fx, read_sheet, sample_request, write_json};
use predicates::str::contains;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_creates_config_once() {
    let cfg = tempdir().expect("tempdir");

    fx(&cfg)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Config file created"));
    assert!(cfg.path().join("fxsheet.conf").exists());

    fx(&cfg)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn test_config_print_shows_defaults() {
    let cfg = tempdir().expect("tempdir");

    fx(&cfg)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("api_base_url: http://localhost:8000"))
        .stdout(contains("timeout_secs: 30"));
}

#[test]
fn test_broken_config_is_reported() {
    let cfg = tempdir().expect("tempdir");
    fs::write(cfg.path().join("fxsheet.conf"), "timeout_secs: [not a number").expect("write");

    fx(&cfg)
        .args(["config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_export_table_with_inline_columns() {
    let cfg = tempdir().expect("tempdir");
    let work = tempdir().expect("tempdir");
    let data = write_json(
        work.path(),
        "staff.json",
        &json!([
            {"full_name": "Mona Adel", "national_id": "29901011234567"},
            {"full_name": "Omar Samy", "national_id": "30001011234567", "extra": true}
        ]),
    );

    fx(&cfg)
        .args(["export", "table", "--data", &data])
        .args(["--column", "full_name=الاسم", "--column", "national_id=الرقم القومي"])
        .args(["--prefix", "staff", "--dir"])
        .arg(work.path())
        .assert()
        .success()
        .stdout(contains("Table export completed"));

    let expected = work
        .path()
        .join(format!("staff_{}.xlsx", Utc::now().format("%Y-%m-%d")));
    let (sheets, rows) = read_sheet(&expected);
    assert_eq!(sheets, vec!["Sheet1".to_string()]);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec!["الاسم", "الرقم القومي"]);
    assert_eq!(rows[2], vec!["Omar Samy", "30001011234567"]);
}

#[test]
fn test_export_table_duplicate_headers_fail() {
    let cfg = tempdir().expect("tempdir");
    let work = tempdir().expect("tempdir");
    let data = write_json(work.path(), "d.json", &json!([{"a": 1, "b": 2}]));
    let columns = write_json(
        work.path(),
        "cols.json",
        &json!([{"key": "a", "header": "Same"}, {"key": "b", "header": "Same"}]),
    );

    fx(&cfg)
        .args(["export", "table", "--data", &data, "--columns", &columns])
        .args(["--prefix", "dup", "--dir"])
        .arg(work.path())
        .assert()
        .failure()
        .stderr(contains("duplicate column header 'Same'"));

    let xlsx_count = fs::read_dir(work.path())
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .map(|e| e.path().extension().is_some_and(|x| x == "xlsx"))
                .unwrap_or(false)
        })
        .count();
    assert_eq!(xlsx_count, 0);
}

#[test]
fn test_export_table_requires_columns() {
    let cfg = tempdir().expect("tempdir");
    let work = tempdir().expect("tempdir");
    let data = write_json(work.path(), "d.json", &json!([]));

    fx(&cfg)
        .args(["export", "table", "--data", &data, "--prefix", "x"])
        .assert()
        .failure();
}

#[test]
fn test_export_grades_from_json() {
    let cfg = tempdir().expect("tempdir");
    let work = tempdir().expect("tempdir");
    let students = write_json(
        work.path(),
        "students.json",
        &json!([{"full_name": "A", "national_id": "1", "subjects": []}]),
    );
    let subjects = write_json(work.path(), "subjects.json", &json!([{"id": 5, "name": "Math"}]));

    fx(&cfg)
        .args(["export", "grades", "--students", &students, "--subjects", &subjects])
        .args(["--prefix", "grades", "--dir"])
        .arg(work.path())
        .assert()
        .success()
        .stdout(contains("Grades export completed"));

    let expected = work
        .path()
        .join(format!("grades_{}.xlsx", Utc::now().format("%Y-%m-%d")));
    let (sheets, rows) = read_sheet(&expected);
    assert_eq!(sheets, vec!["الدرجات".to_string()]);
    assert_eq!(rows[1], vec!["A", "1", "-", "-", "-"]);
}

#[test]
fn test_upload_without_file_fails_before_network() {
    let cfg = tempdir().expect("tempdir");

    // nothing listens on this port; a request would fail differently
    fx(&cfg)
        .args(["--api", "http://127.0.0.1:9", "upload", "--target", "staff"])
        .assert()
        .failure()
        .stdout(contains("national_id"))
        .stderr(contains("يرجى اختيار ملف"));
}

#[test]
fn test_upload_rejects_unsupported_extension() {
    let cfg = tempdir().expect("tempdir");

    fx(&cfg)
        .args(["upload", "--file", "notes.txt"])
        .assert()
        .failure()
        .stderr(contains("Unsupported upload file"));
}

#[test]
fn test_upload_prints_result_summary() {
    let cfg = tempdir().expect("tempdir");
    let work = tempdir().expect("tempdir");
    let file = work.path().join("staff.csv");
    fs::write(&file, "national_id,full_name\n1,A\n").expect("write csv");

    let errors: Vec<String> = (1..=7).map(|i| format!("Row {i}: bad id")).collect();
    let backend = FakeBackend::start(move |_| {
        (200, json!({"created": 3, "skipped": 1, "errors": errors}))
    });

    let assert = fx(&cfg)
        .args(["--api", &backend.base_url, "--token", "tok", "upload", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("تم إنشاء: 3 حساب"))
        .stdout(contains("أخطاء: 7"))
        .stdout(contains("Row 5: bad id"));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(!stdout.contains("Row 6: bad id"));
    assert_eq!(
        backend.requests()[0].authorization.as_deref(),
        Some("Bearer tok")
    );
}

#[test]
fn test_upload_failure_shows_server_message() {
    let cfg = tempdir().expect("tempdir");
    let work = tempdir().expect("tempdir");
    let file = work.path().join("doctors.xlsx");
    fs::write(&file, b"stub").expect("write file");

    let backend = FakeBackend::start(|_| (400, json!({"error": "Missing required columns"})));

    fx(&cfg)
        .env("FXSHEET_TOKEN", "from-env")
        .args(["--api", &backend.base_url, "upload", "--target", "doctors", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(contains("Missing required columns"));

    let req = &backend.requests()[0];
    assert_eq!(req.url, "/api/academic/staff-affairs/upload-doctors/");
    assert_eq!(req.authorization.as_deref(), Some("Bearer from-env"));
}

#[test]
fn test_requests_list_renders_table() {
    let cfg = tempdir().expect("tempdir");
    let backend = FakeBackend::start(|_| (200, json!([sample_request(12, None)])));

    fx(&cfg)
        .args(["--api", &backend.base_url, "requests", "list"])
        .assert()
        .success()
        .stdout(contains("الطلبات المعلقة (1)"))
        .stdout(contains("د. أحمد علي"))
        .stdout(contains("2025-10-02"));
}

#[test]
fn test_requests_list_unauthorized() {
    let cfg = tempdir().expect("tempdir");
    let backend = FakeBackend::start(|_| (401, json!({"detail": "expired"})));

    fx(&cfg)
        .args(["--api", &backend.base_url, "requests", "list"])
        .assert()
        .failure()
        .stderr(contains("Unauthorized"));
}

#[test]
fn test_requests_approve_refetches() {
    let cfg = tempdir().expect("tempdir");
    let backend = FakeBackend::start(|req| match req.method.as_str() {
        "POST" => (200, json!({"message": "ok"})),
        _ => (200, json!([])),
    });

    fx(&cfg)
        .args(["--api", &backend.base_url, "requests", "approve", "4", "--yes"])
        .assert()
        .success()
        .stdout(contains("تمت الموافقة على الحذف"))
        .stdout(contains("لا توجد طلبات حذف معلقة"));

    let methods: Vec<String> = backend.requests().into_iter().map(|r| r.method).collect();
    assert_eq!(methods, vec!["POST", "GET"]);
}

#[test]
fn test_requests_reject_cancelled_without_confirmation() {
    let cfg = tempdir().expect("tempdir");
    let backend = FakeBackend::start(|_| (200, json!([])));

    fx(&cfg)
        .args(["--api", &backend.base_url, "requests", "reject", "4"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    assert!(backend.requests().is_empty());
}

#[test]
fn test_template_csv_lists_expected_columns() {
    let cfg = tempdir().expect("tempdir");
    let work = tempdir().expect("tempdir");
    let file = work.path().join("students.csv");

    fx(&cfg)
        .args(["template", "--target", "students", "--file"])
        .arg(&file)
        .assert()
        .success();

    let content = fs::read_to_string(&file).expect("template");
    assert_eq!(
        content.trim_end(),
        "national_id,full_name,academic_year,level,department_code"
    );
}

#[test]
fn test_template_xlsx_has_header_row() {
    let cfg = tempdir().expect("tempdir");
    let work = tempdir().expect("tempdir");
    let file = work.path().join("staff.xlsx");

    fx(&cfg)
        .args(["template", "--file"])
        .arg(&file)
        .assert()
        .success();

    let (sheets, rows) = read_sheet(&file);
    assert_eq!(sheets, vec!["staff".to_string()]);
    assert_eq!(rows, vec![vec!["national_id", "full_name", "email"]]);
}

#[test]
fn test_export_attendance_normalizes_records() {
    let cfg = tempdir().expect("tempdir");
    let work = tempdir().expect("tempdir");
    let records = write_json(
        work.path(),
        "attendance.json",
        &json!([
            {"full_name": "Ali", "national_id": "1", "status": "PRESENT"},
            {"student_name": "Laila", "student_national_id": "2", "status": "LATE"}
        ]),
    );

    fx(&cfg)
        .args(["export", "attendance", "--records", &records])
        .args(["--course", "Circuits", "--date", "2025-10-04", "--dir"])
        .arg(work.path())
        .assert()
        .success()
        .stdout(contains("Attendance export completed"));

    let expected = work.path().join(format!(
        "حضور_Circuits_2025-10-04_{}.xlsx",
        Utc::now().format("%Y-%m-%d")
    ));
    let (sheets, rows) = read_sheet(&expected);
    assert_eq!(sheets, vec!["الحضور".to_string()]);
    assert_eq!(rows[2], vec!["Laila", "2", "متأخر"]);
}
