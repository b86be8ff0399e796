#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use calamine::{Data, Reader, open_workbook_auto};
use serde_json::{Value, json};
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;
use tempfile::TempDir;
use tiny_http::{Header, Response, Server};

use fxsheet::export::Record;

/// fxsheet binary isolated from the user's config and token.
pub fn fx(config_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("fxsheet");
    cmd.env("FXSHEET_CONFIG", config_dir.path().join("fxsheet.conf"))
        .env_remove("FXSHEET_TOKEN")
        .env("NO_COLOR", "1");
    cmd
}

pub fn record(v: Value) -> Record {
    match v {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub fn records(v: Value) -> Vec<Record> {
    match v {
        Value::Array(items) => items.into_iter().map(record).collect(),
        other => panic!("expected a JSON array, got {other}"),
    }
}

pub fn write_json(dir: &Path, name: &str, v: &Value) -> String {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(v).expect("serialize")).expect("write json");
    path.to_string_lossy().to_string()
}

/// Sheet names plus every cell of the first sheet rendered as text.
pub fn read_sheet(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut wb = open_workbook_auto(path).expect("open exported workbook");
    let names = wb.sheet_names().to_vec();
    let range = wb.worksheet_range(&names[0]).expect("read first sheet");

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    (names, rows)
}

/// Raw calamine cell at (row, col) of the first sheet.
pub fn read_cell(path: &Path, row: usize, col: usize) -> Data {
    let mut wb = open_workbook_auto(path).expect("open exported workbook");
    let names = wb.sheet_names().to_vec();
    let range = wb.worksheet_range(&names[0]).expect("read first sheet");
    range
        .get((row, col))
        .cloned()
        .unwrap_or(Data::Empty)
}

fn cell_text(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Request as seen by the fake backend.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

/// In-process HTTP backend answering every request through `responder`.
pub struct FakeBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeBackend {
    pub fn start<F>(responder: F) -> Self
    where
        F: Fn(&Recorded) -> (u16, Value) + Send + 'static,
    {
        let server = Server::http("127.0.0.1:0").expect("bind fake backend");
        let port = server
            .server_addr()
            .to_ip()
            .expect("tcp listener")
            .port();

        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        thread::spawn(move || {
            for mut req in server.incoming_requests() {
                let mut body = Vec::new();
                req.as_reader().read_to_end(&mut body).ok();

                let header = |name: &str| {
                    req.headers()
                        .iter()
                        .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case(name))
                        .map(|h| h.value.as_str().to_string())
                };

                let rec = Recorded {
                    method: req.method().as_str().to_string(),
                    url: req.url().to_string(),
                    authorization: header("Authorization"),
                    content_type: header("Content-Type"),
                    body: String::from_utf8_lossy(&body).into_owned(),
                };

                let (status, payload) = responder(&rec);
                log.lock().expect("request log").push(rec);

                let response = Response::from_string(payload.to_string())
                    .with_status_code(status)
                    .with_header(
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .expect("static header"),
                    );
                let _ = req.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("request log").clone()
    }
}

pub fn sample_request(id: i64, reason: Option<&str>) -> Value {
    json!({
        "id": id,
        "doctor_name": "د. أحمد علي",
        "doctor_national_id": "29801011234567",
        "requested_by_name": "شئون العاملين",
        "reason": reason,
        "created_at": "2025-10-02T09:15:00Z"
    })
}
