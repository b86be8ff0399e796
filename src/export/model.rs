// src/export/model.rs

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A source record: arbitrary field names mapped to JSON values.
pub type Record = serde_json::Map<String, Value>;

/// Placeholder used by the generic exporter when a field is absent.
pub const EMPTY_PLACEHOLDER: &str = "";

/// Maps an internal field name to the header shown in the spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub key: String,
    pub header: String,
}

impl ColumnSpec {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
        }
    }

    /// Parse a `key=Header` pair as given on the command line.
    pub fn parse(s: &str) -> AppResult<Self> {
        let (key, header) = s
            .split_once('=')
            .ok_or_else(|| AppError::InvalidColumn(format!("expected key=Header, got '{s}'")))?;

        let key = key.trim();
        let header = header.trim();
        if key.is_empty() || header.is_empty() {
            return Err(AppError::InvalidColumn(format!(
                "key and header must be non-empty: '{s}'"
            )));
        }

        Ok(Self::new(key, header))
    }
}

/// A scalar spreadsheet value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Convert a JSON value; `null` counts as absent.
    pub fn from_json(v: &Value) -> Option<Self> {
        match v {
            Value::Null => None,
            Value::Bool(b) => Some(CellValue::Bool(*b)),
            Value::Number(n) => Some(match n.as_f64() {
                Some(f) => CellValue::Number(f),
                None => CellValue::Text(n.to_string()),
            }),
            Value::String(s) => Some(CellValue::Text(s.clone())),
            other => Some(CellValue::Text(other.to_string())),
        }
    }

    /// Rendering used for width estimates and terminal output.
    pub fn display(&self) -> String {
        match self {
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

/// One output row, keyed by column header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportRow {
    cells: HashMap<String, CellValue>,
}

impl ExportRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: impl Into<String>, value: CellValue) {
        self.cells.insert(header.into(), value);
    }

    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells.get(header)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Tabular payload ready to be written: ordered headers plus header-keyed rows.
#[derive(Debug, Clone, Default)]
pub struct SheetData {
    pub headers: Vec<String>,
    pub rows: Vec<ExportRow>,
}

/// Project records into header-keyed rows.
///
/// Missing or `null` fields become the empty placeholder.
pub fn project_rows(data: &[Record], columns: &[ColumnSpec]) -> Vec<ExportRow> {
    data.iter()
        .map(|record| {
            let mut row = ExportRow::new();
            for col in columns {
                let value = record
                    .get(&col.key)
                    .and_then(CellValue::from_json)
                    .unwrap_or_else(|| CellValue::text(EMPTY_PLACEHOLDER));
                row.insert(col.header.clone(), value);
            }
            row
        })
        .collect()
}

/// First header appearing more than once, if any.
pub(crate) fn duplicate_header(headers: &[String]) -> Option<&str> {
    let mut seen = std::collections::HashSet::new();
    headers
        .iter()
        .find(|h| !seen.insert(h.as_str()))
        .map(String::as_str)
}
