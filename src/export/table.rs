// src/export/table.rs

use crate::export::model::{ColumnSpec, Record};
use crate::export::{ExportOutcome, Exporter};

impl Exporter {
    /// Plain table export with the default sheet name.
    pub fn export_table(&self, data: &[Record], columns: &[ColumnSpec], prefix: &str) -> ExportOutcome {
        self.export(data, columns, prefix, None)
    }
}
