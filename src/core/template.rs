use crate::api::UploadTarget;
use crate::errors::{AppError, AppResult};
use crate::export::{DEFAULT_MIN_WIDTH, SheetData, write_sheet_file};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    Xlsx,
    Csv,
}

impl TemplateFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("xlsx") => Ok(TemplateFormat::Xlsx),
            Some("csv") => Ok(TemplateFormat::Csv),
            _ => Err(AppError::InvalidData(format!(
                "template file must end in .xlsx or .csv: {}",
                path.display()
            ))),
        }
    }
}

pub struct TemplateLogic;

impl TemplateLogic {
    /// Column names the backend expects for `target`, in upload order.
    pub fn headers(target: UploadTarget) -> Vec<String> {
        target
            .expected_columns()
            .iter()
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Write an empty upload template (header row only).
    pub fn write(target: UploadTarget, path: &Path) -> AppResult<TemplateFormat> {
        let format = TemplateFormat::from_path(path)?;
        let headers = Self::headers(target);

        match format {
            TemplateFormat::Xlsx => {
                let data = SheetData {
                    headers,
                    rows: Vec::new(),
                };
                write_sheet_file(path, &data, target.as_str(), DEFAULT_MIN_WIDTH)?;
            }
            TemplateFormat::Csv => {
                let mut wtr = csv::Writer::from_path(path)
                    .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;
                wtr.write_record(&headers)
                    .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
                wtr.flush()?;
            }
        }

        Ok(format)
    }
}
