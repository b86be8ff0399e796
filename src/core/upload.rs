use crate::api::{IngestionApi, UploadResult, UploadTarget};
use crate::errors::{AppError, AppResult};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Shown when submit is attempted without a file.
pub const NO_FILE_MESSAGE: &str = "يرجى اختيار ملف";
/// Shown when the server gives no usable error text.
pub const GENERIC_FAILURE_MESSAGE: &str = "حدث خطأ أثناء رفع الملف";

const ACCEPTED_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "csv"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    FileSelected(PathBuf),
    Uploading(PathBuf),
    Succeeded { file: PathBuf, result: UploadResult },
    Failed { file: Option<PathBuf>, message: String },
}

/// Client half of a bulk upload: one file, one POST, one rendered outcome.
pub struct Uploader<'a, A: IngestionApi> {
    api: &'a A,
    target: UploadTarget,
    state: UploadState,
}

impl<'a, A: IngestionApi> Uploader<'a, A> {
    pub fn new(api: &'a A, target: UploadTarget) -> Self {
        Self {
            api,
            target,
            state: UploadState::Idle,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// Select a file, clearing any previous result or error.
    pub fn select_file(&mut self, path: impl Into<PathBuf>) -> AppResult<()> {
        let path = path.into();

        if !has_accepted_extension(&path) {
            return Err(AppError::UnsupportedFile(path.display().to_string()));
        }

        debug!("upload file selected: {}", path.display());
        self.state = UploadState::FileSelected(path);
        Ok(())
    }

    /// File kept across outcomes so the user can resubmit.
    fn selected_file(&self) -> Option<&PathBuf> {
        match &self.state {
            UploadState::Idle => None,
            UploadState::FileSelected(f) | UploadState::Uploading(f) => Some(f),
            UploadState::Succeeded { file, .. } => Some(file),
            UploadState::Failed { file, .. } => file.as_ref(),
        }
    }

    /// Upload the selected file and move to `Succeeded` or `Failed`.
    ///
    /// Without a file this fails immediately and never touches the network.
    /// The state is `Uploading` only while the request is in flight; the
    /// exclusive borrow keeps a second submit out until this one returns.
    pub fn submit(&mut self) -> &UploadState {
        let Some(file) = self.selected_file().cloned() else {
            self.state = UploadState::Failed {
                file: None,
                message: NO_FILE_MESSAGE.to_string(),
            };
            return &self.state;
        };

        self.state = UploadState::Uploading(file.clone());
        info!("uploading {} to {}", file.display(), self.target.endpoint());

        self.state = match self.api.upload(self.target, &file) {
            Ok(result) => UploadState::Succeeded { file, result },
            Err(e) => {
                log::warn!("upload failed: {e}");
                UploadState::Failed {
                    file: Some(file),
                    message: failure_message(&e),
                }
            }
        };

        &self.state
    }
}

fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| ACCEPTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Server-supplied error string if present, else the generic message.
pub fn failure_message(err: &AppError) -> String {
    err.server_message()
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}
