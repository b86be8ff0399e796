//! Unified application error type.
//! All modules (api, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input data: {0}")]
    InvalidData(String),

    // ---------------------------
    // User input
    // ---------------------------
    /// Raised before any network call when the uploader has no file.
    #[error("{0}")]
    NoFileSelected(String),

    #[error("Unsupported upload file '{0}': use .xlsx, .xls or .csv")]
    UnsupportedFile(String),

    #[error("Invalid column definition: {0}")]
    InvalidColumn(String),

    // ---------------------------
    // Transport / server
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server rejected the request (HTTP {status})")]
    Server {
        status: u16,
        message: Option<String>,
    },

    #[error("Unauthorized: the access token is missing, expired or invalid (set --token or FXSHEET_TOKEN)")]
    Unauthorized,

    /// Upload failed; carries the message shown to the user.
    #[error("{0}")]
    Upload(String),

    /// Deletion-request list or action failed; carries the user message.
    #[error("{0}")]
    Review(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Server-supplied message, when the backend sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
