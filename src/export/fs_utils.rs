// src/export/fs_utils.rs

use crate::errors::AppResult;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Write `bytes` to `path` through a sibling `.part` file.
///
/// The target is either fully replaced or left untouched; the `.part` file
/// never survives a failure.
pub(crate) fn write_atomically(path: &Path, bytes: &[u8]) -> AppResult<()> {
    let part = part_path(path);

    let result = fs::write(&part, bytes).and_then(|_| fs::rename(&part, path));
    if result.is_err() {
        fs::remove_file(&part).ok();
    }

    Ok(result?)
}

fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}

/// Characters that cannot appear in a file name on common platforms.
const INVALID_PATTERN: &str = r#"[\\/:*?"<>|\x00-\x1f]"#;

static INVALID: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(INVALID_PATTERN).ok());

/// Replace characters that cannot appear in a file name.
pub(crate) fn sanitize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim();

    let cleaned = match INVALID.as_ref() {
        Some(re) => re.replace_all(trimmed, "-").into_owned(),
        None => trimmed.replace(|c: char| "\\/:*?\"<>|".contains(c) || c.is_control(), "-"),
    };

    if cleaned.is_empty() {
        "export".to_string()
    } else {
        cleaned
    }
}
