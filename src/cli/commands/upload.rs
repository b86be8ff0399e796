use crate::api::UploadTarget;
use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::upload::{UploadState, Uploader};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::report::upload_result_lines;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Upload { target, file } = cmd else {
        return Ok(());
    };

    print_expected_columns(*target);

    if ctx.credential.is_none() {
        warning("No access token configured: the backend will most likely refuse the upload.");
    }

    let client = ctx.client()?;
    let mut uploader = Uploader::new(&client, *target);

    if let Some(f) = file {
        uploader.select_file(expand_tilde(f))?;
    }

    match uploader.submit() {
        UploadState::Succeeded { result, .. } => {
            let mut lines = upload_result_lines(result).into_iter();
            if let Some(first) = lines.next() {
                success(first);
            }
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
        UploadState::Failed { file: None, message } => Err(AppError::NoFileSelected(message.clone())),
        UploadState::Failed { message, .. } => Err(AppError::Upload(message.clone())),
        other => Err(AppError::Other(format!("unexpected upload state: {other:?}"))),
    }
}

fn print_expected_columns(target: UploadTarget) {
    let cols: Vec<String> = target
        .expected_columns()
        .iter()
        .map(|(name, required)| {
            if *required {
                name.to_string()
            } else {
                format!("{name} (اختياري)")
            }
        })
        .collect();

    info(format!("Expected columns: {}", cols.join(", ")));
}
