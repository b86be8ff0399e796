use crate::cli::parser::{Commands, RequestsAction};
use crate::cli::commands::ask_confirmation;
use crate::context::AppContext;
use crate::core::requests::ReviewLogic;
use crate::errors::{AppError, AppResult};
use crate::api::DeletionRequest;
use crate::ui::messages::{error, header, info, success};
use crate::ui::report::{EMPTY_REQUESTS_MESSAGE, requests_table, requests_title};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Requests { action } = cmd else {
        return Ok(());
    };

    let client = ctx.client()?;

    let Some((id, review, yes)) = action.review() else {
        print_requests(&ReviewLogic::load(&client)?);
        return Ok(());
    };

    let prompt = format!("{} deletion request #{id}? This action is irreversible.", capitalize(review.as_str()));
    if !yes && !ask_confirmation(&prompt) {
        info("Operation cancelled.");
        return Ok(());
    }

    let outcome = ReviewLogic::act(&client, id, review)?;
    success(outcome.message);

    match outcome.requests {
        Ok(list) => print_requests(&list),
        Err(e @ AppError::Unauthorized) => return Err(e),
        Err(e) => error(e),
    }

    Ok(())
}

fn print_requests(requests: &[DeletionRequest]) {
    if requests.is_empty() {
        info(EMPTY_REQUESTS_MESSAGE);
        return;
    }

    header(requests_title(requests.len()));
    print!("{}", requests_table(requests));
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
