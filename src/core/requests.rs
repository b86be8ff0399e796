use crate::api::{DeletionRequest, ReviewAction, ReviewApi};
use crate::errors::{AppError, AppResult};
use log::warn;

pub const LOAD_FAILED_MESSAGE: &str = "فشل تحميل طلبات الحذف";
pub const ACTION_FAILED_MESSAGE: &str = "فشل تنفيذ الإجراء";
pub const APPROVED_MESSAGE: &str = "تمت الموافقة على الحذف";
pub const REJECTED_MESSAGE: &str = "تم رفض الطلب";

/// Result of a moderation action: confirmation text plus the refetched list.
#[derive(Debug)]
pub struct ReviewOutcome {
    pub message: &'static str,
    pub requests: AppResult<Vec<DeletionRequest>>,
}

pub struct ReviewLogic;

impl ReviewLogic {
    pub fn load<A: ReviewApi>(api: &A) -> AppResult<Vec<DeletionRequest>> {
        api.list_requests().map_err(|e| {
            warn!("loading deletion requests failed: {e}");
            match e {
                AppError::Unauthorized => AppError::Unauthorized,
                _ => AppError::Review(LOAD_FAILED_MESSAGE.to_string()),
            }
        })
    }

    /// Apply `action` to request `id`, then refetch the whole list.
    ///
    /// No local removal: the list always comes back from the server.
    pub fn act<A: ReviewApi>(api: &A, id: i64, action: ReviewAction) -> AppResult<ReviewOutcome> {
        if let Err(e) = api.review(id, action) {
            warn!("{} on deletion request {id} failed: {e}", action.as_str());
            return Err(match e {
                AppError::Unauthorized => AppError::Unauthorized,
                _ => AppError::Review(ACTION_FAILED_MESSAGE.to_string()),
            });
        }

        let message = match action {
            ReviewAction::Approve => APPROVED_MESSAGE,
            ReviewAction::Reject => REJECTED_MESSAGE,
        };

        Ok(ReviewOutcome {
            message,
            requests: Self::load(api),
        })
    }
}
