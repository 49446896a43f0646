pub mod add;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod overdue;
pub mod ret;
pub mod update;

use crate::errors::{AppError, AppResult};
use crate::models::record::{RecordKey, RecordSelector};

/// Resolve the shared `--id` / legacy-key arguments of `del` and `return`.
/// Exactly one addressing form must be present; a partial key is rejected
/// before any store access.
pub(crate) fn parse_selector(
    id: &Option<i64>,
    name: &Option<String>,
    gear: &Option<String>,
    checkout_date: &Option<String>,
) -> AppResult<RecordSelector> {
    if let Some(id) = id {
        return Ok(RecordSelector::ById(*id));
    }

    match (name, gear, checkout_date) {
        (Some(n), Some(g), Some(c)) => Ok(RecordSelector::ByKey(RecordKey {
            name: n.clone(),
            gear: g.clone(),
            checkout_date: c.clone(),
        })),
        _ => Err(AppError::MissingSelector),
    }
}
