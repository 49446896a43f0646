use crate::db::pool::DbPool;
use crate::db::queries::{load_by_id, update_record};
use crate::errors::{AppError, AppResult};
use crate::models::record::RecordDraft;
use crate::ui::messages::success;

/// Business logic for the `update` command.
pub struct UpdateLogic;

impl UpdateLogic {
    /// Rewrite all five fields of an existing record in one statement.
    /// An unknown id is an error, not a no-op; the store is left unchanged.
    pub fn apply(pool: &mut DbPool, id: i64, draft: &RecordDraft) -> AppResult<()> {
        if load_by_id(&pool.conn, id)?.is_none() {
            return Err(AppError::RecordNotFound(id));
        }

        update_record(&pool.conn, id, draft)?;

        success(format!("Record #{} updated.", id));
        Ok(())
    }
}
