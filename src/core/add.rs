use crate::db::pool::DbPool;
use crate::db::queries::insert_record;
use crate::errors::AppResult;
use crate::models::record::RecordDraft;
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Insert a validated draft and report the new record id.
    pub fn apply(pool: &mut DbPool, draft: &RecordDraft) -> AppResult<i64> {
        let id = insert_record(&pool.conn, draft)?;

        success(format!(
            "Recorded checkout #{}: {} → {} (due {})",
            id, draft.name, draft.gear, draft.due_date
        ));

        Ok(id)
    }
}
