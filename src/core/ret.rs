use crate::db::pool::DbPool;
use crate::db::queries::{set_return_status_by_id, set_return_status_by_key};
use crate::errors::AppResult;
use crate::models::record::RecordSelector;
use crate::models::return_status::ReturnStatus;
use crate::ui::messages::info;

/// Business logic for the `return` command.
pub struct ReturnLogic;

impl ReturnLogic {
    /// Mark matching rows as returned. Only the returned flag changes;
    /// every other field keeps its stored value.
    pub fn apply(pool: &mut DbPool, selector: &RecordSelector) -> AppResult<usize> {
        let n = match selector {
            RecordSelector::ById(id) => {
                set_return_status_by_id(&pool.conn, *id, ReturnStatus::Yes)?
            }
            RecordSelector::ByKey(key) => {
                set_return_status_by_key(&pool.conn, key, ReturnStatus::Yes)?
            }
        };

        if n == 0 {
            info(format!("No records matched {}", selector));
        }

        Ok(n)
    }
}
