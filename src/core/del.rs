use crate::db::pool::DbPool;
use crate::db::queries::{delete_by_id, delete_by_key};
use crate::errors::AppResult;
use crate::models::record::RecordSelector;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete by id (one row) or by legacy key (every matching row).
    /// Returns the number of rows removed; zero is success, not an error.
    pub fn apply(pool: &mut DbPool, selector: &RecordSelector) -> AppResult<usize> {
        let n = match selector {
            RecordSelector::ById(id) => delete_by_id(&pool.conn, *id)?,
            RecordSelector::ByKey(key) => delete_by_key(&pool.conn, key)?,
        };

        if n == 0 {
            info(format!("No records matched {}", selector));
        } else {
            info(format!("Deleted {} record(s) for {}", n, selector));
        }

        Ok(n)
    }
}
