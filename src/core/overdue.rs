use crate::db::pool::DbPool;
use crate::db::queries::load_overdue;
use crate::errors::AppResult;

/// Fixed report shown when nothing is overdue.
pub const EMPTY_REPORT: &str = "No overdue gear found.";

/// Business logic for the `overdue` command.
pub struct OverdueLogic;

impl OverdueLogic {
    /// Build the overdue report for the given reference date: one line per
    /// unreturned record whose due date is before `today`.
    pub fn report(pool: &mut DbPool, today: &str) -> AppResult<String> {
        let records = load_overdue(&pool.conn, today)?;

        if records.is_empty() {
            return Ok(EMPTY_REPORT.to_string());
        }

        let lines: Vec<String> = records
            .iter()
            .map(|rec| {
                format!(
                    "Name: {}, Gear: {}, Due: {}",
                    rec.name, rec.gear, rec.due_date
                )
            })
            .collect();

        Ok(lines.join("\n"))
    }
}
