use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Creates the `checkout_records` table and its indexes if absent.
/// Safe to call before every operation.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS checkout_records (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            gear          TEXT NOT NULL,
            checkout_date TEXT NOT NULL,
            due_date      TEXT NOT NULL,
            returned      TEXT NOT NULL CHECK(returned IN ('Yes','No'))
        );

        CREATE INDEX IF NOT EXISTS idx_records_key ON checkout_records(name, gear, checkout_date);
        CREATE INDEX IF NOT EXISTS idx_records_due ON checkout_records(due_date, returned);
        "#,
    )?;
    Ok(())
}
