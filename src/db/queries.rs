use crate::errors::{AppError, AppResult};
use crate::models::record::{CheckoutRecord, RecordDraft, RecordKey};
use crate::models::return_status::ReturnStatus;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<CheckoutRecord> {
    let returned_str: String = row.get("returned")?;
    let returned = ReturnStatus::from_db_str(&returned_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidReturned(returned_str.clone())),
        )
    })?;

    Ok(CheckoutRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        gear: row.get("gear")?,
        checkout_date: row.get("checkout_date")?,
        due_date: row.get("due_date")?,
        returned,
    })
}

/// Insert one record and return its generated id.
/// No uniqueness is enforced: duplicate keys are permitted.
pub fn insert_record(conn: &Connection, draft: &RecordDraft) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO checkout_records (name, gear, checkout_date, due_date, returned)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            draft.name,
            draft.gear,
            draft.checkout_date,
            draft.due_date,
            draft.returned.to_db_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All records in insertion order.
pub fn load_all_records(conn: &Connection) -> AppResult<Vec<CheckoutRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, gear, checkout_date, due_date, returned
         FROM checkout_records
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Records filtered by returned status, insertion order.
pub fn load_by_status(conn: &Connection, status: ReturnStatus) -> AppResult<Vec<CheckoutRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, gear, checkout_date, due_date, returned
         FROM checkout_records
         WHERE returned = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([status.to_db_str()], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_by_id(conn: &Connection, id: i64) -> AppResult<Option<CheckoutRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, gear, checkout_date, due_date, returned
         FROM checkout_records
         WHERE id = ?1",
    )?;

    let rec = stmt.query_row([id], map_row).optional()?;
    Ok(rec)
}

pub fn delete_by_id(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM checkout_records WHERE id = ?1", [id])?;
    Ok(n)
}

/// Delete every row whose (name, gear, checkout_date) matches exactly.
/// Zero matches is a valid outcome, not an error.
pub fn delete_by_key(conn: &Connection, key: &RecordKey) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM checkout_records
         WHERE name = ?1 AND gear = ?2 AND checkout_date = ?3",
        params![key.name, key.gear, key.checkout_date],
    )?;
    Ok(n)
}

pub fn set_return_status_by_id(
    conn: &Connection,
    id: i64,
    status: ReturnStatus,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE checkout_records SET returned = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    Ok(n)
}

/// Set `returned` on every row matching the key. Only the returned column
/// is touched; all other fields are preserved as stored.
pub fn set_return_status_by_key(
    conn: &Connection,
    key: &RecordKey,
    status: ReturnStatus,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE checkout_records SET returned = ?1
         WHERE name = ?2 AND gear = ?3 AND checkout_date = ?4",
        params![status.to_db_str(), key.name, key.gear, key.checkout_date],
    )?;
    Ok(n)
}

/// Rows with a due date strictly before `today` that are still out.
/// Both sides are "YYYY-MM-DD" text, so lexicographic order equals
/// calendar order.
pub fn load_overdue(conn: &Connection, today: &str) -> AppResult<Vec<CheckoutRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, gear, checkout_date, due_date, returned
         FROM checkout_records
         WHERE due_date < ?1 AND returned = 'No'
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([today], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Rewrite all five user fields of one record in a single statement.
/// Returns the number of rows changed (0 when the id does not exist).
pub fn update_record(conn: &Connection, id: i64, draft: &RecordDraft) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE checkout_records
         SET name = ?1, gear = ?2, checkout_date = ?3,
             due_date = ?4, returned = ?5
         WHERE id = ?6",
        params![
            draft.name,
            draft.gear,
            draft.checkout_date,
            draft.due_date,
            draft.returned.to_db_str(),
            id,
        ],
    )?;
    Ok(n)
}
