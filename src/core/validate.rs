//! Local input validation for record fields.
//! Checks run in a fixed order: emptiness → date format → returned value.
//! No store access happens here; a failed check never reaches the database.

use crate::errors::{AppError, AppResult};
use crate::models::record::RecordDraft;
use crate::models::return_status::ReturnStatus;
use regex::Regex;

/// Fixed-width date pattern. Format only: `2025-13-99` passes.
const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

pub fn is_valid_date(s: &str) -> bool {
    Regex::new(DATE_PATTERN)
        .expect("date pattern is a valid regex")
        .is_match(s)
}

/// Validate the five user fields and build a draft ready for the store.
pub fn validate_fields(
    name: &str,
    gear: &str,
    checkout_date: &str,
    due_date: &str,
    returned: &str,
) -> AppResult<RecordDraft> {
    let name = name.trim();
    let gear = gear.trim();
    let checkout_date = checkout_date.trim();
    let due_date = due_date.trim();
    let returned = returned.trim();

    // 1. Emptiness
    if name.is_empty() {
        return Err(AppError::EmptyField("name"));
    }
    if gear.is_empty() {
        return Err(AppError::EmptyField("gear"));
    }
    if checkout_date.is_empty() {
        return Err(AppError::EmptyField("checkout date"));
    }
    if due_date.is_empty() {
        return Err(AppError::EmptyField("due date"));
    }
    if returned.is_empty() {
        return Err(AppError::EmptyField("returned"));
    }

    // 2. Date format
    if !is_valid_date(checkout_date) {
        return Err(AppError::InvalidDate(checkout_date.to_string()));
    }
    if !is_valid_date(due_date) {
        return Err(AppError::InvalidDate(due_date.to_string()));
    }

    // 3. Returned flag (case-insensitive input, canonical storage)
    let returned = ReturnStatus::from_input(returned)
        .ok_or_else(|| AppError::InvalidReturned(returned.to_string()))?;

    Ok(RecordDraft {
        name: name.to_string(),
        gear: gear.to_string(),
        checkout_date: checkout_date.to_string(),
        due_date: due_date.to_string(),
        returned,
    })
}
