//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database not initialized: {0} — run `gearlog init` first")]
    DatabaseMissing(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid returned value: {0} (expected 'Yes' or 'No')")]
    InvalidReturned(String),

    #[error("Specify either --id or a full name/gear/checkout-date key")]
    MissingSelector,

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No record found with id {0}")]
    RecordNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
