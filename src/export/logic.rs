use crate::db::pool::DbPool;
use crate::db::queries::load_all_records;
use crate::errors::AppResult;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::{ExportFormat, notify_export_success};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every record to the requested file and format.
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let records = load_all_records(&pool.conn)?;

        match format {
            ExportFormat::Csv => write_csv(file, &records)?,
            ExportFormat::Json => write_json(file, &records)?,
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}
