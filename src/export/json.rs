use crate::errors::AppResult;
use crate::models::record::CheckoutRecord;

/// Write the records as pretty-printed JSON.
pub fn write_json(path: &str, records: &[CheckoutRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}
