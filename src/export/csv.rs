use crate::errors::AppResult;
use crate::models::record::CheckoutRecord;
use csv::Writer;

/// Write the records to a CSV file with a header row.
pub fn write_csv(path: &str, records: &[CheckoutRecord]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["id", "name", "gear", "checkout_date", "due_date", "returned"])?;

    for rec in records {
        wtr.write_record(&[
            rec.id.to_string(),
            rec.name.clone(),
            rec.gear.clone(),
            rec.checkout_date.clone(),
            rec.due_date.clone(),
            rec.returned.to_db_str().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
