use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_records, load_by_status};
use crate::errors::{AppError, AppResult};
use crate::models::record::CheckoutRecord;
use crate::models::return_status::ReturnStatus;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};
use unicode_width::UnicodeWidthStr;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { returned } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        let records = match returned {
            Some(flag) => {
                let status = ReturnStatus::from_input(flag)
                    .ok_or_else(|| AppError::InvalidReturned(flag.clone()))?;
                load_by_status(&pool.conn, status)?
            }
            None => load_all_records(&pool.conn)?,
        };

        print_records(&records, cfg);
    }
    Ok(())
}

/// Render the full record table. Mutating commands call this too, so every
/// operation ends with a fresh view of the store.
pub fn print_records(records: &[CheckoutRecord], cfg: &Config) {
    if records.is_empty() {
        println!("No checkout records.");
        return;
    }

    header("Checkout Records");

    let headers = ["Id", "Name", "Gear", "Checkout", "Due", "Returned"];
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|rec| {
            vec![
                rec.id.to_string(),
                rec.name.clone(),
                rec.gear.clone(),
                rec.checkout_date.clone(),
                rec.due_date.clone(),
                rec.returned.to_db_str().to_string(),
            ]
        })
        .collect();

    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let columns = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| Column {
            header: h.to_string(),
            width: *w,
        })
        .collect();

    let mut table = Table::new(columns);
    for row in rows {
        table.add_row(row);
    }

    println!("{}", table.render(&cfg.separator_char));
}
