use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_records;
use crate::errors::AppResult;
use crate::models::record::RecordSelector;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        id,
        name,
        gear,
        checkout_date,
    } = cmd
    {
        let selector = super::parse_selector(id, name, gear, checkout_date)?;

        //
        // Confirmation prompt
        //
        let prompt = match &selector {
            RecordSelector::ById(id) => {
                format!("Delete record #{}? This action is irreversible.", id)
            }
            RecordSelector::ByKey(key) => format!(
                "Delete every record matching {}? This action is irreversible.",
                key
            ),
        };

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let mut pool = DbPool::open(&cfg.database)?;
        let n = DeleteLogic::apply(&mut pool, &selector)?;

        if n > 0 {
            success(format!("{} record(s) deleted.", n));
        }

        // full reload after the mutation
        let records = load_all_records(&pool.conn)?;
        super::list::print_records(&records, cfg);
    }

    Ok(())
}
