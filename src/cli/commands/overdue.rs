use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::overdue::OverdueLogic;
use crate::core::validate::is_valid_date;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Overdue { today } = cmd {
        let today = match today {
            Some(t) => {
                if !is_valid_date(t) {
                    return Err(AppError::InvalidDate(t.clone()));
                }
                t.clone()
            }
            None => date::today_str(),
        };

        let mut pool = DbPool::open(&cfg.database)?;
        let report = OverdueLogic::report(&mut pool, &today)?;

        // the report is displayed verbatim
        println!("{}", report);
    }

    Ok(())
}
