use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ret::ReturnLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_records;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Return {
        id,
        name,
        gear,
        checkout_date,
    } = cmd
    {
        let selector = super::parse_selector(id, name, gear, checkout_date)?;

        let mut pool = DbPool::open(&cfg.database)?;
        let n = ReturnLogic::apply(&mut pool, &selector)?;

        if n > 0 {
            success(format!("{} record(s) marked as returned.", n));
        }

        // full reload after the mutation
        let records = load_all_records(&pool.conn)?;
        super::list::print_records(&records, cfg);
    }

    Ok(())
}
