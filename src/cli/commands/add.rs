use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::validate::validate_fields;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_records;
use crate::errors::AppResult;

/// Record a new gear checkout.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        gear,
        checkout_date,
        due_date,
        returned,
    } = cmd
    {
        //
        // 1. Validate locally — a failure never reaches the store
        //
        let draft = validate_fields(name, gear, checkout_date, due_date, returned)?;

        //
        // 2. Open DB and insert
        //
        let mut pool = DbPool::open(&cfg.database)?;
        AddLogic::apply(&mut pool, &draft)?;

        //
        // 3. Full reload after the mutation
        //
        let records = load_all_records(&pool.conn)?;
        super::list::print_records(&records, cfg);
    }

    Ok(())
}
