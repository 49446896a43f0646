use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::update::UpdateLogic;
use crate::core::validate::validate_fields;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_records;
use crate::errors::AppResult;

/// Replace all fields of an existing record.
/// The new values go through the same validation as `add`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        id,
        name,
        gear,
        checkout_date,
        due_date,
        returned,
    } = cmd
    {
        let draft = validate_fields(name, gear, checkout_date, due_date, returned)?;

        let mut pool = DbPool::open(&cfg.database)?;
        UpdateLogic::apply(&mut pool, *id, &draft)?;

        // full reload after the mutation
        let records = load_all_records(&pool.conn)?;
        super::list::print_records(&records, cfg);
    }

    Ok(())
}
