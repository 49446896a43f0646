use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let mut cfg = Config::load();
    if let Some(custom) = &cli.db {
        cfg.database = custom.clone();
    }
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing gearlog…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);
    println!("🎉 gearlog initialization completed!");
    Ok(())
}
