use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for gearlog
/// CLI application to track equipment checkout records with SQLite
#[derive(Parser)]
#[command(
    name = "gearlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple gear checkout CLI: track equipment loans and overdue returns using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a new gear checkout
    Add {
        /// Borrower name
        name: String,

        /// Equipment identifier
        gear: String,

        /// Checkout date (YYYY-MM-DD)
        checkout_date: String,

        /// Due date (YYYY-MM-DD)
        due_date: String,

        /// Returned flag: Yes or No (case-insensitive)
        returned: String,
    },

    /// List checkout records
    List {
        /// Filter by returned status (yes/no)
        #[arg(long = "returned", value_name = "YES|NO")]
        returned: Option<String>,
    },

    /// Delete records by id or by (name, gear, checkout date) key
    Del {
        /// Record id to delete (single record)
        #[arg(long = "id", conflicts_with_all = ["name", "gear", "checkout_date"])]
        id: Option<i64>,

        /// Borrower name (legacy key; deletes every matching record)
        #[arg(requires = "gear")]
        name: Option<String>,

        /// Equipment identifier (legacy key)
        #[arg(requires = "checkout_date")]
        gear: Option<String>,

        /// Checkout date (legacy key, YYYY-MM-DD)
        checkout_date: Option<String>,
    },

    /// Mark records as returned, by id or by (name, gear, checkout date) key
    Return {
        /// Record id to mark returned (single record)
        #[arg(long = "id", conflicts_with_all = ["name", "gear", "checkout_date"])]
        id: Option<i64>,

        /// Borrower name (legacy key; marks every matching record)
        #[arg(requires = "gear")]
        name: Option<String>,

        /// Equipment identifier (legacy key)
        #[arg(requires = "checkout_date")]
        gear: Option<String>,

        /// Checkout date (legacy key, YYYY-MM-DD)
        checkout_date: Option<String>,
    },

    /// Replace all fields of an existing record (atomic, by id)
    Update {
        /// Id of the record to update
        #[arg(long = "id")]
        id: i64,

        /// New borrower name
        name: String,

        /// New equipment identifier
        gear: String,

        /// New checkout date (YYYY-MM-DD)
        checkout_date: String,

        /// New due date (YYYY-MM-DD)
        due_date: String,

        /// New returned flag: Yes or No (case-insensitive)
        returned: String,
    },

    /// Report gear that is past due and not yet returned
    Overdue {
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long = "today", value_name = "DATE")]
        today: Option<String>,
    },

    /// Export checkout records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
