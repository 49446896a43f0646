#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn glg() -> Command {
    cargo_bin_cmd!("gearlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gearlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates schema)
    glg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    glg()
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            "Alice",
            "Mixer",
            "2024-01-01",
            "2024-01-10",
            "No",
        ])
        .assert()
        .success();

    glg()
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            "Bob",
            "Microphone",
            "2024-02-01",
            "2024-02-15",
            "No",
        ])
        .assert()
        .success();
}

/// Insert a record directly via the library DB API (bypasses the CLI)
pub fn insert_direct(db_path: &str, name: &str, gear: &str, checkout: &str, due: &str, ret: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    gearlog::db::initialize::init_db(&conn).expect("init db");
    let draft = gearlog::core::validate::validate_fields(name, gear, checkout, due, ret)
        .expect("valid fields");
    gearlog::db::queries::insert_record(&conn, &draft).expect("insert record");
}

/// Number of rows currently stored (the schema must exist)
pub fn count_records(db_path: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM checkout_records", [], |r| r.get(0))
        .expect("count records")
}

/// All rows as (name, gear, checkout_date, due_date, returned) tuples in id order
pub fn all_rows(db_path: &str) -> Vec<(String, String, String, String, String)> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let mut stmt = conn
        .prepare(
            "SELECT name, gear, checkout_date, due_date, returned
             FROM checkout_records ORDER BY id ASC",
        )
        .expect("prepare");
    let rows = stmt
        .query_map([], |r| {
            Ok((
                r.get(0)?,
                r.get(1)?,
                r.get(2)?,
                r.get(3)?,
                r.get(4)?,
            ))
        })
        .expect("query");
    rows.map(|r| r.expect("row")).collect()
}
