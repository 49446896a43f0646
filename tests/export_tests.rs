use predicates::str::contains;
use std::fs;

mod common;
use common::{glg, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_export_csv_contains_all_records() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    glg()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,gear,checkout_date,due_date,returned")
    );
    assert!(content.contains("Alice,Mixer,2024-01-01,2024-01-10,No"));
    assert!(content.contains("Bob,Microphone,2024-02-01,2024-02-15,No"));
}

#[test]
fn test_export_json_is_parseable() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    glg()
        .args([
            "--db", &db_path, "--test", "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("json export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("parse json");
    let records = parsed.as_array().expect("array of records");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "Alice");
    assert_eq!(records[0]["gear"], "Mixer");
    assert_eq!(records[0]["returned"], "No");
    assert_eq!(records[1]["due_date"], "2024-02-15");
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_no_force");
    let out = temp_out("export_no_force", "csv");
    init_db_with_data(&db_path);

    fs::write(&out, "existing content").expect("seed file");

    glg()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));

    // target untouched
    let content = fs::read_to_string(&out).expect("read file");
    assert_eq!(content, "existing content");
}

#[test]
fn test_export_force_overwrites() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_db_with_data(&db_path);

    fs::write(&out, "existing content").expect("seed file");

    glg()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.starts_with("id,name,gear"));
}

#[test]
fn test_export_empty_store_writes_header_only_csv() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");

    glg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    glg()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert_eq!(
        content.trim_end(),
        "id,name,gear,checkout_date,due_date,returned"
    );
}
