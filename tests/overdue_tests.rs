use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{glg, init_db_with_data, setup_test_db};

#[test]
fn test_overdue_scenario_checkout_then_return() {
    let db_path = setup_test_db("overdue_scenario");

    glg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    glg()
        .args([
            "--db",
            &db_path,
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
        .args(["--db", &db_path, "--test", "overdue", "--today", "2024-06-01"])
        .assert()
        .success()
        .stdout(contains("Name: Alice, Gear: Mixer, Due: 2024-01-10"));

    glg()
        .args([
            "--db",
            &db_path,
            "--test",
            "return",
            "Alice",
            "Mixer",
            "2024-01-01",
        ])
        .assert()
        .success();

    // same reference date, nothing left to report
    glg()
        .args(["--db", &db_path, "--test", "overdue", "--today", "2024-06-01"])
        .assert()
        .success()
        .stdout(contains("No overdue gear found."))
        .stdout(contains("Name: Alice").not());
}

#[test]
fn test_overdue_is_strict_comparison() {
    let db_path = setup_test_db("overdue_boundary");

    glg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // due exactly today → not overdue
    glg()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "Alice",
            "Mixer",
            "2024-01-01",
            "2024-06-01",
            "No",
        ])
        .assert()
        .success();

    // due in the future → not overdue
    glg()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "Bob",
            "Cable",
            "2024-01-01",
            "2024-07-15",
            "No",
        ])
        .assert()
        .success();

    // due yesterday → overdue
    glg()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "Carol",
            "Stand",
            "2024-01-01",
            "2024-05-31",
            "No",
        ])
        .assert()
        .success();

    glg()
        .args(["--db", &db_path, "--test", "overdue", "--today", "2024-06-01"])
        .assert()
        .success()
        .stdout(contains("Name: Carol, Gear: Stand, Due: 2024-05-31"))
        .stdout(contains("Alice").not())
        .stdout(contains("Bob").not());
}

#[test]
fn test_overdue_excludes_returned_gear() {
    let db_path = setup_test_db("overdue_excludes_returned");
    init_db_with_data(&db_path);

    glg()
        .args(["--db", &db_path, "--test", "return", "--id", "1"])
        .assert()
        .success();

    // Alice's mixer is long overdue but already back
    glg()
        .args(["--db", &db_path, "--test", "overdue", "--today", "2024-06-01"])
        .assert()
        .success()
        .stdout(contains("Name: Bob, Gear: Microphone, Due: 2024-02-15"))
        .stdout(contains("Alice").not());
}

#[test]
fn test_overdue_empty_store_prints_sentinel() {
    let db_path = setup_test_db("overdue_empty");

    glg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    glg()
        .args(["--db", &db_path, "--test", "overdue", "--today", "2024-06-01"])
        .assert()
        .success()
        .stdout(contains("No overdue gear found."));
}

#[test]
fn test_overdue_rejects_malformed_reference_date() {
    let db_path = setup_test_db("overdue_bad_today");
    init_db_with_data(&db_path);

    glg()
        .args(["--db", &db_path, "--test", "overdue", "--today", "2024/06/01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: 2024/06/01"));
}

#[test]
fn test_overdue_reports_one_line_per_match() {
    let db_path = setup_test_db("overdue_multi");
    init_db_with_data(&db_path);

    glg()
        .args(["--db", &db_path, "--test", "overdue", "--today", "2024-06-01"])
        .assert()
        .success()
        .stdout(contains("Name: Alice, Gear: Mixer, Due: 2024-01-10"))
        .stdout(contains("Name: Bob, Gear: Microphone, Due: 2024-02-15"));
}
