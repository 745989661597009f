use assert_cmd::Command;
use predicates::prelude::*;
use rosterman::domain::StudentEntry;
use rosterman::store::{SqliteStudentStore, StudentStore};

#[test]
fn list_on_a_fresh_database_shows_the_empty_hint() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = dir.path().join("students.db");

    Command::cargo_bin("rosterman")
        .expect("binary exists")
        .arg("--database")
        .arg(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No students yet"));
}

#[tokio::test]
async fn list_shows_seeded_students() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = dir.path().join("students.db");

    let store = SqliteStudentStore::open(&db).expect("open store");
    store
        .insert(&StudentEntry::new("Alice Nguyen", "SV001").unwrap())
        .await
        .unwrap();
    store
        .insert(&StudentEntry::new("Bob Pham", "SV002").unwrap())
        .await
        .unwrap();

    Command::cargo_bin("rosterman")
        .expect("binary exists")
        .arg("--database")
        .arg(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Nguyen"))
        .stdout(predicate::str::contains("SV002"));
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = dir.path().join("rosterman.toml");
    std::fs::write(&config, "[logging]\nlevel = \"info\"\nformat = \"xml\"\n")
        .expect("write temp config");

    Command::cargo_bin("rosterman")
        .expect("binary exists")
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("logging.format"));
}

#[test]
fn cli_returns_nonzero_on_unparseable_config() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = dir.path().join("rosterman.toml");
    std::fs::write(&config, "this is not toml :::").expect("write temp config");

    Command::cargo_bin("rosterman")
        .expect("binary exists")
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
