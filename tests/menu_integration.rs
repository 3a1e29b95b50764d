use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn bookshelf(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bookshelf").unwrap();
    cmd.env("BOOKSHELF_HOME", home)
        .env_remove("BOOKSHELF_FILE")
        .env_remove("BOOKSHELF_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_creates_library_file_on_start() {
    let temp_dir = tempfile::tempdir().unwrap();
    let library = temp_dir.path().join("library.json");

    bookshelf(temp_dir.path())
        .arg("--file")
        .arg(&library)
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the console library!"))
        .stdout(predicate::str::contains("Exiting."));

    assert_eq!(fs::read_to_string(&library).unwrap(), "[]");
}

#[test]
fn test_add_search_and_list_persist() {
    let temp_dir = tempfile::tempdir().unwrap();
    let library = temp_dir.path().join("library.json");

    bookshelf(temp_dir.path())
        .arg("--file")
        .arg(&library)
        .write_stdin("1\nWar and Peace\nTolstoy\n1869\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("added to the library"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&library).unwrap()).unwrap();
    assert_eq!(saved[0]["title"], "War and Peace");
    assert_eq!(saved[0]["year"], 1869);
    assert_eq!(saved[0]["status"], "available");

    bookshelf(temp_dir.path())
        .arg("--file")
        .arg(&library)
        .write_stdin("3\ntol\n3\n1870\n4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tolstoy"))
        .stdout(predicate::str::contains("No books found."));
}

#[test]
fn test_idempotent_status_change_leaves_file_untouched() {
    let temp_dir = tempfile::tempdir().unwrap();
    let library = temp_dir.path().join("library.json");
    fs::write(
        &library,
        r#"[{"id": "1", "title": "Dune", "author": "Herbert", "year": 1965, "status": "available"}]"#,
    )
    .unwrap();
    let before = fs::read(&library).unwrap();

    bookshelf(temp_dir.path())
        .arg("--file")
        .arg(&library)
        .write_stdin("5\n1\n1\n5\n1\n3\n2\n404\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("already available"))
        .stdout(predicate::str::contains("Invalid status code"))
        .stdout(predicate::str::contains("Book with ID 404 not found."));

    assert_eq!(fs::read(&library).unwrap(), before);
}

#[test]
fn test_file_from_environment() {
    let temp_dir = tempfile::tempdir().unwrap();
    let library = temp_dir.path().join("from-env.json");

    bookshelf(temp_dir.path())
        .env("BOOKSHELF_FILE", &library)
        .write_stdin("6\n")
        .assert()
        .success();

    assert!(library.exists());
}

#[test]
fn test_storage_path_from_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let library = temp_dir.path().join("configured.json");
    fs::write(
        temp_dir.path().join("config.json"),
        serde_json::json!({ "storage_path": library }).to_string(),
    )
    .unwrap();

    bookshelf(temp_dir.path())
        .write_stdin("6\n")
        .assert()
        .success();

    assert!(library.exists());
}

#[test]
fn test_corrupt_file_warns_and_continues() {
    let temp_dir = tempfile::tempdir().unwrap();
    let library = temp_dir.path().join("library.json");
    fs::write(&library, "[{ broken").unwrap();

    bookshelf(temp_dir.path())
        .arg("--file")
        .arg(&library)
        .write_stdin("4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not read library data"))
        .stdout(predicate::str::contains("The library is empty."))
        .stderr(predicate::str::contains("failed to read library data"));

    assert_eq!(fs::read_to_string(&library).unwrap(), "[{ broken");
}

#[test]
fn test_strict_mode_reports_corrupt_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let library = temp_dir.path().join("library.json");
    fs::write(&library, "not json").unwrap();

    bookshelf(temp_dir.path())
        .arg("--file")
        .arg(&library)
        .arg("--strict")
        .write_stdin("1\nDune\nHerbert\n1965\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("is corrupt"))
        .stdout(predicate::str::contains("added").not());

    assert_eq!(fs::read_to_string(&library).unwrap(), "not json");
}

#[test]
fn test_malformed_config_fails_startup() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("config.json"), "{").unwrap();

    bookshelf(temp_dir.path())
        .write_stdin("6\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Config error"));
}
