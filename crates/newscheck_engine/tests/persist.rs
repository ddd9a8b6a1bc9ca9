use std::fs;

use newscheck_engine::{ensure_state_dir, read_if_exists, AtomicFileWriter, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_state_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("state").join("nested");
    assert!(!new_dir.exists());
    ensure_state_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("prefs.ron", "(theme: \"light\")").unwrap();
    assert_eq!(first.file_name().unwrap(), "prefs.ron");
    assert_eq!(fs::read_to_string(&first).unwrap(), "(theme: \"light\")");

    let second = writer.write("prefs.ron", "(theme: \"dark\")").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "(theme: \"dark\")");
}

#[test]
fn state_dir_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("prefs.ron", "data");
    assert!(matches!(result, Err(PersistError::StateDir { .. })));
    assert!(!file_path.with_file_name("prefs.ron").exists());
}

#[test]
fn missing_file_reads_as_none() {
    let temp = TempDir::new().unwrap();
    assert!(read_if_exists(temp.path(), "absent.ron").unwrap().is_none());

    fs::write(temp.path().join("present.ron"), "content").unwrap();
    assert_eq!(
        read_if_exists(temp.path(), "present.ron").unwrap().as_deref(),
        Some("content")
    );
}
