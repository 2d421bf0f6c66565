use std::fs;

use govatar_engine::{ensure_output_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("public");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_bytes() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("logo.jpg", b"first bytes").unwrap();
    assert_eq!(first.file_name().unwrap(), "logo.jpg");
    assert_eq!(fs::read(&first).unwrap(), b"first bytes");

    // A rerun replaces the rendition in place.
    let second = writer.write("logo.jpg", b"second bytes").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&second).unwrap(), b"second bytes");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("logo.jpg", b"data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("logo.jpg").exists());
}
