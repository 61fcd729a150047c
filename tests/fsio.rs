//! Source reading, output path resolution and payload writing.

use std::fs;
use std::path::{Path, PathBuf};

use pnghex::fsio::{read_binary, write_payload, write_text, DecodeSource};
use pnghex::HexError;
use tempfile::TempDir;

#[test]
fn source_requires_file_or_text() {
    assert!(matches!(DecodeSource::from_args(None, None), Err(HexError::InputMissing)));
    assert_eq!(
        DecodeSource::from_args(None, Some("89".into())).unwrap(),
        DecodeSource::Text("89".into())
    );
    assert_eq!(
        DecodeSource::from_args(Some("a.txt".into()), Some("89".into())).unwrap(),
        DecodeSource::File("a.txt".into())
    );
}

#[test]
fn missing_source_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.txt");
    let err = DecodeSource::File(path.clone()).read().unwrap_err();
    assert!(matches!(err, HexError::FileNotFound(p) if p == path));
}

#[test]
fn whitespace_only_source_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.txt");
    fs::write(&path, "  \n\t\n").unwrap();
    assert!(matches!(DecodeSource::File(path).read(), Err(HexError::EmptyInput)));
    assert!(matches!(DecodeSource::Text(" ".into()).read(), Err(HexError::EmptyInput)));
}

#[test]
fn reads_source_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dump.txt");
    fs::write(&path, "89504e47\n").unwrap();
    assert_eq!(DecodeSource::File(path).read().unwrap(), "89504e47\n");
}

#[test]
fn bare_output_lands_next_to_input_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("dump.txt");
    let out = DecodeSource::File(input).resolve_output(Path::new("out.png")).unwrap();
    assert_eq!(out, dir.path().join("out.png"));
}

#[test]
fn bare_output_for_text_lands_in_cwd() {
    let out = DecodeSource::Text("x".into()).resolve_output(Path::new("out.png")).unwrap();
    assert_eq!(out, std::env::current_dir().unwrap().join("out.png"));
}

#[test]
fn output_with_directory_is_kept() {
    let source = DecodeSource::File("somewhere/dump.txt".into());
    let out = source.resolve_output(Path::new("images/out.png")).unwrap();
    assert_eq!(out, PathBuf::from("images/out.png"));
}

#[test]
fn write_payload_creates_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a").join("b").join("out.png");
    let written = write_payload(&path, &[1, 2, 3]).unwrap();
    assert!(written.is_absolute());
    assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3]);
}

#[test]
fn read_binary_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.png");
    assert!(matches!(read_binary(&path), Err(HexError::FileNotFound(_))));
}

#[test]
fn write_then_read_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dump.txt");
    write_text(&path, "00ff").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "00ff");
}
