//! Integration tests exercising the full `check_file()` flow on real files.
//!
//! These test what a user sees: the report produced for a file on disk and
//! the rendered output text, including the open-failure and partial-result
//! paths.

use std::fs;
use std::path::PathBuf;

use longlines::error::LongLinesError;
use longlines::{Report, check_file, format};

fn fixture(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn file_of_lengths(dir: &tempfile::TempDir, name: &str, lengths: &[usize]) -> PathBuf {
    let mut content = Vec::new();
    for &len in lengths {
        content.extend(vec![b'a'; len]);
        content.push(b'\n');
    }
    fixture(dir, name, &content)
}

#[test]
fn mixed_lengths_reports_lines_3_and_4() {
    let dir = tempfile::tempdir().unwrap();
    let path = file_of_lengths(&dir, "mixed.txt", &[10, 80, 81, 200]);

    let report = check_file(&path).unwrap();
    assert_eq!(report.total_lines, 4);
    assert_eq!(report.over_length, vec![3, 4]);

    let output = format::render(&report);
    assert!(
        output.contains("The length of the line at line number 3 is greater than 80 characters.")
    );
    assert!(
        output.contains("The length of the line at line number 4 is greater than 80 characters.")
    );
    assert!(output.contains("Total 2 lines have a length of more than 80 characters."));
}

#[test]
fn empty_file_reports_no_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "empty.txt", b"");

    let report = check_file(&path).unwrap();
    assert_eq!(report.total_lines, 0);
    assert!(report.over_length.is_empty());

    let output = format::render(&report);
    assert!(output.contains("No lines have a length of more than 80 characters."));
}

#[test]
fn single_unterminated_90_char_line_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "unterminated.txt", &[b'q'; 90]);

    let report = check_file(&path).unwrap();
    assert_eq!(report.total_lines, 1);
    assert_eq!(report.over_length, vec![1]);
}

#[test]
fn nonexistent_path_is_an_open_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    let err = check_file(&path).unwrap_err();
    match &err {
        LongLinesError::NotFound { path: p } => assert_eq!(p, &path),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_ne!(err.exit_code(), 0);
    // The message names the offending path
    assert!(err.to_string().contains("does-not-exist.txt"));
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = file_of_lengths(&dir, "stable.txt", &[5, 100, 80, 81, 0, 300]);

    let first = check_file(&path).unwrap();
    let second = check_file(&path).unwrap();

    assert_eq!(first.total_lines, second.total_lines);
    assert_eq!(first.over_length, second.over_length);
    assert_eq!(format::render(&first), format::render(&second));
}

#[test]
fn lines_spanning_multiple_read_increments() {
    let dir = tempfile::tempdir().unwrap();
    // One 5000-byte line followed by a short one
    let mut content = vec![b'w'; 5000];
    content.push(b'\n');
    content.extend_from_slice(b"short\n");
    let path = fixture(&dir, "big.txt", &content);

    let report = check_file(&path).unwrap();
    assert_eq!(report.total_lines, 2);
    assert_eq!(report.over_length, vec![1]);
}

#[test]
fn exactly_80_chars_is_not_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = file_of_lengths(&dir, "boundary.txt", &[80]);

    let report = check_file(&path).unwrap();
    assert_eq!(report.total_lines, 1);
    assert!(report.over_length.is_empty());
}

#[test]
fn render_is_stable_for_a_clean_report() {
    let report = Report {
        total_lines: 2,
        over_length: vec![],
        failure: None,
    };
    assert_eq!(
        format::render(&report),
        "No lines have a length of more than 80 characters.\n"
    );
}
