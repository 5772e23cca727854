//! Tests for report save/load.

use crate::error::ReportError;
use crate::report_io::{REPORT_FILENAME, load_report, report_path, save_report};
use crate::types::{Direction, WalkReport};

fn report() -> WalkReport {
  WalkReport {
    start: 0,
    moves: vec![Direction::East, Direction::West],
    compiled_len: 2,
    rooms_visited: 2,
    visit_ceiling: 500,
    rooms_mapped: 2,
    junctions: 0,
    fold_passes: 0,
    unfolded: vec![],
  }
}

#[test]
fn saved_report_loads_back() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("run").join("walk.json");
  assert_eq!(save_report(&path, &report()).unwrap(), path);
  assert!(path.exists());
  assert_eq!(load_report(&path).unwrap(), report());

  let text = std::fs::read_to_string(&path).unwrap();
  assert!(text.contains(r#""moves": ["#));
  assert!(text.contains(r#""e""#));
}

#[test]
fn directory_target_gets_default_filename() {
  let dir = tempfile::tempdir().unwrap();
  assert_eq!(report_path(dir.path()), dir.path().join(REPORT_FILENAME));
  assert_eq!(report_path(&dir.path().join("a.json")), dir.path().join("a.json"));

  let written = save_report(dir.path(), &report()).unwrap();
  assert_eq!(written, dir.path().join(REPORT_FILENAME));
  assert_eq!(load_report(dir.path()).unwrap(), report());
}

#[test]
fn trailing_separator_names_a_new_directory() {
  let dir = tempfile::tempdir().unwrap();
  let target = format!("{}/out/", dir.path().display());
  let written = save_report(std::path::Path::new(&target), &report()).unwrap();
  assert_eq!(written, dir.path().join("out").join(REPORT_FILENAME));
  assert!(written.exists());
}

#[test]
fn load_missing_file_returns_error() {
  let dir = tempfile::tempdir().unwrap();
  let err = load_report(&dir.path().join("nonexistent.json")).unwrap_err();
  assert!(matches!(err, ReportError::Io { .. }));
  assert!(err.to_string().contains("nonexistent.json"));
}

#[test]
fn load_garbage_is_json_error() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(REPORT_FILENAME);
  std::fs::write(&path, "not json").unwrap();
  assert!(matches!(load_report(&path), Err(ReportError::Json(_))));
}
