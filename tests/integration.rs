//! Integration tests that run the compile_walk CLI on the JSON worlds in
//! tests/integration/.

use std::path::{Path, PathBuf};
use std::process::Command;

use boughwalk::report_io::{REPORT_FILENAME, load_report};

fn world_path(name: &str) -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("integration")
    .join(name)
}

/// Runs the compile_walk binary. Returns (stdout, stderr, success).
fn run_compile_walk(args: &[&str], env: &[(&str, &str)]) -> (String, String, bool) {
  let mut cmd = Command::new(env!("CARGO_BIN_EXE_compile_walk"));
  cmd.args(args).env_remove("BOUGHWALK_VISIT_CEILING");
  for (k, v) in env {
    cmd.env(k, v);
  }
  let out = cmd.output().expect("run compile_walk");
  (
    String::from_utf8_lossy(&out.stdout).into_owned(),
    String::from_utf8_lossy(&out.stderr).into_owned(),
    out.status.success(),
  )
}

fn first_line(stdout: &str) -> &str {
  stdout.lines().next().unwrap_or_default()
}

#[test]
fn linear_world_out_and_back() {
  let path = world_path("linear.json");
  let (stdout, stderr, success) = run_compile_walk(&[path.to_str().expect("path")], &[]);
  assert!(success, "stderr={}", stderr);
  assert_eq!(first_line(&stdout), "e e e w w w");
  assert!(stdout.contains("Walk compiled."));
  assert!(stdout.contains("Rooms visited: 4"));
}

#[test]
fn branch_world_visits_both_dead_ends() {
  let path = world_path("branch.json");
  let (stdout, stderr, success) = run_compile_walk(&[path.to_str().expect("path")], &[]);
  assert!(success, "stderr={}", stderr);
  assert_eq!(first_line(&stdout), "e n s s n w");
}

#[test]
fn loop_world_walks_the_cycle() {
  let path = world_path("loop.json");
  let (stdout, stderr, success) = run_compile_walk(&[path.to_str().expect("path")], &[]);
  assert!(success, "stderr={}", stderr);
  assert_eq!(first_line(&stdout), "n e s w");
}

#[test]
fn start_flag_moves_the_walk() {
  let path = world_path("linear.json");
  let (stdout, _, success) =
    run_compile_walk(&["--start", "3", path.to_str().expect("path")], &[]);
  assert!(success);
  assert_eq!(first_line(&stdout), "w w w e e e");
  assert!(stdout.contains("Start: 3"));
}

#[test]
fn visit_ceiling_flag_cuts_the_walk() {
  let path = world_path("linear.json");
  let (stdout, _, success) =
    run_compile_walk(&["--visit-ceiling", "2", path.to_str().expect("path")], &[]);
  assert!(success);
  assert_eq!(first_line(&stdout), "e");
  assert!(stdout.contains("Rooms visited: 2"));
}

#[test]
fn env_overrides_visit_ceiling_flag() {
  let path = world_path("linear.json");
  let (stdout, _, success) = run_compile_walk(
    &["--visit-ceiling", "2", path.to_str().expect("path")],
    &[("BOUGHWALK_VISIT_CEILING", "3")],
  );
  assert!(success);
  assert_eq!(first_line(&stdout), "e e");
}

#[test]
fn invalid_env_ceiling_fails() {
  let path = world_path("linear.json");
  let (_, stderr, success) = run_compile_walk(
    &[path.to_str().expect("path")],
    &[("BOUGHWALK_VISIT_CEILING", "lots")],
  );
  assert!(!success);
  assert!(stderr.contains("BOUGHWALK_VISIT_CEILING"));
}

#[test]
fn report_flag_writes_json() {
  let dir = tempfile::tempdir().expect("tempdir");
  let report = dir.path().join("out").join("walk_report.json");
  let path = world_path("branch.json");
  let (_, stderr, success) = run_compile_walk(
    &[
      "--report",
      report.to_str().expect("path"),
      path.to_str().expect("path"),
    ],
    &[],
  );
  assert!(success, "stderr={}", stderr);
  let loaded = load_report(&report).expect("report");
  assert_eq!(loaded.start, 0);
  assert_eq!(loaded.moves.len(), 6);
  assert_eq!(loaded.rooms_visited, 4);
  assert!(!loaded.truncated());
}

#[test]
fn report_flag_accepts_a_directory() {
  let dir = tempfile::tempdir().expect("tempdir");
  let path = world_path("loop.json");
  let (_, stderr, success) = run_compile_walk(
    &[
      "--report",
      dir.path().to_str().expect("path"),
      path.to_str().expect("path"),
    ],
    &[],
  );
  assert!(success, "stderr={}", stderr);
  let loaded = load_report(&dir.path().join(REPORT_FILENAME)).expect("report");
  assert_eq!(loaded.moves_line(), "n e s w");
  assert!(loaded.unfolded.is_empty());
}

#[test]
fn dangling_exit_fails() {
  let path = world_path("dangling.json");
  let (_, stderr, success) = run_compile_walk(&[path.to_str().expect("path")], &[]);
  assert!(!success);
  assert!(stderr.contains("missing room 7"), "stderr={}", stderr);
}

#[test]
fn unknown_start_fails() {
  let path = world_path("linear.json");
  let (_, stderr, success) =
    run_compile_walk(&["--start", "99", path.to_str().expect("path")], &[]);
  assert!(!success);
  assert!(stderr.contains("start room 99"), "stderr={}", stderr);
}

#[test]
fn missing_file_fails() {
  let (_, stderr, success) = run_compile_walk(&["/nonexistent/world.json"], &[]);
  assert!(!success);
  assert!(stderr.contains("Error loading"));
}
