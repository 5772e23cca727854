//! Walk report save/load (JSON).
//!
//! A report target naming a directory (an existing one, or a path ending in a
//! separator) receives [`REPORT_FILENAME`] inside it.

use std::path::{Path, PathBuf, is_separator};
use tracing::{debug, instrument};

use crate::error::ReportError;
use crate::types::WalkReport;

/// Filename used when a report target is a directory.
pub const REPORT_FILENAME: &str = "walk_report.json";

/// File a report aimed at `target` is read from or written to.
pub fn report_path(target: &Path) -> PathBuf {
  let names_dir = target
    .to_str()
    .and_then(|s| s.chars().last())
    .is_some_and(is_separator);
  if names_dir || target.is_dir() {
    target.join(REPORT_FILENAME)
  } else {
    target.to_path_buf()
  }
}

/// Saves `report` as pretty JSON at [`report_path`]`(target)`, creating parent
/// directories. Returns the file written.
#[instrument(level = "trace", skip(report))]
pub fn save_report(target: &Path, report: &WalkReport) -> Result<PathBuf, ReportError> {
  let path = report_path(target);
  let json = serde_json::to_string_pretty(report)?;
  let io = |source| ReportError::Io {
    path: path.clone(),
    source,
  };
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).map_err(io)?;
  }
  std::fs::write(&path, json).map_err(io)?;
  debug!(path = %path.display(), moves = report.moves.len(), "report saved");
  Ok(path)
}

/// Loads a report from [`report_path`]`(target)`.
#[instrument(level = "trace")]
pub fn load_report(target: &Path) -> Result<WalkReport, ReportError> {
  let path = report_path(target);
  let bytes = std::fs::read(&path).map_err(|source| ReportError::Io { path, source })?;
  Ok(serde_json::from_slice(&bytes)?)
}
