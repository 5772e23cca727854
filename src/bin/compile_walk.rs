//! CLI: Compile a covering walk for a room graph stored as JSON.
//!
//! Usage: `compile_walk [OPTIONS] <world.json>`
//! Example: compile_walk --visit-ceiling 200 --report out/ maze.json
//!
//! Prints the moves as space-separated direction letters, then a summary.
//!
//! Set RUST_LOG=boughwalk=trace for TRACE-level span enter/exit and events.

use boughwalk::{CompileOptions, DEFAULT_VISIT_CEILING, compile_walk_report, report_io, world_io};
use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::process;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

const VISIT_CEILING_ENV: &str = "BOUGHWALK_VISIT_CEILING";

/// Compile a covering walk for a room graph stored as JSON.
#[derive(Parser, Debug)]
#[command(name = "compile_walk")]
#[command(
  after_help = r#"Environment variables (override flags when set):
  BOUGHWALK_VISIT_CEILING   Most distinct rooms the walk may visit, start included.

Examples:
  compile_walk maze.json
  compile_walk --start 12 --visit-ceiling 100 maze.json
  compile_walk --report runs/ maze.json    (writes runs/walk_report.json)"#
)]
struct Args {
  /// Start room. Default: the world's starting room.
  #[arg(long, value_name = "ID")]
  start: Option<u32>,

  /// Most distinct rooms the walk may visit. Overridden by BOUGHWALK_VISIT_CEILING if set.
  #[arg(long, value_name = "N", default_value_t = DEFAULT_VISIT_CEILING)]
  visit_ceiling: usize,

  /// Write the walk report as JSON to this file, or to walk_report.json inside
  /// this directory.
  #[arg(long, value_name = "PATH")]
  report: Option<PathBuf>,

  /// Path to the world JSON file
  #[arg(value_name = "world.json")]
  world_path: PathBuf,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  info!("compile_walk starting");
  let args = Args::parse();

  // Env var overrides the flag.
  let visit_ceiling = match env::var(VISIT_CEILING_ENV) {
    Ok(raw) => match raw.trim().parse::<usize>() {
      Ok(n) => n,
      Err(e) => {
        eprintln!("Error parsing {}={:?}: {}", VISIT_CEILING_ENV, raw, e);
        process::exit(1);
      }
    },
    Err(_) => args.visit_ceiling,
  };
  info!(start = ?args.start, visit_ceiling, "options (env or flags)");

  let world = match world_io::load_world(&args.world_path) {
    Ok(w) => w,
    Err(e) => {
      eprintln!("Error loading {}: {}", args.world_path.display(), e);
      process::exit(1);
    }
  };

  let options = CompileOptions {
    start: args.start,
    visit_ceiling,
  };
  let report = match compile_walk_report(&world, &options) {
    Ok(r) => r,
    Err(e) => {
      eprintln!("Compile error: {}", e);
      process::exit(1);
    }
  };

  if let Some(target) = &args.report {
    match report_io::save_report(target, &report) {
      Ok(path) => info!(path = %path.display(), "report written"),
      Err(e) => {
        eprintln!("Error writing report: {}", e);
        process::exit(1);
      }
    }
  }
  if report.truncated() {
    warn!(
      compiled_len = report.compiled_len,
      moves = report.moves.len(),
      "walk cut at the visit ceiling"
    );
  }

  println!("{}", report.moves_line());
  println!("Walk compiled.");
  println!("  Start: {}", report.start);
  println!("  Moves: {}", report.moves.len());
  println!("  Rooms visited: {}", report.rooms_visited);
  println!("  Rooms mapped: {}", report.rooms_mapped);
}
