//! Compile a world into a single covering walk.
//!
//! Phase 1: build the adjacency table from the world.
//! Phase 2: explore from the start room into leaves and boughs.
//! Phase 3: compact leaves into per-junction round trips.
//! Phase 4: fold corners until only the start room's walk remains to replay.
//! Phase 5: dry-run the walk with a traveler and cut it at the visit ceiling.

use std::collections::BTreeSet;
use tracing::{debug, error, info, instrument};

use crate::adjacency::AdjacencyTable;
use crate::compact::compact_leaves;
use crate::error::WalkError;
use crate::explore::{Decomposition, explore};
use crate::fold::fold;
use crate::types::{Direction, NodeId, WalkReport};
use crate::world::{GraphAdapter, Traveler};

/// Most distinct rooms (start included) a compiled walk may visit.
pub const DEFAULT_VISIT_CEILING: usize = 500;

/// Options for [compile_walk] and [compile_walk_report].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
  /// Start room; the world's starting room when `None`.
  pub start: Option<NodeId>,
  /// Most distinct rooms the dry run may visit, start included.
  pub visit_ceiling: usize,
}

impl Default for CompileOptions {
  fn default() -> Self {
    Self {
      start: None,
      visit_ceiling: DEFAULT_VISIT_CEILING,
    }
  }
}

/// What the dry run consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DryRun {
  /// Moves replayed before the ceiling was hit (all of them if it never was).
  pub consumed: usize,
  /// Distinct rooms visited by those moves, start included.
  pub rooms_visited: usize,
}

/// Compiles the world into a walk from the start room.
pub fn compile_walk<G: GraphAdapter>(
  world: &G,
  options: &CompileOptions,
) -> Result<Vec<Direction>, WalkError> {
  compile_walk_report(world, options).map(|report| report.moves)
}

/// Compiles the world into a walk and reports how it was built.
#[instrument(level = "trace", skip(world))]
pub fn compile_walk_report<G: GraphAdapter>(
  world: &G,
  options: &CompileOptions,
) -> Result<WalkReport, WalkError> {
  let start = options.start.unwrap_or_else(|| world.starting_room());
  info!(start, visit_ceiling = options.visit_ceiling, "compiling walk");

  let adjacency = AdjacencyTable::build(world);
  if !adjacency.contains(start) {
    return Err(WalkError::UnknownStart(start));
  }

  let Decomposition {
    mapped,
    leaves,
    mut boughs,
  } = explore(&adjacency, start)?;
  let junctions = boughs.len();

  let mut walks = compact_leaves(&adjacency, &leaves, &boughs)?;
  let folding = fold(&adjacency, &mut boughs, &mut walks, start)?;
  let mut moves = walks.remove(start).unwrap_or_default();
  let compiled_len = moves.len();
  // boughs on a cycle never become corners
  let unfolded: Vec<NodeId> = boughs.rooms().collect();
  if !unfolded.is_empty() {
    let stranded: Vec<NodeId> = walks.junctions().filter(|&room| boughs.contains(room)).collect();
    debug!(unfolded = ?unfolded, stranded = ?stranded, "junctions left on unfolded boughs");
  }

  let run = dry_run(world.traveler(start), &moves, options.visit_ceiling)?;
  moves.truncate(run.consumed);

  info!(
    rooms = adjacency.len(),
    rooms_mapped = mapped.len(),
    junctions,
    fold_passes = folding.passes,
    unfolded = unfolded.len(),
    compiled_len,
    moves = moves.len(),
    rooms_visited = run.rooms_visited,
    "compilation complete"
  );
  Ok(WalkReport {
    start,
    moves,
    compiled_len,
    rooms_visited: run.rooms_visited,
    visit_ceiling: options.visit_ceiling,
    rooms_mapped: mapped.len(),
    junctions,
    fold_passes: folding.passes,
    unfolded,
  })
}

/// Replays `moves` with `traveler` and stops before the first move that would
/// take the count of distinct rooms visited (start included) past `ceiling`.
/// A ceiling below one is treated as one.
#[instrument(level = "trace", skip(traveler, moves))]
pub fn dry_run<T: Traveler>(
  mut traveler: T,
  moves: &[Direction],
  ceiling: usize,
) -> Result<DryRun, WalkError> {
  let ceiling = ceiling.max(1);
  let mut visited = BTreeSet::from([traveler.current_room()]);

  for (step, &direction) in moves.iter().enumerate() {
    let room = traveler.current_room();
    if !traveler.travel(direction) {
      error!(step, room, %direction, "compiled move is not possible");
      return Err(WalkError::BlockedMove { room, direction });
    }
    let next = traveler.current_room();
    if !visited.contains(&next) && visited.len() >= ceiling {
      debug!(step, ceiling, "visit ceiling reached; walk cut");
      return Ok(DryRun {
        consumed: step,
        rooms_visited: visited.len(),
      });
    }
    visited.insert(next);
  }

  Ok(DryRun {
    consumed: moves.len(),
    rooms_visited: visited.len(),
  })
}
