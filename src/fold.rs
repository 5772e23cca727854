//! Folding of degree-one junctions into their neighbors.
//!
//! A "corner" is a junction with a single bough. Folding it appends the trip
//! out to the corner, the corner's own walk, and the trip back to the walk of
//! the junction at the other end of that bough, then forgets the corner. Once
//! nothing but the root is left to fold, the root's walk covers every folded
//! junction.

use std::collections::VecDeque;
use tracing::{debug, instrument, trace, warn};

use crate::adjacency::AdjacencyTable;
use crate::error::WalkError;
use crate::types::{CompiledWalk, NodeId, PathTable};

/// Outcome of [`fold`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoldReport {
  /// Passes that folded at least one corner.
  pub passes: usize,
  /// Corners folded in total.
  pub folded: usize,
  /// Set when a pass stopped on inconsistent bough state.
  pub aborted: bool,
}

/// Result of folding a single corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FoldStep {
  Folded { center: NodeId },
  /// No longer exactly one bough: already folded or emptied this pass.
  Stale,
  /// The bough is not mirrored by the neighbor.
  Malformed { center: NodeId },
}

/// Junctions other than `root` with exactly one bough, ascending.
pub fn corners(boughs: &PathTable, root: NodeId) -> Vec<NodeId> {
  boughs
    .rooms()
    .filter(|&room| room != root && boughs.degree(room) == 1)
    .collect()
}

/// Folds corners into their neighbors until none remain.
///
/// A neighbor left with a single bough becomes a corner within the same pass,
/// so a tree of boughs folds in one pass. Inconsistent bough state ends
/// folding early and is reported through [`FoldReport::aborted`]; lookup
/// failures while resolving moves are returned as errors.
#[instrument(level = "trace", skip(adjacency, boughs, walks))]
pub fn fold(
  adjacency: &AdjacencyTable,
  boughs: &mut PathTable,
  walks: &mut CompiledWalk,
  root: NodeId,
) -> Result<FoldReport, WalkError> {
  let mut report = FoldReport::default();

  loop {
    let mut queue: VecDeque<NodeId> = corners(boughs, root).into();
    if queue.is_empty() {
      break;
    }

    let mut folded = 0;
    while let Some(corner) = queue.pop_front() {
      match fold_corner(adjacency, boughs, walks, corner)? {
        FoldStep::Folded { center } => {
          trace!(corner, center, "folded corner");
          folded += 1;
          if center != root && boughs.degree(center) == 1 && !queue.contains(&center) {
            queue.push_back(center);
          }
        }
        FoldStep::Stale => trace!(corner, "corner no longer has a single bough"),
        FoldStep::Malformed { center } => {
          warn!(corner, center, "bough is not mirrored; nothing more to fold");
          report.aborted = true;
          break;
        }
      }
    }

    if folded > 0 {
      report.passes += 1;
      report.folded += folded;
    }
    if folded == 0 || report.aborted {
      break;
    }
  }

  debug!(
    passes = report.passes,
    folded = report.folded,
    aborted = report.aborted,
    "folding complete"
  );
  Ok(report)
}

fn fold_corner(
  adjacency: &AdjacencyTable,
  boughs: &mut PathTable,
  walks: &mut CompiledWalk,
  corner: NodeId,
) -> Result<FoldStep, WalkError> {
  let center = match boughs.endpoints(corner) {
    Some(ends) if ends.len() == 1 => match ends.keys().next() {
      Some(&center) => center,
      None => return Ok(FoldStep::Stale),
    },
    _ => return Ok(FoldStep::Stale),
  };
  if center == corner || boughs.intermediates(center, corner).is_none() {
    return Ok(FoldStep::Malformed { center });
  }

  let out = boughs.resolve(center, corner, adjacency)?;
  let back = boughs.resolve(corner, center, adjacency)?;
  let inner = walks.remove(corner).unwrap_or_default();

  walks.extend(center, out.into_iter().chain(inner).chain(back));
  boughs.remove_room(corner);
  boughs.remove_path(center, corner);
  Ok(FoldStep::Folded { center })
}
