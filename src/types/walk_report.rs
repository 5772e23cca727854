//! Serializable summary of one walk compilation.

use serde::{Deserialize, Serialize};

use super::{Direction, NodeId};

/// Serializable summary of one walk compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkReport {
  /// Room the walk starts from.
  pub start: NodeId,
  /// Moves to replay, already cut at the visit ceiling.
  pub moves: Vec<Direction>,
  /// Length of the compiled walk before the dry run.
  pub compiled_len: usize,
  /// Distinct rooms the dry run visited, start included.
  pub rooms_visited: usize,
  /// Ceiling the dry run enforced.
  pub visit_ceiling: usize,
  /// Rooms the explorer mapped.
  pub rooms_mapped: usize,
  /// Junctions joined by boughs before folding.
  pub junctions: usize,
  /// Fold passes that absorbed at least one corner.
  pub fold_passes: usize,
  /// Junctions still joined by boughs after folding. Their rooms past the
  /// start's own part of the graph are left out of the walk.
  #[serde(default)]
  pub unfolded: Vec<NodeId>,
}

impl WalkReport {
  /// True when the dry run dropped moves to respect the ceiling.
  pub fn truncated(&self) -> bool {
    self.moves.len() < self.compiled_len
  }

  /// Moves as space-separated direction codes.
  pub fn moves_line(&self) -> String {
    self
      .moves
      .iter()
      .map(Direction::to_string)
      .collect::<Vec<_>>()
      .join(" ")
  }
}
