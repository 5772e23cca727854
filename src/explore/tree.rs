//! Partition of one root's frontier into leaf and stem paths.

use std::collections::BTreeSet;
use tracing::{instrument, trace};

use super::{classify, grow};
use crate::adjacency::AdjacencyTable;
use crate::error::WalkError;
use crate::types::{Branch, Growth, MappedSet, NodeId};

/// Paths discovered from one root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
  /// Paths ending in a dead end, plus at most one closed path through the root
  /// chaining every kept loop.
  pub leaves: Vec<Vec<NodeId>>,
  /// Paths ending at another junction, at most one per horizon.
  pub stems: Vec<Vec<NodeId>>,
}

/// Classifies every exit of `root` and grows each stub until it ends.
///
/// Branches are processed last-in first-out. Closed loops are kept, except a
/// loop whose rooms all lie on loops kept before it: that is the same cycle
/// walked the other way round. Kept loops are chained end to end into a single
/// closed leaf, and stems reaching the same horizon into a single stem, since a
/// path table holds one entry per pair of ends.
#[instrument(level = "trace", skip(adjacency, mapped))]
pub fn extract_tree(adjacency: &AdjacencyTable, mapped: &MappedSet, root: NodeId) -> Result<Tree, WalkError> {
  let mut work = classify(adjacency, mapped, root);
  let mut tree = Tree::default();
  let mut loops = Vec::new();

  while let Some(branch) = work.pop() {
    match branch.growth {
      growth if !growth.is_terminal() => work.push(grow(adjacency, mapped, branch)?),
      Growth::Done => tree.leaves.push(branch.path),
      Growth::DoneLoop if branch.is_closed() => loops.push(branch.path),
      _ => merge_stem(&mut tree.stems, branch),
    }
  }

  let mut looped: BTreeSet<NodeId> = BTreeSet::new();
  let mut circuit: Vec<NodeId> = Vec::new();
  for path in loops {
    let rooms: BTreeSet<NodeId> = path.iter().copied().collect();
    if !looped.is_empty() && rooms.is_subset(&looped) {
      trace!(root, path = ?path, "loop retraces an earlier loop");
      continue;
    }
    looped.extend(rooms);
    // each loop starts and ends at root; drop the shared root when chaining
    let skip = usize::from(!circuit.is_empty());
    circuit.extend(path.into_iter().skip(skip));
  }
  if !circuit.is_empty() {
    tree.leaves.push(circuit);
  }

  Ok(tree)
}

/// Adds the path of `branch` to `stems`. When a stem to the same horizon
/// exists, it is extended back to the root along the new path reversed and out
/// again along it.
fn merge_stem(stems: &mut Vec<Vec<NodeId>>, branch: Branch) {
  let horizon = branch.end();
  match stems.iter_mut().find(|stem| stem.last().copied() == horizon) {
    Some(stem) => {
      trace!(path = ?branch.path, looped = branch.growth.is_loop(), "parallel stem joined to an earlier one");
      stem.extend(branch.path.iter().rev().skip(1));
      stem.extend(branch.path.into_iter().skip(1));
    }
    None => stems.push(branch.path),
  }
}
