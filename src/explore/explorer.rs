//! Exploration of a whole room graph, junction by junction.

use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

use super::extract_tree;
use crate::adjacency::AdjacencyTable;
use crate::error::WalkError;
use crate::types::{MappedSet, NodeId, PathTable};

/// State built up while exploring: what has been mapped and the two path tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decomposition {
  pub mapped: MappedSet,
  /// Dead-end paths and closed loops, keyed by both ends.
  pub leaves: PathTable,
  /// Corridors between junctions, keyed by both ends.
  pub boughs: PathTable,
}

/// Explores everything reachable from `root` into a fresh [`Decomposition`].
#[instrument(level = "trace", skip(adjacency))]
pub fn explore(adjacency: &AdjacencyTable, root: NodeId) -> Result<Decomposition, WalkError> {
  let mut decomposition = Decomposition::default();
  explore_into(adjacency, root, &mut decomposition)?;
  info!(
    rooms_mapped = decomposition.mapped.len(),
    junctions = decomposition.boughs.len(),
    "exploration complete"
  );
  Ok(decomposition)
}

/// Explores from `root` into `decomposition`.
///
/// Leaf paths are registered in `leaves` and all their rooms mapped. Stem paths
/// are registered in `boughs` with every room but their last one mapped; that
/// room (a "horizon") is explored next. Horizons are visited depth-first, each
/// one's subtree before its later siblings, from an explicit stack.
#[instrument(level = "trace", skip(adjacency, decomposition))]
pub fn explore_into(
  adjacency: &AdjacencyTable,
  root: NodeId,
  decomposition: &mut Decomposition,
) -> Result<(), WalkError> {
  let mut explored: BTreeSet<NodeId> = BTreeSet::new();
  let mut pending = vec![root];

  while let Some(junction) = pending.pop() {
    if !explored.insert(junction) {
      continue;
    }
    let tree = extract_tree(adjacency, &decomposition.mapped, junction)?;
    debug!(
      junction,
      coords = ?adjacency.coords(junction),
      leaves = tree.leaves.len(),
      stems = tree.stems.len(),
      "explored junction"
    );

    for path in &tree.leaves {
      decomposition.leaves.register(path)?;
      decomposition.mapped.extend(path.iter().copied());
    }

    let mut horizons: Vec<NodeId> = Vec::new();
    for path in &tree.stems {
      decomposition.boughs.register(path)?;
      if let Some((&horizon, corridor)) = path.split_last() {
        // a joined stem passes its horizon midway; it stays unmapped until explored
        decomposition
          .mapped
          .extend(corridor.iter().copied().filter(|&room| room != horizon));
        if !horizons.contains(&horizon) {
          horizons.push(horizon);
        }
      }
    }

    decomposition.mapped.insert(junction);
    pending.extend(horizons.into_iter().rev());
  }
  Ok(())
}
