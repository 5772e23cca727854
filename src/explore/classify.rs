//! First step of tree extraction: one branch per unexplored exit of a root.

use std::collections::BTreeSet;
use tracing::instrument;

use crate::adjacency::AdjacencyTable;
use crate::types::{Branch, Growth, MappedSet, NodeId};

/// Classifies each unexplored neighbor ("trunk") of `root` by how many ways
/// lead on from it, not counting the way back to `root`:
/// - one: `[root, trunk, next]` tagged [`Growth::Continue`];
/// - several: `[root, trunk]` tagged [`Growth::Diverge`];
/// - none: `[root, trunk]` tagged [`Growth::Done`].
#[instrument(level = "trace", skip(adjacency, mapped))]
pub fn classify(adjacency: &AdjacencyTable, mapped: &MappedSet, root: NodeId) -> Vec<Branch> {
  let back = BTreeSet::from([root]);
  adjacency
    .orient(root, &BTreeSet::new(), mapped)
    .into_iter()
    .map(|trunk| match adjacency.orient(trunk, &back, mapped).as_slice() {
      [next] => Branch::new(vec![root, trunk, *next], Growth::Continue),
      [] => Branch::new(vec![root, trunk], Growth::Done),
      _ => Branch::new(vec![root, trunk], Growth::Diverge),
    })
    .collect()
}
