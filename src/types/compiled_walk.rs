//! Per-junction round-trip move sequences.

use std::collections::BTreeMap;

use super::{Direction, NodeId};

/// Per-junction round-trip move sequences.
///
/// Every sequence stored under a junction leaves from it and returns to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledWalk {
  walks: BTreeMap<NodeId, Vec<Direction>>,
}

impl CompiledWalk {
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends `moves` to the sequence of `junction`, creating it if absent.
  pub fn extend(&mut self, junction: NodeId, moves: impl IntoIterator<Item = Direction>) {
    self.walks.entry(junction).or_default().extend(moves);
  }

  pub fn get(&self, junction: NodeId) -> Option<&[Direction]> {
    self.walks.get(&junction).map(Vec::as_slice)
  }

  pub fn remove(&mut self, junction: NodeId) -> Option<Vec<Direction>> {
    self.walks.remove(&junction)
  }

  pub fn contains(&self, junction: NodeId) -> bool {
    self.walks.contains_key(&junction)
  }

  pub fn junctions(&self) -> impl Iterator<Item = NodeId> + '_ {
    self.walks.keys().copied()
  }

  pub fn len(&self) -> usize {
    self.walks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.walks.is_empty()
  }
}
