//! Symmetric table of registered paths between pairs of rooms.

use std::collections::BTreeMap;
use tracing::instrument;

use super::{Direction, NodeId};
use crate::adjacency::AdjacencyTable;
use crate::error::WalkError;

/// Symmetric table of registered paths between pairs of rooms.
///
/// `table[a][b]` holds the rooms strictly between `a` and `b`; whenever `a -> b`
/// is registered, `b -> a` holds the same rooms reversed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTable {
  entries: BTreeMap<NodeId, BTreeMap<NodeId, Vec<NodeId>>>,
}

impl PathTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Records `path` and its reverse, keeping any other endpoints already stored
  /// for its two ends. For a closed loop the reversed walk is the one kept.
  #[instrument(level = "trace", skip(self))]
  pub fn register(&mut self, path: &[NodeId]) -> Result<(), WalkError> {
    let (start, end) = match (path.first(), path.last()) {
      (Some(&start), Some(&end)) if path.len() >= 2 => (start, end),
      _ => {
        return Err(WalkError::DegenerateBranch {
          path: path.to_vec(),
          expected: 2,
        });
      }
    };
    let inner = &path[1..path.len() - 1];
    let mut reversed = inner.to_vec();
    reversed.reverse();

    self
      .entries
      .entry(start)
      .or_default()
      .insert(end, inner.to_vec());
    self.entries.entry(end).or_default().insert(start, reversed);
    Ok(())
  }

  /// Directions walking the registered path `from -> to`.
  #[instrument(level = "trace", skip(self, adjacency))]
  pub fn resolve(
    &self,
    from: NodeId,
    to: NodeId,
    adjacency: &AdjacencyTable,
  ) -> Result<Vec<Direction>, WalkError> {
    let inner = self
      .intermediates(from, to)
      .ok_or(WalkError::NoSuchPath { from, to })?;

    let mut moves = Vec::with_capacity(inner.len() + 1);
    let mut previous = from;
    for &room in inner.iter().chain(std::iter::once(&to)) {
      let step = adjacency
        .direction(previous, room)
        .ok_or(WalkError::MissingLink { from: previous, to: room })?;
      moves.push(step);
      previous = room;
    }
    Ok(moves)
  }

  /// Rooms strictly between `from` and `to`, if that pair is registered.
  pub fn intermediates(&self, from: NodeId, to: NodeId) -> Option<&[NodeId]> {
    self
      .entries
      .get(&from)
      .and_then(|ends| ends.get(&to))
      .map(Vec::as_slice)
  }

  /// Endpoints registered against `room`.
  pub fn endpoints(&self, room: NodeId) -> Option<&BTreeMap<NodeId, Vec<NodeId>>> {
    self.entries.get(&room)
  }

  pub fn contains(&self, room: NodeId) -> bool {
    self.entries.contains_key(&room)
  }

  /// Number of endpoints registered against `room`.
  pub fn degree(&self, room: NodeId) -> usize {
    self.entries.get(&room).map(BTreeMap::len).unwrap_or(0)
  }

  /// Rooms that have at least one registered path, in ascending order.
  pub fn rooms(&self) -> impl Iterator<Item = NodeId> + '_ {
    self.entries.keys().copied()
  }

  /// Every registered `(from, to)` pair.
  pub fn pairs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
    self
      .entries
      .iter()
      .flat_map(|(&from, ends)| ends.keys().map(move |&to| (from, to)))
  }

  /// Drops every path registered against `room` (not the mirrored entries).
  pub fn remove_room(&mut self, room: NodeId) -> Option<BTreeMap<NodeId, Vec<NodeId>>> {
    self.entries.remove(&room)
  }

  /// Drops the single entry `from -> to`, and `from` itself once it has none left.
  pub fn remove_path(&mut self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
    let ends = self.entries.get_mut(&from)?;
    let removed = ends.remove(&to);
    if ends.is_empty() {
      self.entries.remove(&from);
    }
    removed
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
