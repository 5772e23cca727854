//! Direction-indexed adjacency table built from a [`GraphAdapter`].
//!
//! Built once per decomposition run and read-only afterwards. Neighbor lists
//! keep direction priority order, which makes every query deterministic.

use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, instrument, warn};

use crate::types::{Direction, MappedSet, NodeId};
use crate::world::GraphAdapter;

/// Direction-indexed adjacency table built from a [`GraphAdapter`].
#[derive(Debug, Clone, Default)]
pub struct AdjacencyTable {
  links: BTreeMap<NodeId, Vec<(NodeId, Direction)>>,
  coords: BTreeMap<NodeId, (i32, i32)>,
}

impl AdjacencyTable {
  /// Reads every room's exits. When two exits of one room lead to the same
  /// neighbor, the first in priority order is kept. Exits into the room itself
  /// or into rooms the graph does not contain are dropped.
  #[instrument(level = "trace", skip(graph))]
  pub fn build<G: GraphAdapter>(graph: &G) -> Self {
    let ids = graph.room_ids();
    let known: BTreeSet<NodeId> = ids.iter().copied().collect();
    let mut table = AdjacencyTable::default();

    for id in ids {
      let mut neighbors: Vec<(NodeId, Direction)> = Vec::with_capacity(4);
      for direction in Direction::ALL {
        let Some(target) = graph.exit(id, direction) else {
          continue;
        };
        if target == id {
          debug!(room = id, %direction, "exit loops back into the same room; ignored");
          continue;
        }
        if !known.contains(&target) {
          warn!(room = id, target, %direction, "exit leads to an unknown room; ignored");
          continue;
        }
        if neighbors.iter().any(|&(n, _)| n == target) {
          debug!(room = id, target, %direction, "second exit to the same room; ignored");
          continue;
        }
        neighbors.push((target, direction));
      }
      table.links.insert(id, neighbors);
      if let Some(c) = graph.coords(id) {
        table.coords.insert(id, c);
      }
    }
    table
  }

  /// Neighbors of `room` with the direction leading to each.
  pub fn neighbors(&self, room: NodeId) -> &[(NodeId, Direction)] {
    self.links.get(&room).map(Vec::as_slice).unwrap_or(&[])
  }

  /// Direction of the exit from `from` into `to`.
  pub fn direction(&self, from: NodeId, to: NodeId) -> Option<Direction> {
    self
      .neighbors(from)
      .iter()
      .find(|&&(n, _)| n == to)
      .map(|&(_, d)| d)
  }

  /// Unexplored neighbors of `room`: those not in `exclude` and not yet mapped.
  pub fn orient(&self, room: NodeId, exclude: &BTreeSet<NodeId>, mapped: &MappedSet) -> Vec<NodeId> {
    self
      .neighbors(room)
      .iter()
      .map(|&(n, _)| n)
      .filter(|n| !exclude.contains(n) && !mapped.contains(n))
      .collect()
  }

  pub fn contains(&self, room: NodeId) -> bool {
    self.links.contains_key(&room)
  }

  pub fn coords(&self, room: NodeId) -> Option<(i32, i32)> {
    self.coords.get(&room).copied()
  }

  pub fn rooms(&self) -> impl Iterator<Item = NodeId> + '_ {
    self.links.keys().copied()
  }

  /// Rooms reachable from `start` along outgoing exits, `start` included.
  pub fn reachable_from(&self, start: NodeId) -> BTreeSet<NodeId> {
    let mut seen = BTreeSet::new();
    if !self.contains(start) {
      return seen;
    }
    let mut stack = vec![start];
    while let Some(room) = stack.pop() {
      if !seen.insert(room) {
        continue;
      }
      stack.extend(self.neighbors(room).iter().map(|&(n, _)| n));
    }
    seen
  }

  pub fn len(&self) -> usize {
    self.links.len()
  }

  pub fn is_empty(&self) -> bool {
    self.links.is_empty()
  }
}
