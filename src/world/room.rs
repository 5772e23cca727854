//! A room in the world graph.

use std::collections::BTreeMap;

use crate::types::{Direction, NodeId};

/// A room in the world graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
  pub id: NodeId,
  pub coords: (i32, i32),
  exits: BTreeMap<Direction, NodeId>,
}

impl Room {
  pub fn new(id: NodeId, coords: (i32, i32)) -> Self {
    Self {
      id,
      coords,
      exits: BTreeMap::new(),
    }
  }

  pub fn exit(&self, direction: Direction) -> Option<NodeId> {
    self.exits.get(&direction).copied()
  }

  /// Points the exit in `direction` at `target`, replacing any previous target.
  pub fn set_exit(&mut self, direction: Direction, target: NodeId) {
    self.exits.insert(direction, target);
  }

  /// Exits in direction priority order.
  pub fn exits(&self) -> impl Iterator<Item = (Direction, NodeId)> + '_ {
    self.exits.iter().map(|(&d, &id)| (d, id))
  }

  pub fn is_dead_end(&self) -> bool {
    self.exits.len() <= 1
  }
}
