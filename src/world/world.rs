//! In-memory room graph.

use std::collections::BTreeMap;

use super::{GraphAdapter, Player, Room};
use crate::types::{Direction, NodeId};

/// Grid offset of one step in `direction` (north is +y, east is +x).
fn offset(direction: Direction) -> (i32, i32) {
  match direction {
    Direction::North => (0, 1),
    Direction::South => (0, -1),
    Direction::East => (1, 0),
    Direction::West => (-1, 0),
  }
}

/// In-memory room graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
  rooms: BTreeMap<NodeId, Room>,
  starting_room: NodeId,
}

impl World {
  pub fn new(starting_room: NodeId) -> Self {
    Self {
      rooms: BTreeMap::new(),
      starting_room,
    }
  }

  /// Adds `id` at `coords` unless it already exists; returns the stored room.
  pub fn add_room(&mut self, id: NodeId, coords: (i32, i32)) -> &mut Room {
    self.rooms.entry(id).or_insert_with(|| Room::new(id, coords))
  }

  /// Two-way connection: `from --direction--> to` and back.
  ///
  /// Missing rooms are created, placed one grid step from the other end.
  pub fn connect(&mut self, from: NodeId, direction: Direction, to: NodeId) {
    self.link(from, direction, to);
    self.link(to, direction.inverse(), from);
  }

  /// One-way exit from `from` towards `direction` into `to`.
  pub fn link(&mut self, from: NodeId, direction: Direction, to: NodeId) {
    let origin = self.add_room(from, (0, 0)).coords;
    let (dx, dy) = offset(direction);
    self.add_room(to, (origin.0 + dx, origin.1 + dy));
    if let Some(room) = self.rooms.get_mut(&from) {
      room.set_exit(direction, to);
    }
  }

  pub fn set_starting_room(&mut self, id: NodeId) {
    self.starting_room = id;
  }

  pub fn room(&self, id: NodeId) -> Option<&Room> {
    self.rooms.get(&id)
  }

  pub fn rooms(&self) -> impl Iterator<Item = &Room> {
    self.rooms.values()
  }

  pub fn len(&self) -> usize {
    self.rooms.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rooms.is_empty()
  }
}

impl GraphAdapter for World {
  type Traveler<'a> = Player<'a>;

  fn room_ids(&self) -> Vec<NodeId> {
    self.rooms.keys().copied().collect()
  }

  fn exit(&self, room: NodeId, direction: Direction) -> Option<NodeId> {
    self.rooms.get(&room).and_then(|r| r.exit(direction))
  }

  fn coords(&self, room: NodeId) -> Option<(i32, i32)> {
    self.rooms.get(&room).map(|r| r.coords)
  }

  fn starting_room(&self) -> NodeId {
    self.starting_room
  }

  fn traveler(&self, start: NodeId) -> Player<'_> {
    Player::new("Astral Projection", self, start)
  }
}
