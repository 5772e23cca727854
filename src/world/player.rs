//! A traveler walking a [`World`].

use tracing::trace;

use super::{Traveler, World};
use crate::types::{Direction, NodeId};

/// A traveler walking a [`World`].
#[derive(Debug, Clone)]
pub struct Player<'w> {
  pub name: String,
  world: &'w World,
  current_room: NodeId,
}

impl<'w> Player<'w> {
  pub fn new(name: impl Into<String>, world: &'w World, start: NodeId) -> Self {
    Self {
      name: name.into(),
      world,
      current_room: start,
    }
  }
}

impl Traveler for Player<'_> {
  fn current_room(&self) -> NodeId {
    self.current_room
  }

  fn travel(&mut self, direction: Direction) -> bool {
    let next = self
      .world
      .room(self.current_room)
      .and_then(|r| r.exit(direction));
    match next {
      Some(room) => {
        trace!(player = %self.name, from = self.current_room, to = room, %direction, "travel");
        self.current_room = room;
        true
      }
      None => false,
    }
  }
}
