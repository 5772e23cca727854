//! World collaborators: the room graph the engine reads and the traveler that
//! replays a compiled walk.
//!
//! The engine only depends on the [`GraphAdapter`] and [`Traveler`] traits;
//! [`World`] and [`Player`] are the in-crate implementations used by the CLI
//! and tests.

use crate::types::{Direction, NodeId};

mod player;
mod room;
#[allow(clippy::module_inception)]
mod world;

pub use player::Player;
pub use room::Room;
pub use world::World;

/// Read-only view of a room graph with up to four exits per room.
pub trait GraphAdapter {
  /// Traveler replaying moves through this graph.
  type Traveler<'a>: Traveler
  where
    Self: 'a;

  /// Every room id, in ascending order.
  fn room_ids(&self) -> Vec<NodeId>;

  /// Room reached by leaving `room` towards `direction`, if that exit exists.
  fn exit(&self, room: NodeId, direction: Direction) -> Option<NodeId>;

  /// Grid coordinates of `room`.
  fn coords(&self, room: NodeId) -> Option<(i32, i32)>;

  /// Room every walk starts from.
  fn starting_room(&self) -> NodeId;

  /// A fresh traveler standing in `start`.
  fn traveler(&self, start: NodeId) -> Self::Traveler<'_>;
}

/// Something that moves through a room graph one exit at a time.
pub trait Traveler {
  fn current_room(&self) -> NodeId;

  /// Moves through the exit in `direction`. Returns false (and stays put) when
  /// the current room has no such exit.
  fn travel(&mut self, direction: Direction) -> bool;
}
