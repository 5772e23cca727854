//! Errors raised while loading a world, compiling its walk and storing the report.

use std::path::PathBuf;

use crate::types::{Direction, NodeId};
use thiserror::Error;

/// Errors raised while decomposing a world and compiling its walk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
  /// No path is registered between the two endpoints.
  #[error("no such path: {from} -> {to}")]
  NoSuchPath { from: NodeId, to: NodeId },

  /// A registered path steps between rooms that share no exit.
  #[error("no exit leads from room {from} to room {to}")]
  MissingLink { from: NodeId, to: NodeId },

  /// The requested start room is not part of the world.
  #[error("start room {0} is not in the world")]
  UnknownStart(NodeId),

  /// A branch too short to grow or register reached the grower or registrar.
  #[error("degenerate branch {path:?}: at least {expected} nodes required")]
  DegenerateBranch { path: Vec<NodeId>, expected: usize },

  /// The dry-run traveler could not make a compiled move.
  #[error("traveler in room {room} cannot move {direction}")]
  BlockedMove { room: NodeId, direction: Direction },
}

impl WalkError {
  /// Lookup failures: the tables or the world lack a requested entry.
  pub fn is_lookup(&self) -> bool {
    matches!(
      self,
      WalkError::NoSuchPath { .. } | WalkError::MissingLink { .. } | WalkError::UnknownStart(_)
    )
  }

  /// Internal-invariant failures: malformed graph or a classification bug.
  pub fn is_consistency(&self) -> bool {
    matches!(
      self,
      WalkError::DegenerateBranch { .. } | WalkError::BlockedMove { .. }
    )
  }
}

/// Errors raised while loading a room graph from JSON.
#[derive(Debug, Error)]
pub enum WorldError {
  #[error("cannot read {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid world JSON: {0}")]
  Json(#[from] serde_json::Error),

  /// A room key that is not a room id.
  #[error("invalid room id {0:?}")]
  InvalidRoomId(String),

  /// An exit key that is not a direction.
  #[error("room {room} has an exit towards unknown direction {direction:?}")]
  InvalidExit { room: NodeId, direction: String },

  /// An exit into a room the file does not define.
  #[error("room {room} exits {direction} into missing room {target}")]
  DanglingExit {
    room: NodeId,
    direction: Direction,
    target: NodeId,
  },

  #[error("world has no rooms")]
  EmptyWorld,

  #[error("start room {0} is not in the world")]
  UnknownStart(NodeId),
}

/// Errors raised while saving or loading a walk report.
#[derive(Debug, Error)]
pub enum ReportError {
  #[error("cannot access report {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid report JSON: {0}")]
  Json(#[from] serde_json::Error),
}
