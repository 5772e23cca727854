//! Room graph load from JSON.
//!
//! Two layouts are accepted. The bare one maps room ids to `[coords, exits]`:
//!
//! ```json
//! { "0": [[0, 0], {"n": 1}], "1": [[0, 1], {"s": 0}] }
//! ```
//!
//! The wrapped one names the start room explicitly:
//!
//! ```json
//! { "start": 1, "rooms": { "0": [[0, 0], {"n": 1}], "1": [[0, 1], {"s": 0}] } }
//! ```
//!
//! Without `start`, the smallest room id is the starting room.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, instrument};

use crate::error::WorldError;
use crate::types::{Direction, NodeId};
use crate::world::{GraphAdapter, World};

/// `[coords, exits]` as stored per room.
#[derive(Debug, Deserialize)]
struct RoomEntry((i32, i32), BTreeMap<String, NodeId>);

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WorldFile {
  Wrapped {
    #[serde(default)]
    start: Option<NodeId>,
    rooms: BTreeMap<String, RoomEntry>,
  },
  Bare(BTreeMap<String, RoomEntry>),
}

/// Parses a room graph from JSON text.
#[instrument(level = "trace", skip(json))]
pub fn parse_world(json: &str) -> Result<World, WorldError> {
  let (start, entries) = match serde_json::from_str(json)? {
    WorldFile::Wrapped { start, rooms } => (start, rooms),
    WorldFile::Bare(rooms) => (None, rooms),
  };

  let mut rooms: BTreeMap<NodeId, RoomEntry> = BTreeMap::new();
  for (key, entry) in entries {
    let id = key
      .trim()
      .parse::<NodeId>()
      .map_err(|_| WorldError::InvalidRoomId(key.clone()))?;
    rooms.insert(id, entry);
  }

  let first = *rooms.keys().next().ok_or(WorldError::EmptyWorld)?;
  let mut world = World::new(first);
  if let Some(start) = start {
    if !rooms.contains_key(&start) {
      return Err(WorldError::UnknownStart(start));
    }
    world.set_starting_room(start);
  }
  for (&id, RoomEntry(coords, _)) in &rooms {
    world.add_room(id, *coords);
  }
  for (&id, RoomEntry(_, exits)) in &rooms {
    for (key, &target) in exits {
      let direction: Direction = key.parse().map_err(|_| WorldError::InvalidExit {
        room: id,
        direction: key.clone(),
      })?;
      if !rooms.contains_key(&target) {
        return Err(WorldError::DanglingExit {
          room: id,
          direction,
          target,
        });
      }
      world.link(id, direction, target);
    }
  }

  debug!(
    rooms = world.len(),
    start = world.starting_room(),
    dead_ends = world.rooms().filter(|room| room.is_dead_end()).count(),
    one_way = one_way_exits(&world),
    "world parsed"
  );
  Ok(world)
}

/// Exits with no exit leading straight back.
pub fn one_way_exits(world: &World) -> usize {
  world
    .rooms()
    .flat_map(|room| room.exits().map(move |exit| (room.id, exit)))
    .filter(|&(id, (direction, target))| world.exit(target, direction.inverse()) != Some(id))
    .count()
}

/// Reads and parses a room graph file.
#[instrument(level = "trace", skip(path))]
pub fn load_world(path: &Path) -> Result<World, WorldError> {
  let json = std::fs::read_to_string(path).map_err(|source| WorldError::Io {
    path: path.to_path_buf(),
    source,
  })?;
  parse_world(&json)
}
