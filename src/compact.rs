//! Flattening of registered leaf paths into per-junction round trips.

use tracing::{debug, instrument};

use crate::adjacency::AdjacencyTable;
use crate::error::WalkError;
use crate::types::{CompiledWalk, PathTable};

/// Turns the raw `leaves` table into move sequences keyed by junction.
///
/// - A closed loop registered on a room is walked once, keyed by that room.
/// - A room outside `boughs` with a single leaf neighbor is a dead end: the
///   trip out to it and back is keyed by that neighbor.
/// - A leaf running between two rooms on `boughs` is walked out and back from
///   its smaller end, keyed by that end.
///
/// Junction-side entries of ordinary leaves are skipped; each leaf is compiled
/// once from its dead-end side.
#[instrument(level = "trace", skip_all)]
pub fn compact_leaves(
  adjacency: &AdjacencyTable,
  leaves: &PathTable,
  boughs: &PathTable,
) -> Result<CompiledWalk, WalkError> {
  let mut walks = CompiledWalk::new();

  for room in leaves.rooms() {
    let Some(ends) = leaves.endpoints(room) else {
      continue;
    };

    let looped = ends.contains_key(&room);
    if looped {
      walks.extend(room, leaves.resolve(room, room, adjacency)?);
    }

    if boughs.contains(room) {
      for &other in ends.keys().filter(|&&other| other > room && boughs.contains(other)) {
        let mut trip = leaves.resolve(room, other, adjacency)?;
        trip.extend(leaves.resolve(other, room, adjacency)?);
        walks.extend(room, trip);
      }
    }

    if looped || ends.len() != 1 || boughs.contains(room) {
      continue;
    }
    let Some(&junction) = ends.keys().next() else {
      continue;
    };
    let mut trip = leaves.resolve(junction, room, adjacency)?;
    trip.extend(leaves.resolve(room, junction, adjacency)?);
    walks.extend(junction, trip);
  }

  debug!(junctions = walks.len(), "leaves compacted");
  Ok(walks)
}
