//! Growth of a stub branch along single-exit corridors.

use std::collections::BTreeSet;
use tracing::{error, instrument};

use crate::adjacency::AdjacencyTable;
use crate::error::WalkError;
use crate::types::{Branch, Growth, MappedSet, NodeId};

/// Extends a [`Growth::Continue`] branch one room at a time while exactly one
/// unvisited exit leads on.
///
/// Ends as [`Growth::DoneLoop`] when the corridor arrives back at the branch's
/// origin, [`Growth::Diverge`] (or [`Growth::DivergeLoop`] when one of the ways
/// on is the origin) at a junction, and [`Growth::Done`] at a dead end.
///
/// A branch of fewer than three rooms cannot have been classified as
/// `Continue`; it is reported as [`WalkError::DegenerateBranch`].
#[instrument(level = "trace", skip(adjacency, mapped))]
pub fn grow(adjacency: &AdjacencyTable, mapped: &MappedSet, branch: Branch) -> Result<Branch, WalkError> {
  let (origin, mut room) = match (branch.origin(), branch.end()) {
    (Some(origin), Some(end)) if branch.path.len() >= 3 => (origin, end),
    _ => {
      error!(path = ?branch.path, growth = %branch.growth, "cannot grow a branch shorter than three rooms");
      return Err(WalkError::DegenerateBranch {
        path: branch.path,
        expected: 3,
      });
    }
  };
  let mut path = branch.path;

  // The origin stays out of `visited` so a corridor closing on it is seen.
  let mut visited: BTreeSet<NodeId> = path[1..].iter().copied().collect();

  loop {
    let ways = adjacency.orient(room, &visited, mapped);
    match ways.as_slice() {
      [] => return Ok(Branch::new(path, Growth::Done)),
      [next] => {
        room = *next;
        path.push(room);
        visited.insert(room);
        if room == origin {
          return Ok(Branch::new(path, Growth::DoneLoop));
        }
      }
      several => {
        let growth = if several.contains(&origin) {
          Growth::DivergeLoop
        } else {
          Growth::Diverge
        };
        return Ok(Branch::new(path, growth));
      }
    }
  }
}
