//! Tests for `explore`.

use std::collections::BTreeSet;

use crate::adjacency::AdjacencyTable;
use crate::explore::{Decomposition, explore, explore_into};
use crate::types::{Direction, MappedSet};
use crate::world::World;

/// A east to junction B; B north to L1, south to L2.
fn simple_branch() -> World {
  let mut w = World::new(0);
  w.connect(0, Direction::East, 1);
  w.connect(1, Direction::North, 2);
  w.connect(1, Direction::South, 3);
  w
}

/// `size` x `size` grid with every neighboring pair connected.
fn full_grid(size: u32) -> World {
  let mut w = World::new(0);
  for y in 0..size {
    for x in 0..size {
      let id = y * size + x;
      w.add_room(id, (x as i32, y as i32));
      if x + 1 < size {
        w.connect(id, Direction::East, id + 1);
      }
      if y + 1 < size {
        w.connect(id, Direction::North, id + size);
      }
    }
  }
  w
}

#[test]
fn linear_dead_end() {
  let mut w = World::new(0);
  w.connect(0, Direction::East, 1);
  w.connect(1, Direction::East, 2);
  w.connect(2, Direction::East, 3);
  let adj = AdjacencyTable::build(&w);
  let d = explore(&adj, 0).unwrap();
  assert_eq!(d.mapped, BTreeSet::from([0, 1, 2, 3]));
  assert_eq!(d.leaves.intermediates(0, 3), Some(&[1, 2][..]));
  assert_eq!(d.leaves.intermediates(3, 0), Some(&[2, 1][..]));
  assert!(d.boughs.is_empty());
}

#[test]
fn simple_branch_registers_bough_and_leaves() {
  let adj = AdjacencyTable::build(&simple_branch());
  let d = explore(&adj, 0).unwrap();
  assert_eq!(d.mapped, BTreeSet::from([0, 1, 2, 3]));
  assert_eq!(d.boughs.pairs().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
  assert_eq!(d.leaves.degree(1), 2);
  assert_eq!(d.leaves.intermediates(2, 1), Some(&[][..]));
  assert_eq!(d.leaves.intermediates(3, 1), Some(&[][..]));
}

#[test]
fn closed_loop_is_one_leaf() {
  let mut w = World::new(0);
  w.connect(0, Direction::East, 1);
  w.connect(1, Direction::North, 2);
  w.connect(2, Direction::West, 3);
  w.connect(3, Direction::South, 0);
  let adj = AdjacencyTable::build(&w);
  let d = explore(&adj, 0).unwrap();
  assert_eq!(d.mapped.len(), 4);
  assert_eq!(d.leaves.pairs().collect::<Vec<_>>(), vec![(0, 0)]);
  assert!(d.boughs.is_empty());
}

#[test]
fn nested_junctions_chain_boughs() {
  let mut w = World::new(0);
  w.connect(0, Direction::East, 1);
  w.connect(1, Direction::North, 2);
  w.connect(1, Direction::South, 3);
  w.connect(1, Direction::East, 4);
  w.connect(4, Direction::North, 5);
  w.connect(4, Direction::South, 6);
  let adj = AdjacencyTable::build(&w);
  let d = explore(&adj, 0).unwrap();
  assert_eq!(d.boughs.degree(0), 1);
  assert_eq!(d.boughs.degree(1), 2);
  assert_eq!(d.boughs.degree(4), 1);
  assert_eq!(d.leaves.degree(1), 2);
  assert_eq!(d.leaves.degree(4), 2);
  assert_eq!(d.mapped, (0..=6).collect::<MappedSet>());
}

#[test]
fn isolated_start_is_mapped() {
  let mut w = World::new(7);
  w.add_room(7, (0, 0));
  let adj = AdjacencyTable::build(&w);
  let d = explore(&adj, 7).unwrap();
  assert_eq!(d.mapped, BTreeSet::from([7]));
  assert!(d.leaves.is_empty());
  assert!(d.boughs.is_empty());
}

#[test]
fn grid_is_fully_mapped() {
  let w = full_grid(5);
  let adj = AdjacencyTable::build(&w);
  let d = explore(&adj, 12).unwrap();
  assert_eq!(d.mapped, adj.reachable_from(12));
  assert_eq!(d.mapped.len(), 25);
}

#[test]
fn explore_into_skips_already_mapped_rooms() {
  let adj = AdjacencyTable::build(&simple_branch());
  let mut d = Decomposition::default();
  d.mapped.insert(2);
  explore_into(&adj, 0, &mut d).unwrap();
  // 2 is already mapped, so 1 is a corridor and 0..3 a single leaf
  assert_eq!(d.leaves.rooms().collect::<Vec<_>>(), vec![0, 3]);
  assert_eq!(d.leaves.intermediates(0, 3), Some(&[1][..]));
  assert!(d.boughs.is_empty());
  assert_eq!(d.mapped, BTreeSet::from([0, 1, 2, 3]));
}

#[test]
fn joined_stem_leaves_its_horizon_to_be_explored() {
  let mut w = World::new(0);
  w.connect(0, Direction::East, 1);
  w.connect(0, Direction::North, 2);
  w.connect(1, Direction::North, 3);
  w.connect(2, Direction::East, 3);
  w.connect(3, Direction::North, 4);
  w.connect(3, Direction::East, 5);
  let adj = AdjacencyTable::build(&w);
  let d = explore(&adj, 0).unwrap();
  assert_eq!(d.boughs.intermediates(0, 3), Some(&[1, 3, 2, 0, 2][..]));
  assert_eq!(d.leaves.rooms().collect::<Vec<_>>(), vec![3, 4, 5]);
  assert_eq!(d.mapped, (0..=5).collect::<MappedSet>());
}
