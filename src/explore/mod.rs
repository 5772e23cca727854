//! Decomposition of a room graph into leaves (dead-end paths) and boughs
//! (corridors between junctions).
//!
//! Leaves-first:
//! - [`classify`]: first step from a root along each unexplored exit.
//! - [`grow`]: extends a stub along single-exit corridors.
//! - [`extract_tree`]: partitions one root's frontier into leaf and stem paths.
//! - [`explore`]: applies `extract_tree` across every discovered junction.

pub mod classify;
pub mod explorer;
#[cfg(test)]
mod explorer_test;
pub mod grow;
pub mod tree;

pub use classify::classify;
pub use explorer::{Decomposition, explore, explore_into};
pub use grow::grow;
pub use tree::{Tree, extract_tree};
