//! Core types shared by the decomposition pipeline.

use std::collections::BTreeSet;

mod branch;
mod compiled_walk;
mod direction;
mod growth;
mod path_table;
mod walk_report;

pub use branch::Branch;
pub use compiled_walk::CompiledWalk;
pub use direction::Direction;
pub use growth::Growth;
pub use path_table::PathTable;
pub use walk_report::WalkReport;

/// Room identity.
pub type NodeId = u32;

/// Rooms already compiled; grows monotonically during exploration.
pub type MappedSet = BTreeSet<NodeId>;
