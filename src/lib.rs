//! # boughwalk
//!
//! Compiles a four-directional room graph into one replayable walk.
//!
//! ## Architecture
//!
//! The graph is decomposed from a start room into junctions, dead-end
//! "leaves" and "boughs" (corridors between junctions), then folded:
//!
//! 1. [`adjacency`]: direction-ordered neighbor table read through [`GraphAdapter`].
//! 2. [`explore`]: branch classification, growth and per-junction tree
//!    extraction, registered into two [`PathTable`]s.
//! 3. [`compact`]: leaves flattened into per-junction round trips.
//! 4. [`fold`]: single-bough junctions absorbed into their neighbors.
//! 5. [`compiler`]: the start room's walk, dry-run against a [`Traveler`] and
//!    cut at the visit ceiling.
//!
//! [`world`] holds the in-memory [`World`] and [`Player`]; [`world_io`] and
//! [`report_io`] move worlds and reports in and out of JSON.

pub mod adjacency;
pub mod compact;
pub mod compiler;
pub mod error;
pub mod explore;
pub mod fold;
pub mod report_io;
#[cfg(test)]
mod report_io_test;
pub mod types;
pub mod world;
pub mod world_io;

pub use adjacency::AdjacencyTable;
pub use compiler::{CompileOptions, DEFAULT_VISIT_CEILING, compile_walk, compile_walk_report};
pub use error::{ReportError, WalkError, WorldError};
pub use types::{CompiledWalk, Direction, NodeId, PathTable, WalkReport};
pub use world::{GraphAdapter, Player, Traveler, World};
