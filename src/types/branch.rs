//! A path under construction during tree extraction.

use super::{Growth, NodeId};

/// A path under construction during tree extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
  pub path: Vec<NodeId>,
  pub growth: Growth,
}

impl Branch {
  pub fn new(path: Vec<NodeId>, growth: Growth) -> Self {
    Self { path, growth }
  }

  /// Node the branch grew out of.
  pub fn origin(&self) -> Option<NodeId> {
    self.path.first().copied()
  }

  /// Node the branch currently ends at.
  pub fn end(&self) -> Option<NodeId> {
    self.path.last().copied()
  }

  /// True when the branch starts and ends on the same node.
  pub fn is_closed(&self) -> bool {
    self.path.len() > 1 && self.origin() == self.end()
  }
}
