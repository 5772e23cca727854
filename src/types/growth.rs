//! Classification tag carried by a branch during tree extraction.

use std::fmt;

/// Classification tag carried by a branch during tree extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
  /// Stub with a single way forward; must be grown further.
  Continue,
  /// Ends in a dead end.
  Done,
  /// Ends at a junction.
  Diverge,
  /// Ends at a junction that also reconnects to the branch's origin.
  DivergeLoop,
  /// Closes back onto the branch's origin.
  DoneLoop,
}

impl Growth {
  /// True once the branch needs no further growth.
  pub fn is_terminal(self) -> bool {
    !matches!(self, Growth::Continue)
  }

  pub fn is_loop(self) -> bool {
    matches!(self, Growth::DivergeLoop | Growth::DoneLoop)
  }
}

impl fmt::Display for Growth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Growth::Continue => write!(f, "continue"),
      Growth::Done => write!(f, "done"),
      Growth::Diverge => write!(f, "diverge"),
      Growth::DivergeLoop => write!(f, "diverge+loop"),
      Growth::DoneLoop => write!(f, "done+loop"),
    }
  }
}
