//! One of the four compass moves between rooms.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four compass moves between rooms.
///
/// Declaration order is the enumeration priority used everywhere a room's
/// exits are listed, so derived `Ord` and [`Direction::ALL`] agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
  #[serde(rename = "n")]
  North,
  #[serde(rename = "s")]
  South,
  #[serde(rename = "e")]
  East,
  #[serde(rename = "w")]
  West,
}

impl Direction {
  /// All directions in enumeration priority order.
  pub const ALL: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
  ];

  /// The move that undoes this one.
  pub fn inverse(self) -> Direction {
    match self {
      Direction::North => Direction::South,
      Direction::South => Direction::North,
      Direction::East => Direction::West,
      Direction::West => Direction::East,
    }
  }

  /// Single-letter code (`n`, `s`, `e`, `w`).
  pub fn code(self) -> char {
    match self {
      Direction::North => 'n',
      Direction::South => 's',
      Direction::East => 'e',
      Direction::West => 'w',
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.code())
  }
}

impl FromStr for Direction {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "n" | "north" => Ok(Direction::North),
      "s" | "south" => Ok(Direction::South),
      "e" | "east" => Ok(Direction::East),
      "w" | "west" => Ok(Direction::West),
      other => Err(format!("unknown direction '{}'", other)),
    }
  }
}
