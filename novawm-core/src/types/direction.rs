//! Screen-relative directions.
//!
//! Used to walk the monitor graph ("move this window to the monitor on the
//! left") and anywhere else a cardinal step on screen is needed.
//!
//! # Examples
//!
//! ```
//! use novawm_core::types::Direction;
//!
//! let step = Direction::Left;
//! assert!(step.is_horizontal());
//! assert_eq!(step.opposite(), Direction::Right);
//! assert_eq!(format!("{}", step), "left");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four on-screen directions. `Down` means increasing `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order neighbor slots are stored.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Checks if this direction is horizontal (`Left` or `Right`).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Checks if this direction is vertical (`Up` or `Down`).
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Stable slot index in `0..4`, matching [`Direction::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

impl fmt::Display for Direction {
    /// Formats the `Direction` as a lowercase string (e.g. "up", "left").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}
