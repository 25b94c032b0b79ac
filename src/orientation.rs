//! Explorer state and movement operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compass direction an explorer can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// The heading after a 90° counterclockwise turn.
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The heading after a 90° clockwise turn.
    pub fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        };
        write!(f, "{letter}")
    }
}

/// A single movement instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Turn 90° counterclockwise (`L`).
    Left,
    /// Turn 90° clockwise (`R`).
    Right,
    /// Move one unit in the current heading (`M`).
    Move,
}

/// An explorer's parsed starting state: coordinates plus heading.
///
/// Produced by the position parser, consumed to construct an [`Orientation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
    pub heading: Heading,
}

/// The state of one explorer: coordinates tagged by the heading it faces.
///
/// One variant per compass direction, each carrying `(x, y)`. The heading only
/// changes through an explicit turn instruction; coordinates only change
/// through a move instruction along the current heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    North { x: i64, y: i64 },
    East { x: i64, y: i64 },
    South { x: i64, y: i64 },
    West { x: i64, y: i64 },
}

impl Orientation {
    /// Builds the initial orientation for a parsed position.
    pub fn new(position: Position) -> Self {
        let Position { x, y, heading } = position;
        match heading {
            Heading::North => Self::North { x, y },
            Heading::East => Self::East { x, y },
            Heading::South => Self::South { x, y },
            Heading::West => Self::West { x, y },
        }
    }

    pub fn x(self) -> i64 {
        match self {
            Self::North { x, .. } | Self::East { x, .. } | Self::South { x, .. } | Self::West { x, .. } => x,
        }
    }

    pub fn y(self) -> i64 {
        match self {
            Self::North { y, .. } | Self::East { y, .. } | Self::South { y, .. } | Self::West { y, .. } => y,
        }
    }

    pub fn heading(self) -> Heading {
        match self {
            Self::North { .. } => Heading::North,
            Self::East { .. } => Heading::East,
            Self::South { .. } => Heading::South,
            Self::West { .. } => Heading::West,
        }
    }

    /// Applies one instruction and returns the resulting orientation.
    ///
    /// Pure and total over every (heading, instruction) pair:
    /// `Move` steps one unit along the current heading (north is +y, east is
    /// +x), `Left`/`Right` rotate through the N→E→S→W cycle in place. There
    /// is no bounds check here; explorers may walk off the landing area once
    /// their starting position has been validated.
    pub fn apply(self, instruction: Instruction) -> Self {
        match instruction {
            Instruction::Move => match self {
                Self::North { x, y } => Self::North { x, y: y + 1 },
                Self::East { x, y } => Self::East { x: x + 1, y },
                Self::South { x, y } => Self::South { x, y: y - 1 },
                Self::West { x, y } => Self::West { x: x - 1, y },
            },
            Instruction::Left => Self::with_heading(self.heading().left(), self.x(), self.y()),
            Instruction::Right => Self::with_heading(self.heading().right(), self.x(), self.y()),
        }
    }

    fn with_heading(heading: Heading, x: i64, y: i64) -> Self {
        Self::new(Position { x, y, heading })
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x(), self.y(), self.heading())
    }
}
