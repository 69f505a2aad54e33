//! The two sides of a game and the contents of a single cell.

use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Side {
    Black,
    White,
}

impl Default for Side {
    /// Gets the starting side (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    /// Gets the other side.
    fn not(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl Side {
    /// The small integer code for this side: 1 for black, 2 for white.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Side::Black => 1,
            Side::White => 2,
        }
    }

    /// The single-character stone symbol used in board strings.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Side::Black => 'X',
            Side::White => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("Black"),
            Side::White => f.write_str("White"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid side")]
pub struct ParseSideError;

/// Parse a side from its name or stone symbol, ignoring case.
impl std::str::FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "x" | "b" => Ok(Side::Black),
            "white" | "o" | "w" => Ok(Side::White),
            _ => Err(ParseSideError),
        }
    }
}

/// Convert from a side code. Only 1 and 2 are sides.
impl TryFrom<u8> for Side {
    type Error = ParseSideError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Side::Black),
            2 => Ok(Side::White),
            _ => Err(ParseSideError),
        }
    }
}

/// The contents of one board cell.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Stone(Side),
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        Self::Stone(side)
    }
}

impl Cell {
    /// Returns whether this cell holds a stone of `side`.
    #[inline]
    pub fn is(self, side: Side) -> bool {
        self == Cell::Stone(side)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The integer code for this cell: 0 for empty, otherwise the side's code.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Stone(side) => side.code(),
        }
    }

    /// The character used for this cell in compact board strings.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Stone(side) => side.symbol(),
        }
    }

    /// Parse a cell from its compact board-string character.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '-' | '.' => Some(Cell::Empty),
            'X' | '*' => Some(Cell::Stone(Side::Black)),
            'O' => Some(Cell::Stone(Side::White)),
            _ => None,
        }
    }
}

/// Convert from a cell code: 0 for empty, 1 or 2 for a side.
impl TryFrom<u8> for Cell {
    type Error = ParseSideError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::Empty),
            code => Side::try_from(code).map(Cell::Stone),
        }
    }
}
