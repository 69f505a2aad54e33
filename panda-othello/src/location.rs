//! Code for working with [`Location`]s on the board.

use crate::MAX_EDGE_LENGTH;
use derive_more::{Display, Error, From, Into};
use itertools::Itertools;
use std::fmt::{self, Formatter, Write};

const COLUMN_LABELS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A location on the board as `(col, row)`, i.e. `(x, y)`, counted from the upper-left.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Location {
    pub col: usize,
    pub row: usize,
}

/// An ordered list of locations, in the order they were found.
/// Move lists produced by a [`Board`](crate::Board) are row-major.
#[derive(Clone, Debug, Default, Eq, PartialEq, From, Into)]
pub struct MoveList(Vec<Location>);

impl Location {
    #[inline]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Get the `(col, row)` coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.col, self.row)
    }

    /// Convert from a row-major cell index on a board of edge length `size`.
    #[inline]
    pub fn from_index(index: usize, size: usize) -> Self {
        Self::new(index % size, index / size)
    }

    /// Convert into a row-major cell index on a board of edge length `size`.
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Step `distance` cells in direction `(dx, dy)`.
    /// Returns None if the result falls off a board of edge length `size`.
    #[inline]
    pub fn offset(self, (dx, dy): (isize, isize), distance: isize, size: usize) -> Option<Self> {
        let col = self.col as isize + dx * distance;
        let row = self.row as isize + dy * distance;
        if col < 0 || row < 0 || col >= size as isize || row >= size as isize {
            None
        } else {
            Some(Self::new(col as usize, row as usize))
        }
    }
}

impl From<(usize, usize)> for Location {
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col, row)
    }
}

/// Convert this [`Location`] into string notation ("D3"): column letter, then 1-based row.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = COLUMN_LABELS.chars().nth(self.col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        write!(f, "{}", self.row + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from its 1-indexed string notation ("A4", "c12").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_LABELS.find(col_str).ok_or(ParseLocationError)?;
        let row: usize = chars.as_str().parse().or(Err(ParseLocationError))?;

        if row == 0 || row > MAX_EDGE_LENGTH {
            return Err(ParseLocationError);
        }

        Ok(Self::new(col, row - 1))
    }
}

impl MoveList {
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn push(&mut self, loc: Location) {
        self.0.push(loc)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether `loc` is in this list.
    pub fn contains(&self, loc: Location) -> bool {
        self.0.contains(&loc)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Location> {
        self.0.get(index).copied()
    }

    #[inline]
    pub fn first(&self) -> Option<Location> {
        self.get(0)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Location> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.0
    }
}

impl IntoIterator for MoveList {
    type Item = Location;
    type IntoIter = std::vec::IntoIter<Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = Location;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Location>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl FromIterator<Location> for MoveList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}
