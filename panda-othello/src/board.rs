//! Game rules: legality, move enumeration and move application.
//!
//! Cells are stored row-major from the upper-left. Every scan over the board
//! runs top-to-bottom, then left-to-right, and callers rely on that order.

use crate::{utils, Cell, Location, MoveList, Side, DEFAULT_EDGE_LENGTH, MAX_EDGE_LENGTH};
use derive_more::{Display, Error};
use itertools::iproduct;
use std::fmt;

/// The eight compass directions as `(dx, dy)`.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A square grid of cells.
///
/// Boards are plain values; search code clones one per explored branch so that
/// sibling branches never observe each other's moves.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display(fmt = "unsupported board size {}", size)]
    UnsupportedSize { size: usize },
    #[display(fmt = "expected {} cells, found {}", expected, found)]
    WrongCellCount { expected: usize, found: usize },
    #[display(fmt = "invalid cell character {:?}", symbol)]
    InvalidSymbol { symbol: char },
    #[display(fmt = "invalid cell code {}", code)]
    InvalidCode { code: u8 },
}

/// Reasons a checked move is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display(fmt = "location is off the board")]
    OutOfBounds,
    #[display(fmt = "location is occupied")]
    Occupied,
    #[display(fmt = "move flips no stones")]
    NoFlips,
}

impl Default for Board {
    /// The standard 8x8 starting position.
    fn default() -> Self {
        Self::starting_board(DEFAULT_EDGE_LENGTH)
    }
}

impl Board {
    /// An empty board with edge length `size`.
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_EDGE_LENGTH {
            return Err(BoardError::UnsupportedSize { size });
        }

        Ok(Self::empty_board(size))
    }

    /// The starting position: the center 2x2 block with white on the main diagonal.
    /// `size` must be even.
    pub fn starting(size: usize) -> Result<Self, BoardError> {
        if size < 2 || size % 2 != 0 || size > MAX_EDGE_LENGTH {
            return Err(BoardError::UnsupportedSize { size });
        }

        Ok(Self::starting_board(size))
    }

    /// Build a board from row-major cells.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_EDGE_LENGTH {
            return Err(BoardError::UnsupportedSize { size });
        }
        if cells.len() != size * size {
            return Err(BoardError::WrongCellCount {
                expected: size * size,
                found: cells.len(),
            });
        }

        Ok(Self { size, cells })
    }

    /// Build a board from a square grid of cell codes (0 empty, 1 black, 2 white),
    /// indexed as `rows[y][x]`.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(BoardError::WrongCellCount {
                    expected: size,
                    found: row.len(),
                });
            }
            for &code in row {
                cells.push(Cell::try_from(code).or(Err(BoardError::InvalidCode { code }))?);
            }
        }

        Self::from_cells(size, cells)
    }

    fn empty_board(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    fn starting_board(size: usize) -> Self {
        let mut board = Self::empty_board(size);
        let (low, high) = (size / 2 - 1, size / 2);
        board.set(Location::new(low, low), Cell::Stone(Side::White));
        board.set(Location::new(high, high), Cell::Stone(Side::White));
        board.set(Location::new(high, low), Cell::Stone(Side::Black));
        board.set(Location::new(low, high), Cell::Stone(Side::Black));
        board
    }

    /// The edge length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        loc.col < self.size && loc.row < self.size
    }

    /// Get the cell at `loc`, or None if it is off the board.
    #[inline]
    pub fn get(&self, loc: Location) -> Option<Cell> {
        if self.contains(loc) {
            Some(self.cells[loc.to_index(self.size)])
        } else {
            None
        }
    }

    /// Overwrite the cell at `loc` without applying any rules.
    /// Panics if `loc` is off the board.
    #[inline]
    pub fn set(&mut self, loc: Location, cell: Cell) {
        assert!(self.contains(loc), "{:?} is off the board", loc);
        self.cells[loc.to_index(self.size)] = cell;
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count the stones belonging to `side`.
    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|cell| cell.is(side)).count()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn count_occupied(&self) -> usize {
        self.cells.len() - self.count_empty()
    }

    /// Number of opponent stones `side` would flip walking from `loc` in `direction`:
    /// the length of the contiguous opponent run, if a stone of `side` closes it off.
    fn bracketed_run(&self, side: Side, loc: Location, direction: (isize, isize)) -> usize {
        let mut distance = 1;
        while let Some(next) = loc.offset(direction, distance, self.size) {
            match self.cells[next.to_index(self.size)] {
                Cell::Stone(stone) if stone != side => distance += 1,
                Cell::Stone(_) => return (distance - 1) as usize,
                Cell::Empty => return 0,
            }
        }

        0
    }

    /// Returns whether `side` may place a stone at `loc`.
    pub fn is_legal(&self, side: Side, loc: Location) -> bool {
        match self.get(loc) {
            Some(Cell::Empty) => DIRECTIONS
                .iter()
                .any(|&direction| self.bracketed_run(side, loc, direction) > 0),
            _ => false,
        }
    }

    /// [`is_legal`](Self::is_legal) for raw, possibly negative, coordinates.
    pub fn is_legal_xy(&self, side: Side, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.is_legal(side, Location::new(x as usize, y as usize))
    }

    /// Get the legal moves for `side` in row-major order.
    pub fn legal_moves(&self, side: Side) -> MoveList {
        iproduct!(0..self.size, 0..self.size)
            .map(|(row, col)| Location::new(col, row))
            .filter(|&loc| self.is_legal(side, loc))
            .collect()
    }

    /// Returns whether `side` has at least one legal move.
    pub fn has_legal_move(&self, side: Side) -> bool {
        iproduct!(0..self.size, 0..self.size)
            .any(|(row, col)| self.is_legal(side, Location::new(col, row)))
    }

    /// Place a stone for `side` at `loc` and flip every bracketed opponent run.
    /// Returns the number of stones flipped.
    ///
    /// The move must be legal; this is only checked in debug builds.
    /// Use [`try_apply_move`](Self::try_apply_move) for untrusted input.
    pub fn apply_move(&mut self, side: Side, loc: Location) -> usize {
        debug_assert!(self.is_legal(side, loc), "illegal move {} for {}", loc, side);

        self.set(loc, Cell::Stone(side));

        let mut flipped = 0;
        for &direction in DIRECTIONS.iter() {
            let run = self.bracketed_run(side, loc, direction);
            for distance in 1..=run as isize {
                if let Some(target) = loc.offset(direction, distance, self.size) {
                    self.cells[target.to_index(self.size)] = Cell::Stone(side);
                }
            }
            flipped += run;
        }

        flipped
    }

    /// Check a move, then apply it.
    pub fn try_apply_move(&mut self, side: Side, loc: Location) -> Result<usize, MoveError> {
        match self.get(loc) {
            None => Err(MoveError::OutOfBounds),
            Some(Cell::Stone(_)) => Err(MoveError::Occupied),
            Some(Cell::Empty) if !self.is_legal(side, loc) => Err(MoveError::NoFlips),
            Some(Cell::Empty) => Ok(self.apply_move(side, loc)),
        }
    }

    /// Return a copy of this board with a legal move applied.
    pub fn make_move(&self, side: Side, loc: Location) -> Self {
        let mut next = self.clone();
        next.apply_move(side, loc);
        next
    }

    /// Returns whether neither side can move.
    pub fn is_finished(&self) -> bool {
        !self.has_legal_move(Side::Black) && !self.has_legal_move(Side::White)
    }

    /// The side with more stones on a finished board, or None for a draw
    /// or a game still in progress.
    pub fn winner(&self) -> Option<Side> {
        if !self.is_finished() {
            return None;
        }

        let (black, white) = (self.count(Side::Black), self.count(Side::White));
        if black > white {
            Some(Side::Black)
        } else if white > black {
            Some(Side::White)
        } else {
            None
        }
    }

    /// One character per cell, row-major, as accepted by [`FromStr`](std::str::FromStr).
    pub fn to_compact_string(&self) -> String {
        self.cells.iter().map(|cell| cell.symbol()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells.iter().map(|cell| cell.symbol()), self.size, f)
    }
}

/// Parse a board from `size * size` cell characters (`-` or `.` empty, `X` black,
/// `O` white). Whitespace is ignored and the edge length is inferred.
impl std::str::FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|symbol| Cell::from_symbol(symbol).ok_or(BoardError::InvalidSymbol { symbol }))
            .collect::<Result<Vec<Cell>, BoardError>>()?;

        let size = (1..=MAX_EDGE_LENGTH)
            .find(|size| size * size >= cells.len())
            .unwrap_or(MAX_EDGE_LENGTH);
        Self::from_cells(size, cells)
    }
}
