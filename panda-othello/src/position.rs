//! A board paired with the side to move, and its one-line text form.

use crate::{Board, BoardError, ParseSideError, Side};
use derive_more::{Display, Error};

/// A board together with the side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side: Side,
}

#[derive(Debug, PartialEq, Error, Display)]
pub enum ParsePositionError {
    MissingBoard,
    MissingSide,
    TrailingInput,
    #[display(fmt = "{}", _0)]
    Board(BoardError),
    #[display(fmt = "{}", _0)]
    Side(ParseSideError),
}

impl From<BoardError> for ParsePositionError {
    fn from(err: BoardError) -> Self {
        ParsePositionError::Board(err)
    }
}

impl From<ParseSideError> for ParsePositionError {
    fn from(err: ParseSideError) -> Self {
        ParsePositionError::Side(err)
    }
}

impl Position {
    pub fn new(board: Board, side: Side) -> Self {
        Self { board, side }
    }

    pub fn to_line(&self) -> String {
        format!("{} {}", self.board.to_compact_string(), self.side.symbol())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(Board::default(), Side::default())
    }
}

impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut sections = line.split_whitespace();

        let board: Board = sections.next().ok_or(ParsePositionError::MissingBoard)?.parse()?;
        let side: Side = sections.next().ok_or(ParsePositionError::MissingSide)?.parse()?;

        if sections.next().is_some() {
            return Err(ParsePositionError::TrailingInput);
        }

        Ok(Self::new(board, side))
    }
}
