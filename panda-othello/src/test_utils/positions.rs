//! Fixture positions stored as one-line strings: `<cells> <side>`.
//!
//! `<cells>` is the compact board notation accepted by [`Board`](crate::Board)'s
//! `FromStr` (row-major, `-` empty, `X` black, `O` white); `<side>` is the side to move.

use crate::{ParsePositionError, Position};

/// Standard opening, black to move.
pub const OPENING: &str =
    "---------------------------OX------XO--------------------------- X";

/// Black to move with exactly one legal move (A1), which captures a
/// single bracketed line along the top edge.
pub const ONE_MOVE: &str =
    "-OOOOOOXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX X";

/// A full board: neither side can move.
pub const FULL: &str =
    "XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOO O";

/// Nearly full board where White has no move but Black does.
pub const WHITE_MUST_PASS: &str =
    "XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXO-- O";

/// Parse one of the fixture strings above.
pub fn load(line: &str) -> Result<Position, ParsePositionError> {
    line.parse()
}
