//! `panda-othello` implements the rules of Othello-style tile-flipping games
//! on a square board of any side length.
//!
//! The crate is organized in three layers:
//!
//!  - [`Side`], [`Cell`] and [`Location`] are the small value types that make up a position.
//!  - [`Board`] owns a grid of cells and implements move legality, move enumeration
//!    and move application. Boards are plain values: search code clones a board
//!    for every branch it explores.
//!  - [`Position`] pairs a board with the side to move and reads/writes the one-line
//!    text form used by the player's connector.
//!
//! [`test_utils`] holds perft and a few fixture positions used by tests and benchmarks.

pub mod test_utils;

mod board;
mod location;
mod position;
mod side;
mod utils;

pub use board::*;
pub use location::*;
pub use position::*;
pub use side::*;

/// The edge length of a standard Othello board.
pub const DEFAULT_EDGE_LENGTH: usize = 8;

/// The largest supported edge length; columns are labelled `A` through `Z`.
pub const MAX_EDGE_LENGTH: usize = 26;
