//! Static evaluation of positions.

use panda_othello::{Board, Side};

/// Scores a position from the perspective of `side`: higher is better for `side`.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, side: Side) -> i32;
}

/// Material count: # stones of `side` - # stones of the opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct Material;

impl Evaluator for Material {
    #[inline]
    fn evaluate(&self, board: &Board, side: Side) -> i32 {
        board.count(side) as i32 - board.count(!side) as i32
    }
}

/// Score `board` by material from the perspective of `side`.
#[inline]
pub fn evaluate(board: &Board, side: Side) -> i32 {
    Material.evaluate(board, side)
}
