//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! Every frame evaluates from the perspective of its own side to move, so the
//! sign of a leaf score flips with each ply. Callers keep track of polarity with
//! the `maximizing` flag rather than the board contents.

use crate::eval::{Evaluator, Material};
use panda_othello::{Board, Side};

/// Lower bound for alpha; stands in for negative infinity.
pub const NEG_INFINITY: i32 = i32::MIN;

/// Upper bound for beta; stands in for positive infinity.
pub const POS_INFINITY: i32 = i32::MAX;

/// Counters gathered while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frames entered, leaves included.
    pub nodes: u64,
    /// Frames scored by the evaluator.
    pub leaves: u64,
    /// Move loops cut short by the alpha-beta window.
    pub cutoffs: u64,
}

impl std::ops::AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
    }
}

/// Runs searches with a fixed evaluator and accumulates [`SearchStats`].
#[derive(Clone, Debug, Default)]
pub struct Searcher<E = Material> {
    evaluator: E,
    stats: SearchStats,
}

impl<E: Evaluator> Searcher<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            stats: SearchStats::default(),
        }
    }

    /// Statistics accumulated since construction or the last [`reset_stats`](Self::reset_stats).
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Minimax value of `board` with `side` to move, searching `depth` more plies.
    ///
    /// The frame is terminal when `depth` is exhausted or `side` has no legal move;
    /// it is then scored from `side`'s perspective. Otherwise children are visited
    /// in row-major move order, and the loop stops once `beta <= alpha`.
    pub fn minimax(
        &mut self,
        board: &Board,
        side: Side,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        let moves = board.legal_moves(side);
        if depth == 0 || moves.is_empty() {
            self.stats.leaves += 1;
            return self.evaluator.evaluate(board, side);
        }

        if maximizing {
            let mut max_value = NEG_INFINITY;
            for mv in moves {
                let child = board.make_move(side, mv);
                let value = self.minimax(&child, !side, depth - 1, alpha, beta, false);
                max_value = max_value.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            max_value
        } else {
            let mut min_value = POS_INFINITY;
            for mv in moves {
                let child = board.make_move(side, mv);
                let value = self.minimax(&child, !side, depth - 1, alpha, beta, true);
                min_value = min_value.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            min_value
        }
    }

    /// Plain minimax over the full tree, without pruning.
    /// Returns the same value as [`minimax`](Self::minimax) with an open window.
    pub fn minimax_unpruned(
        &mut self,
        board: &Board,
        side: Side,
        depth: u32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        let moves = board.legal_moves(side);
        if depth == 0 || moves.is_empty() {
            self.stats.leaves += 1;
            return self.evaluator.evaluate(board, side);
        }

        let values = moves.into_iter().map(|mv| {
            let child = board.make_move(side, mv);
            self.minimax_unpruned(&child, !side, depth - 1, !maximizing)
        });

        let best = if maximizing { values.max() } else { values.min() };
        best.unwrap_or_else(|| self.evaluator.evaluate(board, side))
    }
}

/// Material-count minimax from a fresh [`Searcher`].
/// Use `alpha = NEG_INFINITY` and `beta = POS_INFINITY` for a full-width search.
pub fn minimax(
    board: &Board,
    side: Side,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> i32 {
    Searcher::new(Material).minimax(board, side, depth, alpha, beta, maximizing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluate;
    use panda_othello::test_utils::positions;
    use panda_othello::Location;

    /// Weights corners heavily so that pruning decisions differ from plain material.
    struct Corners;

    impl Evaluator for Corners {
        fn evaluate(&self, board: &Board, side: Side) -> i32 {
            let last = board.size() - 1;
            let corners = [(0, 0), (0, last), (last, 0), (last, last)];
            let corner_score: i32 = corners
                .iter()
                .map(|&(col, row)| match board.get(Location::new(col, row)) {
                    Some(cell) if cell.is(side) => 10,
                    Some(cell) if cell.is(!side) => -10,
                    _ => 0,
                })
                .sum();
            corner_score + evaluate(board, side)
        }
    }

    #[test]
    fn depth_zero_is_static_evaluation() {
        let board = Board::default().make_move(Side::Black, Location::new(3, 2));
        for &maximizing in &[true, false] {
            assert_eq!(
                minimax(&board, Side::White, 0, NEG_INFINITY, POS_INFINITY, maximizing),
                -3
            );
        }
    }

    #[test]
    fn no_moves_is_static_evaluation() {
        let position = positions::load(positions::FULL).unwrap();
        let value = minimax(&position.board, Side::Black, 5, NEG_INFINITY, POS_INFINITY, true);
        assert_eq!(value, 0);

        let position = positions::load(positions::WHITE_MUST_PASS).unwrap();
        let value = minimax(&position.board, Side::White, 3, NEG_INFINITY, POS_INFINITY, false);
        assert_eq!(value, evaluate(&position.board, Side::White));
    }

    #[test]
    fn one_ply_max_picks_best_capture() {
        // Black to move: A1 captures six stones along the top edge.
        let position = positions::load(positions::ONE_MOVE).unwrap();
        let after = position.board.make_move(Side::Black, Location::new(0, 0));
        let value = minimax(&position.board, Side::Black, 1, NEG_INFINITY, POS_INFINITY, true);
        assert_eq!(value, evaluate(&after, Side::White));
    }

    #[test]
    fn opening_depth_one_values() {
        // Every opening reply leaves the mover three stones ahead, seen from White's frame.
        let board = Board::default();
        let value = minimax(&board, Side::Black, 1, NEG_INFINITY, POS_INFINITY, true);
        assert_eq!(value, -3);
    }

    #[test]
    fn pruning_matches_full_minimax_from_opening() {
        let board = Board::default();
        for depth in 0..5 {
            for &maximizing in &[true, false] {
                let mut pruned = Searcher::new(Material);
                let mut full = Searcher::new(Material);
                let pruned_value =
                    pruned.minimax(&board, Side::Black, depth, NEG_INFINITY, POS_INFINITY, maximizing);
                let full_value = full.minimax_unpruned(&board, Side::Black, depth, maximizing);
                assert_eq!(pruned_value, full_value, "depth {}", depth);
                assert!(pruned.stats().nodes <= full.stats().nodes);
            }
        }
    }

    #[test]
    fn pruning_matches_full_minimax_with_positional_weights() {
        let mut board = Board::default();
        let mut side = Side::Black;
        for _ in 0..12 {
            if let Some(mv) = board.legal_moves(side).first() {
                board.apply_move(side, mv);
            }
            side = !side;

            let pruned =
                Searcher::new(Corners).minimax(&board, side, 3, NEG_INFINITY, POS_INFINITY, true);
            let full = Searcher::new(Corners).minimax_unpruned(&board, side, 3, true);
            assert_eq!(pruned, full);
        }
    }

    #[test]
    fn pruning_cuts_nodes() {
        let mut searcher = Searcher::new(Material);
        searcher.minimax(&Board::default(), Side::Black, 4, NEG_INFINITY, POS_INFINITY, true);
        let pruned = searcher.stats();
        assert!(pruned.cutoffs > 0);

        searcher.reset_stats();
        searcher.minimax_unpruned(&Board::default(), Side::Black, 4, true);
        assert!(searcher.stats().nodes > pruned.nodes);
        assert_eq!(searcher.stats().cutoffs, 0);
    }

    #[test]
    fn search_does_not_modify_board() {
        let board = Board::default();
        let snapshot = board.clone();
        minimax(&board, Side::Black, 3, NEG_INFINITY, POS_INFINITY, true);
        assert_eq!(board, snapshot);
    }
}
