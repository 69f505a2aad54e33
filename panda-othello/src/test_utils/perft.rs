//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Side};

/// Count the leaves `depth` plies below the standard 8x8 starting position.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(&Board::default(), Side::Black, depth, false)
}

/// Count the leaves `depth` plies below `board` with `side` to move.
/// A pass counts as a ply; two consecutive passes end the game.
pub fn leaves_below(board: &Board, side: Side, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves(side);
    if moves.is_empty() {
        // Both sides passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !side, depth - 1, true);
    }

    moves
        .into_iter()
        .map(|mv| leaves_below(&board.make_move(side, mv), !side, depth - 1, false))
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}
