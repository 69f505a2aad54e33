//! Search and agent properties over positions reached by random play.

use panda_othello::{Board, Side};
use panda_player::search::{NEG_INFINITY, POS_INFINITY};
use panda_player::{Agent, AgentConfig, Material, Searcher};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn random_positions(seed: u64, plies: usize) -> Vec<(Board, Side)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::default();
    let mut side = Side::Black;
    let mut positions = Vec::new();

    for _ in 0..plies {
        if board.is_finished() {
            break;
        }
        if let Some(&mv) = board.legal_moves(side).as_slice().choose(&mut rng) {
            board.apply_move(side, mv);
        }
        side = !side;
        positions.push((board.clone(), side));
    }

    positions
}

#[test]
fn alpha_beta_matches_full_minimax() {
    for seed in 0..4 {
        for (board, side) in random_positions(seed, 40).into_iter().step_by(3) {
            for &maximizing in &[true, false] {
                let pruned = Searcher::new(Material).minimax(
                    &board,
                    side,
                    3,
                    NEG_INFINITY,
                    POS_INFINITY,
                    maximizing,
                );
                let full = Searcher::new(Material).minimax_unpruned(&board, side, 3, maximizing);
                assert_eq!(pruned, full, "\n{}\n{} to move", board, side);
            }
        }
    }
}

#[test]
fn agent_choices_are_legal_and_deterministic() {
    for (board, side) in random_positions(99, 50).into_iter().step_by(5) {
        let mut first = Agent::new(AgentConfig::default().with_seed(1));
        let mut second = Agent::new(AgentConfig::default().with_seed(2));

        let choice = first.choose_move(&board, side);
        assert_eq!(choice, second.choose_move(&board, side));

        let moves = board.legal_moves(side);
        match choice {
            Some(mv) => assert!(moves.contains(mv)),
            None => assert!(moves.is_empty()),
        }
    }
}

#[test]
fn agent_value_matches_root_search() {
    let board = Board::default();
    let mut agent = Agent::new(AgentConfig::default().with_seed(5));
    let decision = agent.decide(&board, Side::Black);

    for &(mv, value) in &decision.scores {
        let child = board.make_move(Side::Black, mv);
        let expected =
            panda_player::minimax(&child, Side::White, 3, NEG_INFINITY, POS_INFINITY, false);
        assert_eq!(value, expected);
    }
}

#[test]
fn self_play_reaches_the_end() {
    let mut black = Agent::new(AgentConfig::default().with_depth(1).with_seed(0));
    let mut white = Agent::new(AgentConfig::default().with_depth(1).with_seed(0));
    let mut board = Board::starting(6).unwrap();
    let mut side = Side::Black;

    while !board.is_finished() {
        let agent = match side {
            Side::Black => &mut black,
            Side::White => &mut white,
        };
        if let Some(mv) = agent.choose_move(&board, side) {
            assert!(board.try_apply_move(side, mv).is_ok());
        }
        side = !side;
    }

    assert!(board.legal_moves(Side::Black).is_empty());
    assert!(board.legal_moves(Side::White).is_empty());
}
