//! The move-choosing policy.
//!
//! For each legal move the agent plays it on a copy of the board and searches
//! the opponent's replies to the configured depth. The first move with the
//! strictly greatest value wins, so ties go to the earliest move in row-major
//! order. With nothing found it falls back to a uniformly random legal move.

use crate::config::AgentConfig;
use crate::eval::Material;
use crate::search::{SearchStats, Searcher, NEG_INFINITY, POS_INFINITY};
use panda_othello::{Board, Location, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

/// The outcome of one call to [`Agent::decide`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decision {
    /// The move to play, or None when the side has no legal move.
    pub choice: Option<Location>,
    /// Search value of every candidate, in the order they were searched.
    pub scores: Vec<(Location, i32)>,
    /// Whether `choice` came from the random fallback.
    pub random_fallback: bool,
    /// Search statistics for this decision alone.
    pub stats: SearchStats,
}

impl Decision {
    /// The value of the chosen move, if it was searched.
    pub fn value(&self) -> Option<i32> {
        let choice = self.choice?;
        self.scores
            .iter()
            .find(|(loc, _)| *loc == choice)
            .map(|&(_, value)| value)
    }
}

/// Fixed-depth alpha-beta player.
pub struct Agent<R = StdRng> {
    config: AgentConfig,
    searcher: Searcher<Material>,
    rng: R,
}

impl Agent<StdRng> {
    /// Build an agent, seeding its fallback RNG from `config.seed` or from entropy.
    pub fn new(config: AgentConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl Default for Agent<StdRng> {
    fn default() -> Self {
        Self::new(AgentConfig::default())
    }
}

impl<R: Rng> Agent<R> {
    pub fn with_rng(config: AgentConfig, rng: R) -> Self {
        Self {
            config,
            searcher: Searcher::new(Material),
            rng,
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// A constant display identifier for this agent.
    pub fn face(&self) -> &'static str {
        "🐼"
    }

    /// Choose a move for `side`, or None if it has no legal move.
    /// `board` is left untouched.
    pub fn choose_move(&mut self, board: &Board, side: Side) -> Option<Location> {
        self.decide(board, side).choice
    }

    /// Choose a move for `side` and report how every candidate scored.
    pub fn decide(&mut self, board: &Board, side: Side) -> Decision {
        self.searcher.reset_stats();

        let moves = board.legal_moves(side);
        let mut scores = Vec::with_capacity(moves.len());
        let mut best: Option<(Location, i32)> = None;

        for mv in &moves {
            let child = board.make_move(side, mv);
            let value = self.searcher.minimax(
                &child,
                !side,
                self.config.depth,
                NEG_INFINITY,
                POS_INFINITY,
                false,
            );
            trace!(%side, candidate = %mv, value, "searched candidate");

            scores.push((mv, value));
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }

        let stats = self.searcher.stats();
        match best {
            Some((mv, value)) => {
                debug!(%side, choice = %mv, value, nodes = stats.nodes, "chose move");
                Decision {
                    choice: Some(mv),
                    scores,
                    random_fallback: false,
                    stats,
                }
            }
            None => {
                let choice = moves.as_slice().choose(&mut self.rng).copied();
                match choice {
                    Some(mv) => {
                        warn!(%side, choice = %mv, "search found nothing, playing at random")
                    }
                    None => debug!(%side, "no legal move"),
                }
                Decision {
                    choice,
                    scores,
                    random_fallback: choice.is_some(),
                    stats,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panda_othello::test_utils::positions;

    fn loc(s: &str) -> Location {
        s.parse().unwrap()
    }

    fn seeded() -> Agent {
        Agent::new(AgentConfig::default().with_seed(17))
    }

    #[test]
    fn face_is_constant() {
        assert_eq!(seeded().face(), "🐼");
        assert_eq!(seeded().face(), seeded().face());
    }

    #[test]
    fn opening_ties_go_to_first_move() {
        // All four opening moves are symmetric, so the first in row-major order wins.
        let decision = seeded().decide(&Board::default(), Side::Black);
        assert_eq!(decision.choice, Some(loc("D3")));
        assert_eq!(decision.scores.len(), 4);
        assert!(decision.scores.iter().all(|&(_, v)| v == decision.scores[0].1));
        assert!(!decision.random_fallback);
        assert!(decision.stats.nodes > 0);
    }

    #[test]
    fn opening_for_white() {
        let board = Board::default().make_move(Side::Black, loc("D3"));
        let moves = board.legal_moves(Side::White);
        let choice = seeded().choose_move(&board, Side::White).unwrap();
        assert!(moves.contains(choice));
    }

    #[test]
    fn only_move_is_chosen() {
        let position = positions::load(positions::ONE_MOVE).unwrap();
        let decision = seeded().decide(&position.board, position.side);
        assert_eq!(decision.choice, Some(loc("A1")));
        assert_eq!(decision.scores.len(), 1);
        assert_eq!(decision.value(), Some(decision.scores[0].1));
    }

    #[test]
    fn full_board_yields_none() {
        let position = positions::load(positions::FULL).unwrap();
        let mut agent = seeded();
        assert_eq!(agent.choose_move(&position.board, Side::Black), None);
        assert_eq!(agent.choose_move(&position.board, Side::White), None);
        let decision = agent.decide(&position.board, Side::White);
        assert!(!decision.random_fallback);
        assert!(decision.scores.is_empty());
        assert_eq!(decision.value(), None);
    }

    #[test]
    fn passing_side_yields_none() {
        let position = positions::load(positions::WHITE_MUST_PASS).unwrap();
        assert_eq!(seeded().choose_move(&position.board, Side::White), None);
        assert_eq!(
            seeded().choose_move(&position.board, Side::Black),
            Some(Location::new(6, 7))
        );
    }

    #[test]
    fn board_is_not_mutated() {
        let board = Board::default().make_move(Side::Black, loc("F5"));
        let snapshot = board.clone();
        seeded().choose_move(&board, Side::White);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn deterministic_regardless_of_seed() {
        let board = Board::default()
            .make_move(Side::Black, loc("D3"))
            .make_move(Side::White, loc("C5"));
        let first = Agent::new(AgentConfig::default().with_seed(1)).decide(&board, Side::Black);
        let second = Agent::new(AgentConfig::default().with_seed(2)).decide(&board, Side::Black);
        assert_eq!(first, second);
    }

    #[test]
    fn prefers_strictly_better_value() {
        let board = Board::default()
            .make_move(Side::Black, loc("D3"))
            .make_move(Side::White, loc("C5"));
        let decision = seeded().decide(&board, Side::Black);
        let best = decision.scores.iter().map(|&(_, v)| v).max().unwrap();
        let first_best = decision.scores.iter().find(|&&(_, v)| v == best).unwrap().0;
        assert_eq!(decision.choice, Some(first_best));
    }

    #[test]
    fn depth_is_configurable() {
        let board = Board::default();
        let mut shallow = Agent::new(AgentConfig::default().with_depth(1).with_seed(0));
        let mut deep = Agent::new(AgentConfig::default().with_depth(4).with_seed(0));
        let shallow_nodes = shallow.decide(&board, Side::Black).stats.nodes;
        let deep_nodes = deep.decide(&board, Side::Black).stats.nodes;
        assert!(shallow_nodes < deep_nodes);
    }
}
