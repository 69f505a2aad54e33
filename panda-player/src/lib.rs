//! `panda-player` picks moves for Othello-style games with a fixed-depth
//! minimax search and alpha-beta pruning over a material evaluation.

pub mod agent;
pub mod config;
pub mod connectors;
pub mod eval;
pub mod search;

pub use agent::{Agent, Decision};
pub use config::AgentConfig;
pub use eval::{evaluate, Evaluator, Material};
pub use search::{minimax, SearchStats, Searcher};
