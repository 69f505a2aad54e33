use crate::agent::Agent;
use panda_othello::{Location, ParsePositionError, Position};
use rand::Rng;
use std::fmt;
use std::io;
use tracing::{debug, info};

/// An answer to one position request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Move(Location),
    Pass,
    Error(String),
}

impl From<Option<Location>> for Reply {
    fn from(choice: Option<Location>) -> Self {
        match choice {
            Some(loc) => Reply::Move(loc),
            None => Reply::Pass,
        }
    }
}

/// Wire form: `"<col> <row>"` (0-based), `"pass"` or `"error: <message>"`.
impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Move(loc) => write!(f, "{} {}", loc.col, loc.row),
            Reply::Pass => f.write_str("pass"),
            Reply::Error(message) => write!(f, "error: {}", message),
        }
    }
}

/// A player-facing interface to whatever is driving the game.
pub trait Connector {
    /// Alert the driver that we're ready for positions.
    fn set_ready(&mut self) -> io::Result<()>;

    /// Get the next position to move in. Returns None once the driver is done.
    fn next_position(&mut self) -> io::Result<Option<Result<Position, ParsePositionError>>>;

    /// Send the answer for the last position.
    fn send_reply(&mut self, reply: &Reply) -> io::Result<()>;
}

/// Answer positions from `connector` with `agent` until input runs out.
/// Returns the number of positions answered.
pub fn serve<C: Connector, R: Rng>(connector: &mut C, agent: &mut Agent<R>) -> io::Result<usize> {
    connector.set_ready()?;
    info!(face = agent.face(), depth = agent.config().depth, "ready");

    let mut answered = 0;
    while let Some(request) = connector.next_position()? {
        let reply = match request {
            Ok(position) => Reply::from(agent.choose_move(&position.board, position.side)),
            Err(err) => {
                debug!(%err, "rejected position");
                Reply::Error(err.to_string())
            }
        };
        connector.send_reply(&reply)?;
        answered += 1;
    }

    Ok(answered)
}
