//! Connectors let the agent play through different interfaces.

mod connector;
mod text;

pub use connector::{serve, Connector, Reply};
pub use text::TextConnector;
