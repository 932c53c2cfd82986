//! Headless replay client for the farming bot.
//!
//! The client replays a recorded scenario against the decision runtime with
//! logging stand-ins for the game-facing collaborators. It is used to tune a
//! policy offline: every command the bot would have sent shows up in the log.
//!
//! ```text
//! ClientConfig (env) ──→ Replay
//!                          ├─→ FileConfigStore (policy.toml)
//!                          ├─→ ReplayWorld / ReplayChat (scenario.ron)
//!                          └─→ TickDriver (runtime)
//! ```
pub mod config;
pub mod logging;
pub mod replay;
pub mod scenario;

pub use config::ClientConfig;
pub use replay::{Replay, ReplaySummary};
pub use scenario::{
    Frame, LoggingAlert, LoggingCommandSink, LoggingNavigator, ReplayChat, ReplayWorld, Scenario,
};
