//! Collaborator contracts consumed by the decision core.
//!
//! Everything the bot needs from the outside world comes through one of these
//! traits, so the core can run against the live game, a replay, or test fakes:
//!
//! - [`WorldSnapshotProvider`]: player, party, target, and surrounding units
//! - [`NavMesh`] and [`Navigator`]: path queries and movement output
//! - [`CommandSink`]: fire-and-forget game commands
//! - [`ChatLog`]: recent timestamped chat lines
//! - [`Clock`]: wall-clock time for behavior timers

pub mod chat;
pub mod clock;
pub mod command;
pub mod errors;
pub mod navigation;
pub mod world;

pub use chat::{ChatEntry, ChatLog, ChatScan, NoChatLog, scan_entries};
pub use clock::{Clock, ManualClock, SystemClock};
pub use command::{Command, CommandSink, Key, constants};
pub use errors::{ChatLogError, Result, RuntimeError, SnapshotError};
pub use navigation::{NavMesh, Navigator, StraightLineNavMesh};
pub use world::{WorldSnapshot, WorldSnapshotProvider};
