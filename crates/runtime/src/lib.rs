//! Decision runtime for the farming bot.
//!
//! This crate wires the collaborator contracts, the per-tick
//! [`GameContext`], the behavior roster and the [`TickDriver`] into one
//! embeddable API. Hosts supply the game-facing collaborators (world
//! snapshots, navigation, commands, chat) and drive ticks; everything in
//! between is deterministic given those inputs.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the collaborator traits and error types
//! - [`context`] hosts the per-tick blackboard
//! - [`states`] implements the prioritized behavior roster
//! - [`factory`] constructs substitutable services
//! - [`runtime`] hosts the tick driver and its builder
pub mod api;
pub mod context;
pub mod factory;
pub mod runtime;
pub mod states;

pub use api::{
    ChatEntry, ChatLog, ChatLogError, ChatScan, Clock, Command, CommandSink, Key, ManualClock,
    NavMesh, Navigator, NoChatLog, Result, RuntimeError, SnapshotError, StraightLineNavMesh,
    SystemClock, WorldSnapshot, WorldSnapshotProvider, constants,
};
pub use context::{GameContext, GameContextBuilder};
pub use factory::{ConfigFactory, DefaultConfigFactory, ServiceFactory};
pub use runtime::{RuntimeConfig, TickDriver, TickDriverBuilder, TickReport};
pub use states::{PRIORITY_ORDER, default_roster};
