//! Priority-ordered state machine for tick-driven agents.
//!
//! A [`StateMachine`] holds an ordered list of [`State`]s. Every tick it asks
//! each state, highest priority first, whether it wants to act and runs the
//! first one that does.
//!
//! - **First match wins**: at most one state runs per tick
//! - **No cached guards**: `check` is re-evaluated every tick right before `run`
//! - **Fixed order**: priority is the insertion order, never re-sorted
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`State`]: Guard (`check`) + effect (`run`) pair
//! - [`StateMachine`]: Ordered roster evaluated once per tick
//! - [`Outcome`]: Which state ran, if any
//! - [`builder`]: Ergonomic roster construction

pub mod builder;
pub mod machine;
pub mod outcome;
pub mod state;

// Re-export core types for ergonomic API
pub use builder::StateMachineBuilder;
pub use machine::StateMachine;
pub use outcome::Outcome;
pub use state::State;
