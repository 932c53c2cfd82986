//! Decision data model and target eligibility shared across the bot.
//!
//! `farm-core` defines what the decision core reads (units, the player, the
//! party, the policy) and the one pure rule chain every behavior leans on:
//! [`filter::UnitFilters`]. Nothing here talks to the game; collaborators live
//! in the runtime crate.
pub mod ability;
pub mod config;
pub mod error;
pub mod filter;
pub mod player;
pub mod policy;
pub mod position;
pub mod unit;

pub use ability::{AbilityTarget, AbilityType, ActionFilters, BattleAbility, lists};
pub use config::{ConfigStore, StaticConfigStore};
pub use error::{ConfigError, FailureClass, FarmError};
pub use filter::{NotoriousMonsterAlert, UnitFilter, UnitFilters};
pub use player::{Party, PartyMember, Player};
pub use policy::{
    NamePatterns, NmHunting, Policy, RestPolicy, RetreatPolicy, Route, parse_placeholder_id,
};
pub use position::Position;
pub use unit::{NpcType, Status, Unit, UnitFlags};
