//! The behavior roster.
//!
//! Each behavior is a [`state_machine::State`] over [`GameContext`]. The
//! roster order is fixed and load-bearing: guards of lower priority states
//! assume the higher ones did not fire, and a few guards call other guards
//! directly ("approach unless resting would start").
//!
//! | priority | state | fires when |
//! |---|---|---|
//! | 1 | [`RetreatState`] | HP below the retreat threshold while in danger |
//! | 2 | [`RestState`] | safe and low on HP/MP, or already resting |
//! | 3 | [`SummonTrustsState`] | out of combat with a trust missing from the party |
//! | 4 | [`HealState`] | a healing ability's HP window matches |
//! | 5 | [`BuffState`] | a buff's status effect is missing |
//! | 6 | [`SelectTargetState`] | no valid target but an attackable unit exists |
//! | 7 | [`PullState`] | an idle target is in range of a pull ability |
//! | 8 | [`EngageState`] | in melee with a battle ability ready |
//! | 9 | [`ApproachState`] | a valid target needs closing in on or facing |
//! | 10 | [`TravelState`] | nothing to fight, follow the route |

mod approach;
mod buff;
mod engage;
mod heal;
mod movement;
mod pull;
mod rest;
mod retreat;
mod select_target;
mod summon_trusts;
mod travel;

pub use approach::ApproachState;
pub use buff::BuffState;
pub use engage::EngageState;
pub use heal::HealState;
pub use movement::{Leg, MULTI_NODE_TOLERANCE, advance_along};
pub use pull::PullState;
pub use rest::RestState;
pub use retreat::RetreatState;
pub use select_target::SelectTargetState;
pub use summon_trusts::SummonTrustsState;
pub use travel::TravelState;

use state_machine::{StateMachine, StateMachineBuilder};

use crate::GameContext;

/// State names in priority order, highest first.
pub const PRIORITY_ORDER: [&str; 10] = [
    RetreatState::NAME,
    RestState::NAME,
    SummonTrustsState::NAME,
    HealState::NAME,
    BuffState::NAME,
    SelectTargetState::NAME,
    PullState::NAME,
    EngageState::NAME,
    ApproachState::NAME,
    TravelState::NAME,
];

/// Builds the full roster in [`PRIORITY_ORDER`].
pub fn default_roster() -> StateMachine<GameContext> {
    StateMachineBuilder::new()
        .state(RetreatState::default())
        .state(RestState::default())
        .state(SummonTrustsState::default())
        .state(HealState::default())
        .state(BuffState::default())
        .state(SelectTargetState::default())
        .state(PullState::default())
        .state(EngageState::default())
        .state(ApproachState::default())
        .state(TravelState::default())
        .build()
}

/// Casts `ability` by sending its command.
fn use_ability(ctx: &mut GameContext, ability: &farm_core::BattleAbility) {
    tracing::info!("using {} ({})", ability.name, ability.ability_type);
    ctx.send_string(ability.command());
}
