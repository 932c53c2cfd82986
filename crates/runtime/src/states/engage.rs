//! Use battle abilities on the target in melee range.

use farm_core::lists;
use state_machine::State;

use super::use_ability;
use crate::GameContext;

/// Uses battle abilities on the target once engaged in melee.
#[derive(Debug, Default)]
pub struct EngageState;

impl EngageState {
    pub const NAME: &'static str = "engage";
}

impl State<GameContext> for EngageState {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, ctx: &GameContext) -> bool {
        if !ctx.target_is_valid() || !ctx.player().is_fighting() {
            return false;
        }
        let Some(target) = ctx.target() else {
            return false;
        };
        if ctx.targeted_id() != Some(target.id) {
            return false;
        }
        if target.distance > ctx.policy().melee_distance {
            return false;
        }
        ctx.usable_actions(lists::BATTLE).next().is_some()
    }

    fn run(&mut self, ctx: &mut GameContext) {
        let ability = ctx.usable_actions(lists::BATTLE).next().cloned();
        if let Some(ability) = ability {
            use_ability(ctx, &ability);
        }
    }
}
