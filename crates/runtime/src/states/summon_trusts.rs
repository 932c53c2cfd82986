//! Fill empty party slots with trusts.

use farm_core::lists;
use state_machine::State;

use super::use_ability;
use crate::GameContext;

/// Summons trusts that are not yet in the party, out of combat only.
#[derive(Debug, Default)]
pub struct SummonTrustsState;

impl SummonTrustsState {
    pub const NAME: &'static str = "summon_trusts";

    fn missing_trust(ctx: &GameContext) -> Option<&farm_core::BattleAbility> {
        let party = ctx.party();
        ctx.usable_actions(lists::TRUSTS)
            .find(|trust| !party.contains_name(&trust.name))
    }
}

impl State<GameContext> for SummonTrustsState {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, ctx: &GameContext) -> bool {
        let player = ctx.player();
        if player.is_dead() || player.is_fighting() {
            return false;
        }
        if ctx.party().len() >= ctx.policy().max_party_size {
            return false;
        }
        Self::missing_trust(ctx).is_some()
    }

    fn run(&mut self, ctx: &mut GameContext) {
        if let Some(trust) = Self::missing_trust(ctx).cloned() {
            use_ability(ctx, &trust);
        }
    }
}
