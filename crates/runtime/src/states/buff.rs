//! Keep buffs up outside of rest.

use farm_core::{BattleAbility, lists};
use state_machine::State;

use super::use_ability;
use crate::GameContext;

/// Keeps buffs up. Only abilities that name their status effect qualify,
/// otherwise there is no way to tell when to stop recasting.
#[derive(Debug, Default)]
pub struct BuffState;

impl BuffState {
    pub const NAME: &'static str = "buff";

    fn missing_buff(ctx: &GameContext) -> Option<&BattleAbility> {
        ctx.usable_actions(lists::BUFF)
            .find(|buff| buff.status_effect.is_some())
    }
}

impl State<GameContext> for BuffState {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, ctx: &GameContext) -> bool {
        let player = ctx.player();
        !player.is_dead() && !player.is_resting() && Self::missing_buff(ctx).is_some()
    }

    fn run(&mut self, ctx: &mut GameContext) {
        if let Some(buff) = Self::missing_buff(ctx).cloned() {
            use_ability(ctx, &buff);
        }
    }
}
