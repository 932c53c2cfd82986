//! Open a fight from range.

use farm_core::{BattleAbility, lists};
use state_machine::State;

use super::use_ability;
use crate::GameContext;
use crate::api::Command;

/// Opens a fight from range with a pull ability.
#[derive(Debug, Default)]
pub struct PullState;

impl PullState {
    pub const NAME: &'static str = "pull";

    fn pull_in_range(ctx: &GameContext) -> Option<&BattleAbility> {
        let target = ctx.target()?;
        ctx.usable_actions(lists::PULL)
            .find(|ability| target.distance <= ability.distance)
    }
}

impl State<GameContext> for PullState {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, ctx: &GameContext) -> bool {
        if !ctx.target_is_valid() || ctx.player().is_fighting() {
            return false;
        }
        if ctx.target().is_some_and(|target| target.is_fighting()) {
            return false;
        }
        Self::pull_in_range(ctx).is_some()
    }

    fn run(&mut self, ctx: &mut GameContext) {
        let Some(target_id) = ctx.target().map(|target| target.id) else {
            return;
        };
        let Some(pull) = Self::pull_in_range(ctx).cloned() else {
            return;
        };

        if ctx.targeted_id() != Some(target_id) {
            ctx.send(Command::SetTarget(target_id));
        }
        use_ability(ctx, &pull);
    }
}
