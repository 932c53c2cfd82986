//! Cast healing abilities when health drops into their window.

use farm_core::lists;
use state_machine::State;

use super::use_ability;
use crate::GameContext;

/// Uses the first healing ability whose player HP window matches.
#[derive(Debug, Default)]
pub struct HealState;

impl HealState {
    pub const NAME: &'static str = "heal";
}

impl State<GameContext> for HealState {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, ctx: &GameContext) -> bool {
        !ctx.player().is_dead() && ctx.usable_actions(lists::HEALING).next().is_some()
    }

    fn run(&mut self, ctx: &mut GameContext) {
        let heal = ctx.usable_actions(lists::HEALING).next().cloned();
        if let Some(heal) = heal {
            use_ability(ctx, &heal);
        }
    }
}
