//! Pick the next unit to fight.

use std::cmp::Ordering;

use farm_core::Unit;
use state_machine::State;

use crate::GameContext;

/// Picks a new target when the current one is gone or no longer eligible.
///
/// Aggroed units come first, then the closest.
#[derive(Debug, Default)]
pub struct SelectTargetState;

impl SelectTargetState {
    pub const NAME: &'static str = "select_target";

    fn best_candidate(ctx: &GameContext) -> Option<&Unit> {
        ctx.attackable_units().min_by(|a, b| {
            b.has_aggroed()
                .cmp(&a.has_aggroed())
                .then_with(|| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal))
        })
    }
}

impl State<GameContext> for SelectTargetState {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, ctx: &GameContext) -> bool {
        !ctx.target_is_valid() && Self::best_candidate(ctx).is_some()
    }

    fn run(&mut self, ctx: &mut GameContext) {
        let Some(target) = Self::best_candidate(ctx).cloned() else {
            return;
        };
        tracing::info!(
            "new target {} ({:#x}) at {:.1}",
            target.name,
            target.id,
            target.distance
        );
        ctx.clear_path();
        ctx.set_target(Some(target));
    }
}
