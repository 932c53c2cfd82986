//! Back out of a fight on low health.

use state_machine::State;

use super::movement::advance_along;
use super::travel::WAYPOINT_TOLERANCE;
use crate::GameContext;
use crate::api::{Command, Key, constants};

/// Breaks off combat at low HP and runs back to the route.
#[derive(Debug, Default)]
pub struct RetreatState;

impl RetreatState {
    pub const NAME: &'static str = "retreat";
}

impl State<GameContext> for RetreatState {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, ctx: &GameContext) -> bool {
        let retreat = &ctx.policy().retreat;
        let player = ctx.player();
        if !retreat.enabled || player.is_dead() {
            return false;
        }
        if player.hpp >= retreat.health_threshold {
            return false;
        }

        // Low HP alone is a job for Rest.
        player.is_fighting() || ctx.any_aggroed()
    }

    fn run(&mut self, ctx: &mut GameContext) {
        tracing::info!("retreating at {}% hp", ctx.player().hpp);

        if ctx.player().is_fighting() {
            ctx.send_string(constants::ATTACK_OFF);
        }

        let position = ctx.player().position;
        match ctx.policy().route.nearest(&position) {
            Some(waypoint) => {
                advance_along(ctx, waypoint, WAYPOINT_TOLERANCE);
            }
            None => ctx.send(Command::KeyPress(Key::Down)),
        }
    }
}
