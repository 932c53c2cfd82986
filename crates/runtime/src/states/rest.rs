//! Sit down and recover HP/MP when it is safe to do so.

use farm_core::{Player, RestPolicy};
use state_machine::State;

use crate::GameContext;
use crate::api::constants;

/// Rests while low, stands up once every enabled resource is topped off.
#[derive(Debug, Default)]
pub struct RestState;

impl RestState {
    pub const NAME: &'static str = "rest";

    fn needs_rest(player: &Player, rest: &RestPolicy) -> bool {
        (rest.health_enabled && player.hpp < rest.low_health)
            || (rest.magic_enabled && player.mpp < rest.low_magic)
    }

    fn is_rested(player: &Player, rest: &RestPolicy) -> bool {
        (!rest.health_enabled || player.hpp >= rest.high_health)
            && (!rest.magic_enabled || player.mpp >= rest.high_magic)
    }
}

impl State<GameContext> for RestState {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, ctx: &GameContext) -> bool {
        let player = ctx.player();
        if player.is_dead() || player.is_fighting() {
            return false;
        }

        // Never sit down with something already hitting us.
        if ctx.any_aggroed() {
            return false;
        }

        player.is_resting() || Self::needs_rest(player, &ctx.policy().rest)
    }

    fn run(&mut self, ctx: &mut GameContext) {
        let player = ctx.player();
        let rest = &ctx.policy().rest;

        if !player.is_resting() {
            tracing::info!("resting (hp {}%, mp {}%)", player.hpp, player.mpp);
            ctx.send_string(constants::REST_ON);
        } else if Self::is_rested(player, rest) {
            tracing::info!("done resting");
            ctx.send_string(constants::REST_OFF);
        }
    }
}
