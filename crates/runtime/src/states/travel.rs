//! Walk the route while there is nothing to fight.

use state_machine::State;

use super::SelectTargetState;
use super::movement::{Leg, advance_along};
use crate::GameContext;

/// A waypoint counts as reached within this distance.
pub const WAYPOINT_TOLERANCE: f64 = 1.0;

/// Walks the route while there is nothing to fight.
///
/// The cursor wraps to the first waypoint after the last one, and survives
/// route edits by wrapping whenever it falls out of bounds.
#[derive(Debug, Default)]
pub struct TravelState {
    waypoint: usize,
}

impl TravelState {
    pub const NAME: &'static str = "travel";

    /// Index of the waypoint currently being walked to.
    pub fn waypoint_index(&self) -> usize {
        self.waypoint
    }
}

impl State<GameContext> for TravelState {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, ctx: &GameContext) -> bool {
        if ctx.policy().route.is_empty() || ctx.player().is_fighting() {
            return false;
        }
        if ctx.target_is_valid() || SelectTargetState.check(ctx) {
            return false;
        }
        !ctx.any_aggroed()
    }

    fn run(&mut self, ctx: &mut GameContext) {
        let waypoints = &ctx.policy().route.waypoints;
        if waypoints.is_empty() {
            return;
        }
        if self.waypoint >= waypoints.len() {
            self.waypoint = 0;
        }
        let len = waypoints.len();
        let destination = waypoints[self.waypoint];

        match advance_along(ctx, destination, WAYPOINT_TOLERANCE) {
            Leg::Moving => {}
            Leg::Arrived => {
                self.waypoint = (self.waypoint + 1) % len;
                tracing::debug!("waypoint reached, next is #{}", self.waypoint);
            }
            Leg::NoPath => {
                tracing::warn!("no path to waypoint #{}, skipping it", self.waypoint);
                self.waypoint = (self.waypoint + 1) % len;
            }
        }
    }
}
