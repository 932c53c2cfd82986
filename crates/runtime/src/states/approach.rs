//! Close in on the current target.

use chrono::{DateTime, TimeDelta, Utc};
use farm_core::lists;
use state_machine::State;

use super::movement::{Leg, advance_along};
use super::{RestState, SummonTrustsState};
use crate::GameContext;
use crate::api::{ChatScan, Command, Key, constants, scan_entries};

/// Targets within this distance are approached even when a pull is ready.
pub const CLOSE_RANGE: f64 = 8.0;

/// Auto-engage only fires for targets closer than this.
pub const ENGAGE_RANGE: f64 = 25.0;

/// Out-of-range reports are only acted on within this distance.
pub const NUDGE_RANGE: f64 = 5.0;

/// After a nudge, the chat log is not re-scanned for this long.
pub const NUDGE_DURATION: TimeDelta = TimeDelta::milliseconds(250);

const OUT_OF_RANGE: &str = "is out of range";

/// Moves to the target, engaging it on the way when enabled.
///
/// With approach disabled the player only faces the target. If the server
/// then reports the target out of range while it is close by, the player
/// taps the back key once to re-sync its position.
#[derive(Debug, Default)]
pub struct ApproachState {
    /// Time of the last nudge, while its lockout window is open.
    nudge_started: Option<DateTime<Utc>>,
}

impl ApproachState {
    pub const NAME: &'static str = "approach";

    pub fn is_nudging(&self) -> bool {
        self.nudge_started.is_some()
    }

    fn move_to_target(ctx: &mut GameContext) {
        let Some(target) = ctx.target().map(|target| target.position) else {
            return;
        };
        let melee = ctx.policy().melee_distance;

        if advance_along(ctx, target, melee) == Leg::Arrived {
            let navigator = ctx.navigator_mut();
            navigator.face_heading(target);
            navigator.reset();
        }
    }

    fn face_and_correct_range(&mut self, ctx: &mut GameContext) {
        let Some((position, distance)) = ctx.target().map(|t| (t.position, t.distance)) else {
            return;
        };
        ctx.navigator_mut().face_heading(position);

        let now = ctx.now();
        if let Some(started) = self.nudge_started
            && now - started >= NUDGE_DURATION
        {
            self.nudge_started = None;
        }
        if self.nudge_started.is_some() {
            return;
        }

        let second = now.timestamp();
        let scan = scan_entries(ctx.chat().entries(), &mut |entry| {
            entry.text.contains(OUT_OF_RANGE) && entry.timestamp.timestamp() == second
        });

        match scan {
            ChatScan::Matched(count) if count > 0 && distance <= NUDGE_RANGE => {
                tracing::info!("server reports target out of range, backing up");
                ctx.send(Command::KeyPress(Key::Down));
                self.nudge_started = Some(now);
            }
            ChatScan::Matched(_) => {}
            ChatScan::Unavailable => {
                tracing::warn!("chat log changed during scan, skipping range check");
            }
        }
    }
}

impl State<GameContext> for ApproachState {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, ctx: &GameContext) -> bool {
        if RestState.check(ctx) || SummonTrustsState.check(ctx) {
            return false;
        }
        if !ctx.target_is_valid() {
            return false;
        }
        let Some(target) = ctx.target() else {
            return false;
        };

        // Aggroed or already pulled.
        if target.is_fighting() {
            return true;
        }

        // Nothing to pull with, so walk up and fight.
        if ctx.usable_actions(lists::PULL).next().is_none() {
            return true;
        }

        target.distance < CLOSE_RANGE
    }

    fn run(&mut self, ctx: &mut GameContext) {
        let Some((target_id, distance)) = ctx.target().map(|t| (t.id, t.distance)) else {
            return;
        };

        if ctx.targeted_id() != Some(target_id) {
            if ctx.player().is_fighting() {
                // Fighting something else; drop it first and retarget next tick.
                tracing::info!("disengaging to target {:#x}", target_id);
                ctx.send_string(constants::ATTACK_OFF);
                return;
            }
            ctx.send(Command::SetTarget(target_id));
        }

        if ctx.policy().engage_enabled && !ctx.player().is_fighting() && distance < ENGAGE_RANGE {
            ctx.send_string(constants::ATTACK_TARGET);
        }

        if ctx.policy().approach_enabled {
            Self::move_to_target(ctx);
        } else {
            self.face_and_correct_range(ctx);
        }
    }
}
