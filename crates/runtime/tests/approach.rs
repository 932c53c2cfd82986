mod common;

use std::sync::Arc;

use chrono::TimeDelta;
use farm_core::{AbilityType, BattleAbility, Policy, Position, Status, lists};
use runtime::api::constants;
use runtime::states::{ApproachState, MULTI_NODE_TOLERANCE, RestState, SummonTrustsState};
use runtime::{ChatEntry, ChatLogError, Clock, Command, GameContext, Key};
use state_machine::State;

use common::*;

fn manual_policy() -> Policy {
    Policy {
        approach_enabled: false,
        ..Policy::default()
    }
}

/// A context whose target is a fighting goblin at `distance`, already
/// targeted in game.
fn fighting_target(harness: &Harness, distance: f64, policy: Policy) -> GameContext {
    let target = goblin(distance).with_status(Status::Fighting);
    let mut world = snapshot(fighting_player(), vec![target.clone()]);
    world.targeted_id = Some(target.id);

    let mut ctx = harness.context(world, policy);
    ctx.set_target(Some(target));
    ctx
}

fn out_of_range_line(harness: &Harness) -> Result<ChatEntry, ChatLogError> {
    Ok(ChatEntry::new(
        harness.clock.now(),
        "The Goblin is out of range.",
    ))
}

// ============================================================================
// Check
// ============================================================================

#[test]
fn fighting_target_in_melee_is_approached_without_moving() {
    let harness = Harness::new();
    let mut ctx = fighting_target(&harness, 4.0, manual_policy());
    let mut approach = ApproachState::default();

    assert!(approach.check(&ctx));
    approach.run(&mut ctx);

    assert!(harness.navigator.faced());
    assert!(harness.navigator.follows().is_empty());
    assert!(harness.sink.commands().is_empty());
}

#[test]
fn no_target_means_no_approach() {
    let harness = Harness::new();
    let ctx = harness.context(snapshot(player(), vec![goblin(5.0)]), Policy::default());

    assert!(!ApproachState::default().check(&ctx));
}

#[test]
fn target_rejected_by_filter_is_not_approached() {
    let harness = Harness::new();
    let mut ctx = harness.context(snapshot(player(), vec![]), Policy::default());
    ctx.set_target(Some(goblin(30.0)));

    assert!(!ApproachState::default().check(&ctx));
}

#[test]
fn pull_available_keeps_distant_targets_for_pulling() {
    let harness = Harness::new();
    let policy = with_list(
        Policy::default(),
        lists::PULL,
        vec![BattleAbility::new("Dia", AbilityType::Magic)],
    );

    let far = goblin(12.0);
    let mut ctx = harness.context(snapshot(player(), vec![far.clone()]), policy.clone());
    ctx.set_target(Some(far));
    assert!(!ApproachState::default().check(&ctx));

    let near = goblin(6.0);
    let mut ctx = harness.context(snapshot(player(), vec![near.clone()]), policy);
    ctx.set_target(Some(near));
    assert!(ApproachState::default().check(&ctx));
}

#[test]
fn without_pull_abilities_any_valid_target_is_approached() {
    let harness = Harness::new();
    let far = goblin(15.0);
    let mut ctx = harness.context(snapshot(player(), vec![far.clone()]), Policy::default());
    ctx.set_target(Some(far));

    assert!(ApproachState::default().check(&ctx));
}

#[test]
fn yields_to_rest() {
    let harness = Harness::new();
    let mut tired = player();
    tired.hpp = 30;
    let target = goblin(5.0);
    let mut ctx = harness.context(snapshot(tired, vec![target.clone()]), Policy::default());
    ctx.set_target(Some(target));

    assert!(RestState.check(&ctx));
    assert!(!ApproachState::default().check(&ctx));
}

#[test]
fn yields_to_summoning_trusts() {
    let harness = Harness::new();
    let policy = with_list(
        Policy::default(),
        lists::TRUSTS,
        vec![BattleAbility::new("Shantotto", AbilityType::Trust).on_self()],
    );
    let target = goblin(5.0);
    let mut ctx = harness.context(snapshot(player(), vec![target.clone()]), policy);
    ctx.set_target(Some(target));

    assert!(SummonTrustsState.check(&ctx));
    assert!(!ApproachState::default().check(&ctx));
}

// ============================================================================
// Run: targeting and engaging
// ============================================================================

#[test]
fn disengages_when_fighting_a_different_unit() {
    let harness = Harness::new();
    let mut ctx = fighting_target(&harness, 4.0, Policy::default());
    let mut world = ctx.snapshot().clone();
    world.targeted_id = Some(999);
    let policy = Arc::new(ctx.policy().clone());
    ctx.refresh(world, policy);

    ApproachState::default().run(&mut ctx);

    assert_eq!(harness.sink.strings(), vec![constants::ATTACK_OFF.to_string()]);
    assert!(harness.navigator.calls().is_empty());
}

#[test]
fn targets_and_engages_when_idle() {
    let harness = Harness::new();
    let target = goblin(20.0);
    let mut ctx = harness.context(snapshot(player(), vec![target.clone()]), manual_policy());
    ctx.set_target(Some(target));

    ApproachState::default().run(&mut ctx);

    assert_eq!(
        harness.sink.commands(),
        vec![
            Command::SetTarget(100),
            Command::send(constants::ATTACK_TARGET),
        ]
    );
}

#[test]
fn does_not_engage_beyond_engage_range_or_when_disabled() {
    let harness = Harness::new();
    let policy = Policy {
        detection_distance: 40.0,
        approach_enabled: false,
        ..Policy::default()
    };
    let target = goblin(30.0);
    let mut world = snapshot(player(), vec![target.clone()]);
    world.targeted_id = Some(target.id);
    let mut ctx = harness.context(world.clone(), policy.clone());
    ctx.set_target(Some(target));

    ApproachState::default().run(&mut ctx);
    assert!(harness.sink.commands().is_empty());

    let near = goblin(10.0);
    world.units = vec![near.clone()];
    let mut ctx = harness.context(
        world,
        Policy {
            engage_enabled: false,
            ..policy
        },
    );
    ctx.set_target(Some(near));

    ApproachState::default().run(&mut ctx);
    assert!(harness.sink.commands().is_empty());
}

// ============================================================================
// Run: movement
// ============================================================================

#[test]
fn two_node_path_drops_reached_lead_node() {
    let harness = Harness::new();
    let target = goblin(10.0);
    let mut world = snapshot(fighting_player(), vec![target.clone()]);
    world.targeted_id = Some(target.id);

    let lead = Position::new(0.3, 0.0, 0.0);
    let next = Position::new(5.0, 0.0, 2.0);
    let mut ctx = harness.context_with_mesh(
        world,
        Policy::default(),
        FixedNavMesh(vec![lead, next]),
    );
    ctx.set_target(Some(target));

    ApproachState::default().run(&mut ctx);

    assert_eq!(
        harness.navigator.calls(),
        vec![
            NavCall::Tolerance(MULTI_NODE_TOLERANCE),
            NavCall::Follow(5.0, 0.0, 2.0),
        ]
    );
    assert_eq!(ctx.path().front(), Some(&next));
}

#[test]
fn two_node_path_follows_lead_node_until_reached() {
    let harness = Harness::new();
    let target = goblin(10.0);
    let mut world = snapshot(fighting_player(), vec![target.clone()]);
    world.targeted_id = Some(target.id);

    let mesh = FixedNavMesh(vec![Position::new(2.0, 0.0, 0.0), Position::new(5.0, 0.0, 0.0)]);
    let mut ctx = harness.context_with_mesh(world, Policy::default(), mesh);
    ctx.set_target(Some(target));

    ApproachState::default().run(&mut ctx);

    assert_eq!(harness.navigator.follows(), vec![(2.0, 0.0, 0.0)]);
    assert_eq!(ctx.path().len(), 2);
}

#[test]
fn final_leg_uses_melee_distance_and_faces_on_arrival() {
    let harness = Harness::new();
    let target = goblin(2.5);
    let mut world = snapshot(fighting_player(), vec![target.clone()]);
    world.targeted_id = Some(target.id);
    let mut ctx = harness.context(world, Policy::default());
    ctx.set_target(Some(target.clone()));

    ApproachState::default().run(&mut ctx);

    assert_eq!(
        harness.navigator.calls(),
        vec![
            NavCall::Tolerance(Policy::default().melee_distance),
            NavCall::Face(target.position),
            NavCall::Reset,
        ]
    );
}

#[test]
fn empty_path_issues_no_movement() {
    let harness = Harness::new();
    let target = goblin(10.0);
    let mut world = snapshot(fighting_player(), vec![target.clone()]);
    world.targeted_id = Some(target.id);
    let mut ctx = harness.context_with_mesh(world, Policy::default(), FixedNavMesh(vec![]));
    ctx.set_target(Some(target));

    ApproachState::default().run(&mut ctx);

    assert!(harness.navigator.calls().is_empty());
}

// ============================================================================
// Run: out-of-range correction
// ============================================================================

#[test]
fn out_of_range_report_taps_back_once() {
    let harness = Harness::new();
    harness.chat.set(vec![out_of_range_line(&harness)]);
    let mut ctx = fighting_target(&harness, 4.0, manual_policy());
    let mut approach = ApproachState::default();

    approach.run(&mut ctx);
    assert!(approach.is_nudging());
    assert_eq!(harness.sink.commands(), vec![Command::KeyPress(Key::Down)]);

    // Same report still in the log, but the lockout holds.
    harness.clock.advance(TimeDelta::milliseconds(100));
    approach.run(&mut ctx);
    assert!(approach.is_nudging());
    assert_eq!(harness.sink.commands().len(), 1);

    harness.chat.set(vec![]);
    harness.clock.advance(TimeDelta::milliseconds(150));
    approach.run(&mut ctx);
    assert!(!approach.is_nudging());
    assert_eq!(harness.sink.commands(), vec![Command::KeyPress(Key::Down)]);
}

#[test]
fn stale_out_of_range_report_is_ignored() {
    let harness = Harness::new();
    harness.chat.set(vec![Ok(ChatEntry::new(
        start_time() - TimeDelta::seconds(30),
        "The Goblin is out of range.",
    ))]);
    let mut ctx = fighting_target(&harness, 4.0, manual_policy());
    let mut approach = ApproachState::default();

    approach.run(&mut ctx);

    assert!(!approach.is_nudging());
    assert!(harness.sink.commands().is_empty());
}

#[test]
fn out_of_range_report_for_distant_target_is_ignored() {
    let harness = Harness::new();
    harness.chat.set(vec![out_of_range_line(&harness)]);
    let mut ctx = fighting_target(&harness, 6.0, manual_policy());
    let mut approach = ApproachState::default();

    approach.run(&mut ctx);

    assert!(!approach.is_nudging());
    assert!(harness.sink.commands().is_empty());
}

#[test]
fn chat_log_changing_mid_scan_skips_the_correction() {
    let harness = Harness::new();
    harness
        .chat
        .set(vec![Err(ChatLogError::Modified), out_of_range_line(&harness)]);
    let mut ctx = fighting_target(&harness, 4.0, manual_policy());
    let mut approach = ApproachState::default();

    approach.run(&mut ctx);

    assert!(harness.navigator.faced());
    assert!(!approach.is_nudging());
    assert!(harness.sink.commands().is_empty());

    // Next tick the log reads cleanly again.
    harness.chat.set(vec![out_of_range_line(&harness)]);
    approach.run(&mut ctx);
    assert!(approach.is_nudging());
}
