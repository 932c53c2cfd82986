//! Recording fakes for the runtime's collaborators.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use farm_core::{
    BattleAbility, Party, PartyMember, Player, Policy, Position, Status, Unit, UnitFlags,
};
use runtime::{
    ChatEntry, ChatLog, ChatLogError, Command, CommandSink, GameContext, ManualClock, NavMesh,
    Navigator, SnapshotError, WorldSnapshot, WorldSnapshotProvider,
};

pub const PLAYER_SERVER_ID: u32 = 0x0100_0001;

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

// ============================================================================
// Commands
// ============================================================================

#[derive(Clone, Default)]
pub struct RecordingSink {
    pub sent: Arc<Mutex<Vec<Command>>>,
}

impl RecordingSink {
    pub fn commands(&self) -> Vec<Command> {
        self.sent.lock().unwrap().clone()
    }

    pub fn strings(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .filter_map(|command| match command {
                Command::Send(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

impl CommandSink for RecordingSink {
    fn send(&mut self, command: Command) {
        self.sent.lock().unwrap().push(command);
    }
}

// ============================================================================
// Navigation
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum NavCall {
    Tolerance(f64),
    Face(Position),
    Follow(f64, f64, f64),
    Reset,
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    pub calls: Arc<Mutex<Vec<NavCall>>>,
    tolerance: Arc<Mutex<f64>>,
}

impl RecordingNavigator {
    pub fn calls(&self) -> Vec<NavCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn follows(&self) -> Vec<(f64, f64, f64)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                NavCall::Follow(dx, dy, dz) => Some((dx, dy, dz)),
                _ => None,
            })
            .collect()
    }

    pub fn faced(&self) -> bool {
        self.calls()
            .iter()
            .any(|call| matches!(call, NavCall::Face(_)))
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Navigator for RecordingNavigator {
    fn distance_tolerance(&self) -> f64 {
        *self.tolerance.lock().unwrap()
    }

    fn set_distance_tolerance(&mut self, tolerance: f64) {
        *self.tolerance.lock().unwrap() = tolerance;
        self.calls.lock().unwrap().push(NavCall::Tolerance(tolerance));
    }

    fn face_heading(&mut self, position: Position) {
        self.calls.lock().unwrap().push(NavCall::Face(position));
    }

    fn set_follow_coords(&mut self, dx: f64, dy: f64, dz: f64) {
        self.calls.lock().unwrap().push(NavCall::Follow(dx, dy, dz));
    }

    fn reset(&mut self) {
        self.calls.lock().unwrap().push(NavCall::Reset);
    }
}

/// Always answers with the same path.
pub struct FixedNavMesh(pub Vec<Position>);

impl NavMesh for FixedNavMesh {
    fn find_path_between(&self, _from: Position, _to: Position) -> VecDeque<Position> {
        self.0.iter().copied().collect()
    }
}

// ============================================================================
// Chat
// ============================================================================

/// Chat log whose lines can be swapped between ticks.
#[derive(Clone, Default)]
pub struct ScriptedChat {
    pub lines: Arc<Mutex<Vec<Result<ChatEntry, ChatLogError>>>>,
}

impl ScriptedChat {
    pub fn set(&self, lines: Vec<Result<ChatEntry, ChatLogError>>) {
        *self.lines.lock().unwrap() = lines;
    }
}

impl ChatLog for ScriptedChat {
    fn entries(&self) -> Box<dyn Iterator<Item = Result<ChatEntry, ChatLogError>> + '_> {
        let lines = self.lines.lock().unwrap().clone();
        Box::new(lines.into_iter())
    }
}

// ============================================================================
// World
// ============================================================================

/// Replays snapshots in order; errors once they run out.
pub struct ScriptedWorld {
    frames: VecDeque<Result<WorldSnapshot, SnapshotError>>,
}

impl ScriptedWorld {
    pub fn new(frames: Vec<Result<WorldSnapshot, SnapshotError>>) -> Self {
        Self {
            frames: frames.into(),
        }
    }
}

impl WorldSnapshotProvider for ScriptedWorld {
    fn snapshot(&mut self) -> Result<WorldSnapshot, SnapshotError> {
        self.frames.pop_front().unwrap_or(Err(SnapshotError::Exhausted))
    }
}

/// Serves the same snapshot forever.
pub struct StaticWorld(pub WorldSnapshot);

impl WorldSnapshotProvider for StaticWorld {
    fn snapshot(&mut self) -> Result<WorldSnapshot, SnapshotError> {
        Ok(self.0.clone())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn player() -> Player {
    Player {
        id: 1,
        server_id: PLAYER_SERVER_ID,
        name: "Hero".to_string(),
        hpp: 100,
        mpp: 100,
        mp: 200,
        tp: 0,
        ..Player::default()
    }
}

pub fn fighting_player() -> Player {
    Player {
        status: Status::Fighting,
        ..player()
    }
}

pub fn party() -> Party {
    Party::new(vec![PartyMember {
        name: "Hero".to_string(),
        server_id: PLAYER_SERVER_ID,
    }])
}

pub fn goblin(distance: f64) -> Unit {
    Unit::mob(100, "Goblin")
        .with_distance(distance)
        .with_position(Position::new(distance, 0.0, 0.0))
}

pub fn aggroed(unit: Unit) -> Unit {
    unit.with_flags(UnitFlags::AGGROED)
}

pub fn snapshot(player: Player, units: Vec<Unit>) -> WorldSnapshot {
    WorldSnapshot {
        player,
        party: party(),
        targeted_id: None,
        units,
    }
}

pub fn with_list(mut policy: Policy, list: &str, abilities: Vec<BattleAbility>) -> Policy {
    policy.battle_lists.insert(list.to_string(), abilities);
    policy
}

/// Test harness holding handles to every recording fake.
pub struct Harness {
    pub sink: RecordingSink,
    pub navigator: RecordingNavigator,
    pub chat: ScriptedChat,
    pub clock: ManualClock,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            sink: RecordingSink::default(),
            navigator: RecordingNavigator::default(),
            chat: ScriptedChat::default(),
            clock: ManualClock::new(start_time()),
        }
    }

    /// A context seeded with `snapshot` and `policy`, using a straight-line
    /// navmesh.
    pub fn context(&self, snapshot: WorldSnapshot, policy: Policy) -> GameContext {
        self.builder(snapshot, policy).build().unwrap()
    }

    pub fn context_with_mesh(
        &self,
        snapshot: WorldSnapshot,
        policy: Policy,
        mesh: FixedNavMesh,
    ) -> GameContext {
        self.builder(snapshot, policy).nav_mesh(mesh).build().unwrap()
    }

    fn builder(&self, snapshot: WorldSnapshot, policy: Policy) -> runtime::GameContextBuilder {
        GameContext::builder()
            .snapshot(snapshot)
            .policy(policy)
            .navigator(self.navigator.clone())
            .commands(self.sink.clone())
            .chat(self.chat.clone())
            .clock(std::sync::Arc::new(self.clock.clone()))
    }
}
