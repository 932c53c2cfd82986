//! Per-tick context for behavior decisions.
//!
//! The [`GameContext`] serves as the "blackboard" every behavior and the unit
//! filter read from. It provides:
//!
//! - Read access to the world snapshot and policy of the current tick
//! - The persistent target, re-resolved against each fresh snapshot
//! - The pending path toward the current destination
//! - Handles to the movement, command, and chat collaborators
//!
//! # Lifetime
//!
//! The context is owned by the tick driver and lent to the state machine for
//! one tick at a time. Snapshot and policy are replaced wholesale by
//! [`GameContext::refresh`]; nothing mutates them during a tick.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use farm_core::{ActionFilters, BattleAbility, Party, Player, Policy, Position, Unit, UnitFilter};

use crate::api::{
    ChatLog, Clock, Command, CommandSink, NavMesh, Navigator, NoChatLog, RuntimeError,
    StraightLineNavMesh, SystemClock, WorldSnapshot,
};
use crate::factory::ServiceFactory;

/// Context for one tick of decision making.
pub struct GameContext {
    snapshot: WorldSnapshot,
    policy: Arc<Policy>,

    /// The unit behaviors are working on. Survives across ticks by id.
    target: Option<Unit>,

    /// Remaining path nodes, consumed front to back.
    path: VecDeque<Position>,

    nav_mesh: Box<dyn NavMesh>,
    navigator: Box<dyn Navigator>,
    commands: Box<dyn CommandSink>,
    chat: Box<dyn ChatLog>,
    clock: Arc<dyn Clock>,
    unit_filter: Arc<dyn UnitFilter>,
}

impl GameContext {
    pub fn builder() -> GameContextBuilder {
        GameContextBuilder::new()
    }

    /// Installs the snapshot and policy for a new tick.
    ///
    /// The target is kept only if a unit with the same id is still present,
    /// and is replaced by that unit's fresh state.
    pub fn refresh(&mut self, snapshot: WorldSnapshot, policy: Arc<Policy>) {
        self.target = self
            .target
            .take()
            .and_then(|target| snapshot.unit(target.id).cloned());
        self.snapshot = snapshot;
        self.policy = policy;
    }

    // ========================================================================
    // World Accessors
    // ========================================================================

    pub fn snapshot(&self) -> &WorldSnapshot {
        &self.snapshot
    }

    pub fn player(&self) -> &Player {
        &self.snapshot.player
    }

    pub fn party(&self) -> &Party {
        &self.snapshot.party
    }

    pub fn units(&self) -> &[Unit] {
        &self.snapshot.units
    }

    /// Id of the unit the game client has targeted.
    pub fn targeted_id(&self) -> Option<u32> {
        self.snapshot.targeted_id
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // ========================================================================
    // Target Helpers
    // ========================================================================

    pub fn target(&self) -> Option<&Unit> {
        self.target.as_ref()
    }

    pub fn set_target(&mut self, target: Option<Unit>) {
        self.target = target;
    }

    /// The target exists and still passes the unit filter.
    pub fn target_is_valid(&self) -> bool {
        self.is_attackable(self.target.as_ref())
    }

    /// Runs the unit filter against `unit` with this tick's party and policy.
    pub fn is_attackable(&self, unit: Option<&Unit>) -> bool {
        self.unit_filter
            .is_attackable(Some(&self.snapshot.party), unit, &self.policy)
    }

    /// Surrounding units that pass the unit filter.
    pub fn attackable_units(&self) -> impl Iterator<Item = &Unit> {
        self.snapshot
            .units
            .iter()
            .filter(|unit| self.is_attackable(Some(unit)))
    }

    /// Returns true if any live unit has aggroed the player.
    pub fn any_aggroed(&self) -> bool {
        self.snapshot
            .units
            .iter()
            .any(|unit| unit.has_aggroed() && unit.is_active() && !unit.is_dead())
    }

    // ========================================================================
    // Ability Helpers
    // ========================================================================

    /// Abilities in the named battle list the player can use right now.
    pub fn usable_actions<'a>(
        &'a self,
        list: &str,
    ) -> impl Iterator<Item = &'a BattleAbility> + use<'a> {
        let player = &self.snapshot.player;
        self.policy
            .battle_list(list)
            .iter()
            .filter(move |ability| ActionFilters::is_usable(player, ability))
    }

    // ========================================================================
    // Path Helpers
    // ========================================================================

    /// Replaces the pending path with a fresh navmesh query to `destination`.
    pub fn plan_path(&mut self, destination: Position) -> usize {
        let from = self.snapshot.player.position;
        self.path = self.nav_mesh.find_path_between(from, destination);
        self.path.len()
    }

    pub fn path(&self) -> &VecDeque<Position> {
        &self.path
    }

    /// Drops leading nodes within `tolerance` of the player.
    pub fn drop_reached_nodes(&mut self, tolerance: f64) {
        let player = self.snapshot.player.position;
        while self
            .path
            .front()
            .is_some_and(|node| node.distance(&player) <= tolerance)
        {
            self.path.pop_front();
        }
    }

    pub fn clear_path(&mut self) {
        self.path.clear();
    }

    // ========================================================================
    // Collaborators
    // ========================================================================

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    pub fn navigator_mut(&mut self) -> &mut dyn Navigator {
        self.navigator.as_mut()
    }

    pub fn chat(&self) -> &dyn ChatLog {
        self.chat.as_ref()
    }

    pub fn send(&mut self, command: Command) {
        tracing::debug!("command: {:?}", command);
        self.commands.send(command);
    }

    pub fn send_string(&mut self, text: impl Into<String>) {
        self.send(Command::Send(text.into()));
    }
}

/// Builder for [`GameContext`].
///
/// The navigator and command sink are required. Everything else has a
/// default: a straight-line navmesh, an empty chat log, the system clock,
/// the standard unit filter, an empty snapshot and the default policy.
pub struct GameContextBuilder {
    snapshot: WorldSnapshot,
    policy: Arc<Policy>,
    nav_mesh: Box<dyn NavMesh>,
    navigator: Option<Box<dyn Navigator>>,
    commands: Option<Box<dyn CommandSink>>,
    chat: Box<dyn ChatLog>,
    clock: Arc<dyn Clock>,
    unit_filter: Option<Arc<dyn UnitFilter>>,
}

impl GameContextBuilder {
    fn new() -> Self {
        Self {
            snapshot: WorldSnapshot::default(),
            policy: Arc::new(Policy::default()),
            nav_mesh: Box::new(StraightLineNavMesh),
            navigator: None,
            commands: None,
            chat: Box::new(NoChatLog),
            clock: Arc::new(SystemClock),
            unit_filter: None,
        }
    }

    /// Initial snapshot, before the first refresh.
    pub fn snapshot(mut self, snapshot: WorldSnapshot) -> Self {
        self.snapshot = snapshot;
        self
    }

    /// Initial policy, before the first refresh.
    pub fn policy(mut self, policy: impl Into<Arc<Policy>>) -> Self {
        self.policy = policy.into();
        self
    }

    pub fn nav_mesh(mut self, nav_mesh: impl NavMesh + 'static) -> Self {
        self.nav_mesh = Box::new(nav_mesh);
        self
    }

    pub fn navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Some(Box::new(navigator));
        self
    }

    pub fn commands(mut self, commands: impl CommandSink + 'static) -> Self {
        self.commands = Some(Box::new(commands));
        self
    }

    pub fn chat(mut self, chat: impl ChatLog + 'static) -> Self {
        self.chat = Box::new(chat);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Takes the unit filter from a service factory.
    pub fn services(mut self, services: &ServiceFactory) -> Self {
        self.unit_filter = Some(services.create_unit_filter());
        self
    }

    pub fn build(self) -> Result<GameContext, RuntimeError> {
        let navigator = self
            .navigator
            .ok_or(RuntimeError::MissingCollaborator("navigator"))?;
        let commands = self
            .commands
            .ok_or(RuntimeError::MissingCollaborator("command sink"))?;
        let unit_filter = self
            .unit_filter
            .unwrap_or_else(|| ServiceFactory::default().create_unit_filter());

        Ok(GameContext {
            snapshot: self.snapshot,
            policy: self.policy,
            target: None,
            path: VecDeque::new(),
            nav_mesh: self.nav_mesh,
            navigator,
            commands,
            chat: self.chat,
            clock: self.clock,
            unit_filter,
        })
    }
}
