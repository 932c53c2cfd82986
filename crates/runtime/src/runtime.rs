//! Tick driver.
//!
//! The driver owns the [`GameContext`] and the roster, pulls a fresh policy
//! and world snapshot every tick, and runs the state machine exactly once.
//! Ticks never overlap: [`TickDriver::run`] awaits each tick before
//! scheduling the next.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use farm_core::ConfigStore;
use state_machine::{Outcome, StateMachine};
use tokio::time::{self, MissedTickBehavior};

use crate::GameContext;
use crate::api::{Result, RuntimeError, WorldSnapshotProvider};
use crate::factory::ServiceFactory;
use crate::states::default_roster;

/// Driver configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub tick_period: Duration,
    /// Stop after this many ticks. `None` runs until shutdown.
    pub max_ticks: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(500),
            max_ticks: None,
        }
    }
}

/// What one tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickReport {
    /// The named state ran.
    Ran(&'static str),
    /// No state's guard held.
    Idle,
    /// The world snapshot could not be refreshed; nothing was evaluated.
    Skipped,
}

impl From<Outcome> for TickReport {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Ran(name) => Self::Ran(name),
            Outcome::Idle => Self::Idle,
        }
    }
}

/// Drives the roster at a fixed period.
pub struct TickDriver {
    context: GameContext,
    machine: StateMachine<GameContext>,
    world: Box<dyn WorldSnapshotProvider>,
    config_store: Arc<dyn ConfigStore>,
    config: RuntimeConfig,
    ticks: u64,
}

impl TickDriver {
    pub fn builder() -> TickDriverBuilder {
        TickDriverBuilder::new()
    }

    /// Refreshes the world and runs one tick, surfacing refresh errors.
    pub fn try_tick(&mut self) -> Result<TickReport> {
        self.ticks += 1;

        let policy = self.config_store.policy();
        let snapshot = self.world.snapshot()?;
        self.context.refresh(snapshot, policy);

        let report = TickReport::from(self.machine.tick(&mut self.context));
        match report {
            TickReport::Ran(name) => tracing::debug!("tick {}: {}", self.ticks, name),
            _ => tracing::trace!("tick {}: idle", self.ticks),
        }
        Ok(report)
    }

    /// Runs one tick. A failed refresh skips the tick; the next one retries.
    pub fn tick(&mut self) -> TickReport {
        match self.try_tick() {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!("tick {} skipped: {}", self.ticks, err);
                TickReport::Skipped
            }
        }
    }

    /// Ticks every `tick_period` until `shutdown` resolves or the tick cap is
    /// reached. Returns the number of ticks run by this call.
    pub async fn run(&mut self, shutdown: impl Future<Output = ()>) -> u64 {
        let mut interval = time::interval(self.config.tick_period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut ran = 0;
        loop {
            if self.config.max_ticks.is_some_and(|cap| ran >= cap) {
                tracing::info!("tick cap of {} reached", ran);
                break;
            }

            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::info!("shutdown requested after {} ticks", ran);
                    break;
                }
                _ = interval.tick() => {
                    self.tick();
                    ran += 1;
                }
            }
        }
        ran
    }

    pub fn context(&self) -> &GameContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut GameContext {
        &mut self.context
    }

    /// Ticks attempted so far, skipped ones included.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn priority_order(&self) -> Vec<&'static str> {
        self.machine.priority_order().collect()
    }
}

/// Builder for [`TickDriver`].
///
/// The context and world provider are required. The roster defaults to
/// [`default_roster`] and the config store to the service factory's default
/// policy.
pub struct TickDriverBuilder {
    config: RuntimeConfig,
    context: Option<GameContext>,
    machine: Option<StateMachine<GameContext>>,
    world: Option<Box<dyn WorldSnapshotProvider>>,
    config_store: Option<Arc<dyn ConfigStore>>,
    services: Option<ServiceFactory>,
}

impl TickDriverBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            context: None,
            machine: None,
            world: None,
            config_store: None,
            services: None,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn context(mut self, context: GameContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Replaces the default roster.
    pub fn machine(mut self, machine: StateMachine<GameContext>) -> Self {
        self.machine = Some(machine);
        self
    }

    pub fn world(mut self, world: impl WorldSnapshotProvider + 'static) -> Self {
        self.world = Some(Box::new(world));
        self
    }

    pub fn config_store(mut self, store: Arc<dyn ConfigStore>) -> Self {
        self.config_store = Some(store);
        self
    }

    /// Source of the fallback config store.
    pub fn services(mut self, services: ServiceFactory) -> Self {
        self.services = Some(services);
        self
    }

    pub fn build(self) -> Result<TickDriver> {
        let context = self
            .context
            .ok_or(RuntimeError::MissingCollaborator("game context"))?;
        let world = self
            .world
            .ok_or(RuntimeError::MissingCollaborator("world snapshot provider"))?;
        let config_store = match self.config_store {
            Some(store) => store,
            None => self.services.unwrap_or_default().create_config_store(),
        };

        Ok(TickDriver {
            context,
            machine: self.machine.unwrap_or_else(default_roster),
            world,
            config_store,
            config: self.config,
            ticks: 0,
        })
    }
}
