//! Wires a scenario to the decision core.
use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, TimeDelta, Utc};
use farm_content::{ContentFactory, FileConfigStore};
use farm_core::{ConfigStore, UnitFilters};
use runtime::{GameContext, ManualClock, RuntimeConfig, ServiceFactory, TickDriver};

use crate::config::ClientConfig;
use crate::scenario::{LoggingAlert, LoggingCommandSink, LoggingNavigator, ReplayChat, ReplayWorld, Scenario};

/// Totals for a finished replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplaySummary {
    pub ticks: u64,
    pub commands: usize,
}

/// A tick driver fed from a recorded scenario.
pub struct Replay {
    driver: TickDriver,
    commands: LoggingCommandSink,
}

impl Replay {
    /// Builds the replay. The clock starts at `start` and advances by the
    /// tick period per frame.
    pub fn new(config: &ClientConfig, scenario: Scenario, start: DateTime<Utc>) -> Result<Self> {
        let services = ServiceFactory::default()
            .with_unit_filter(|| Arc::new(UnitFilters::new().with_alert(Arc::new(LoggingAlert))));

        let config_store: Arc<dyn ConfigStore> = match &config.policy_path {
            Some(path) => Arc::new(open_store(path)?),
            None => services.create_config_store(),
        };

        let frames = scenario.len() as u64;
        let max_ticks = config.max_ticks.map_or(frames, |cap| cap.min(frames));
        let step = TimeDelta::from_std(config.tick_period)?;

        let clock = ManualClock::new(start);
        let chat = ReplayChat::default();
        let commands = LoggingCommandSink::default();
        let world = ReplayWorld::new(scenario, chat.clone(), clock.clone(), step);

        let context = GameContext::builder()
            .policy(config_store.policy())
            .navigator(LoggingNavigator::default())
            .commands(commands.clone())
            .chat(chat)
            .clock(Arc::new(clock))
            .services(&services)
            .build()?;

        let driver = TickDriver::builder()
            .config(RuntimeConfig {
                tick_period: config.tick_period,
                max_ticks: Some(max_ticks),
            })
            .context(context)
            .world(world)
            .config_store(config_store)
            .services(services)
            .build()?;

        Ok(Self { driver, commands })
    }

    pub async fn run(&mut self, shutdown: impl Future<Output = ()>) -> ReplaySummary {
        let ticks = self.driver.run(shutdown).await;
        ReplaySummary {
            ticks,
            commands: self.commands.count(),
        }
    }

    pub fn driver(&self) -> &TickDriver {
        &self.driver
    }
}

/// Opens a policy file, or `policy.toml` inside a data directory.
fn open_store(path: &Path) -> Result<FileConfigStore> {
    if path.is_dir() {
        ContentFactory::new(path).config_store()
    } else {
        FileConfigStore::open(path)
    }
}
