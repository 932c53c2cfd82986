//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for one replay run.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Policy file, or a data directory holding `policy.toml`.
    pub policy_path: Option<PathBuf>,
    pub scenario_path: PathBuf,
    pub tick_period: Duration,
    pub max_ticks: Option<u64>,
    /// Also write logs to files in this directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            policy_path: None,
            scenario_path: PathBuf::from("scenario.ron"),
            tick_period: Duration::from_millis(500),
            max_ticks: None,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FARM_POLICY_PATH` - Policy file or data directory (default: built-in policy)
    /// - `FARM_SCENARIO_PATH` - RON scenario to replay (default: `scenario.ron`)
    /// - `FARM_TICK_MS` - Tick period in milliseconds (default: 500)
    /// - `FARM_MAX_TICKS` - Stop after this many ticks (default: scenario length)
    /// - `FARM_LOG_DIR` - Directory for log files (default: stderr only)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.policy_path = env::var("FARM_POLICY_PATH").ok().map(PathBuf::from);

        if let Ok(path) = env::var("FARM_SCENARIO_PATH") {
            config.scenario_path = PathBuf::from(path);
        }

        if let Some(ms) = read_env::<u64>("FARM_TICK_MS") {
            config.tick_period = Duration::from_millis(ms.max(1));
        }

        config.max_ticks = read_env::<u64>("FARM_MAX_TICKS");
        config.log_dir = env::var("FARM_LOG_DIR").ok().map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
