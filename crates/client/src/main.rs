//! Farm bot replay binary.
//!
//! Replays a scenario against a policy and logs every decision.
//!
//! # Examples
//!
//! ```bash
//! FARM_POLICY_PATH=demos/policy.toml FARM_SCENARIO_PATH=demos/scenario.ron \
//!     cargo run -p farm-client
//! ```

use anyhow::Result;
use chrono::Utc;
use farm_client::{ClientConfig, Replay, Scenario, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting farm bot replay");
    tracing::info!("Scenario: {}", config.scenario_path.display());
    match &config.policy_path {
        Some(path) => tracing::info!("Policy: {}", path.display()),
        None => tracing::info!("Policy: built-in defaults"),
    }

    // 3. Build and run
    let scenario = Scenario::load(&config.scenario_path)?;
    tracing::info!("{} frames loaded", scenario.len());

    let mut replay = Replay::new(&config, scenario, Utc::now())?;
    let summary = replay
        .run(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await;

    tracing::info!(
        "Replay finished: {} ticks, {} commands",
        summary.ticks,
        summary.commands
    );
    Ok(())
}
