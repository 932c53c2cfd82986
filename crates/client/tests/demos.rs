use std::path::PathBuf;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use farm_client::{ClientConfig, Replay, Scenario};
use farm_content::FileConfigStore;
use farm_core::{ConfigStore, UnitFlags};

fn demo(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(file)
}

#[test]
fn demo_scenario_parses_unit_flags() {
    let scenario = Scenario::load(&demo("scenario.ron")).unwrap();

    assert_eq!(scenario.len(), 3);
    assert!(scenario.frames[0].snapshot.units.is_empty());
    assert_eq!(
        scenario.frames[1].snapshot.units[0].flags,
        UnitFlags::ACTIVE | UnitFlags::RENDERED
    );
    assert!(scenario.frames[2].snapshot.units[0].flags.contains(UnitFlags::AGGROED));
}

#[test]
fn demo_policy_loads() {
    let store = FileConfigStore::open(demo("policy.toml")).unwrap();
    let policy = store.policy();

    assert!(policy.retreat.enabled);
    assert_eq!(policy.retreat.health_threshold, 20);
}

#[tokio::test(start_paused = true)]
async fn demo_replays_to_the_end() {
    let config = ClientConfig {
        policy_path: Some(demo("policy.toml")),
        scenario_path: demo("scenario.ron"),
        tick_period: Duration::from_millis(100),
        ..ClientConfig::default()
    };
    let scenario = Scenario::load(&config.scenario_path).unwrap();
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let mut replay = Replay::new(&config, scenario, start).unwrap();

    let summary = replay.run(std::future::pending()).await;

    assert_eq!(summary.ticks, 3);
    assert_eq!(replay.driver().context().target().map(|t| t.id), Some(200));
}
