//! Tier 4: against a real server
//!
//! Set `SCOREBOARD_TEST_URL` to point at a server other than the default.
//! Each test uses its own key so existing `scoreboard` data is left alone.

use crate::test_utils::*;
use scoreboard::{run_demo, DemoConfig, RankedSetStore, RedisStore, Score, DEFAULT_URL};

fn live_config(suffix: &str) -> DemoConfig {
    let url = std::env::var("SCOREBOARD_TEST_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
    DemoConfig::default()
        .url(url)
        .key(format!("scoreboard-test-{}-{}", std::process::id(), suffix))
}

#[test]
#[ignore = "requires a running Redis server"]
fn tier4_live_single_run() {
    let config = live_config("single");
    let store = RedisStore::connect(&config.url).unwrap();

    let report = run_demo(&store, &config).unwrap();

    assert_eq!(store.cardinality(&config.key).unwrap(), 2);
    assert_eq!(
        report.reply(),
        vec![BENIGN_MEMBER, "1336", PAYLOAD_MEMBER, "0"]
    );
}

#[test]
#[ignore = "requires a running Redis server"]
fn tier4_live_rerun_overwrites() {
    let config = live_config("rerun");
    let store = RedisStore::connect(&config.url).unwrap();

    run_demo(&store, &config).unwrap();
    let second = run_demo(&store, &config).unwrap();

    assert!(!second.benign_added);
    assert_eq!(store.cardinality(&config.key).unwrap(), 2);
    assert_eq!(
        store.score(&config.key, PAYLOAD_MEMBER).unwrap(),
        Some(Score::ZERO)
    );
}
