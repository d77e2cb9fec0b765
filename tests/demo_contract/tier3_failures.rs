//! Tier 3: failures propagate and nothing is reported

use scoreboard::{run_demo, DemoConfig, RedisStore, ScoreboardError};

#[test]
fn tier3_unreachable_store_is_connection_error() {
    let config = DemoConfig::default().url("redis://127.0.0.1:1/");

    let result = RedisStore::connect(&config.url).and_then(|store| run_demo(store, &config));

    match result {
        Err(ScoreboardError::Connection { url, .. }) => assert_eq!(url, "redis://127.0.0.1:1/"),
        other => panic!("expected connection error, got {:?}", other),
    }
}

#[test]
fn tier3_bad_config_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "limit = \"lots\"\n").unwrap();

    let err = DemoConfig::from_toml_file(&path).unwrap_err();
    assert!(matches!(err, ScoreboardError::Config { .. }));
}
