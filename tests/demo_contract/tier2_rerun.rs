//! Tier 2: repeated runs and pre-existing data

use crate::test_utils::*;
use scoreboard::{run_demo, RankedSetStore, Score};
use std::sync::Arc;

#[test]
fn tier2_second_run_succeeds_without_duplicates() {
    let (store, config) = fresh();
    let first = run_demo(&store, &config).unwrap();
    let second = run_demo(&store, &config).unwrap();

    assert!(first.benign_added && first.payload_added);
    assert!(!second.benign_added && !second.payload_added);
    assert_eq!(store.cardinality("scoreboard").unwrap(), 2);
    assert_eq!(first.rows, second.rows);
}

#[test]
fn tier2_rerun_overwrites_scores() {
    let (store, config) = fresh();
    store
        .add("scoreboard", BENIGN_MEMBER, Score::from(5))
        .unwrap();

    let report = run_demo(&store, &config).unwrap();

    assert!(!report.benign_added);
    assert_eq!(
        store.score("scoreboard", BENIGN_MEMBER).unwrap(),
        Some(Score::from(1336))
    );
}

#[test]
fn tier2_existing_entries_are_ranked_in() {
    let (store, config) = fresh();
    store.add("scoreboard", "leader", Score::from(9999)).unwrap();
    store.add("scoreboard", "tail", Score::from(-1)).unwrap();

    let report = run_demo(&store, &config).unwrap();
    let members: Vec<&str> = report.rows.iter().map(|r| r.member.as_str()).collect();

    assert_eq!(members, vec!["leader", BENIGN_MEMBER, PAYLOAD_MEMBER, "tail"]);
}

#[test]
fn tier2_limit_caps_rows() {
    let (store, config) = fresh();
    for i in 0..150 {
        store
            .add("scoreboard", &format!("player{}", i), Score::from(2000 + i))
            .unwrap();
    }

    let report = run_demo(&store, &config).unwrap();

    assert_eq!(report.rows.len(), 100);
    assert_eq!(store.cardinality("scoreboard").unwrap(), 152);
    assert!(report.rows.iter().all(|r| r.member != PAYLOAD_MEMBER));
}

#[test]
fn tier2_other_keys_untouched() {
    let store = Arc::new(scoreboard::InMemoryStore::new());
    store.add("other", "alice", Score::from(1)).unwrap();

    run_demo(Arc::clone(&store), &scoreboard::DemoConfig::default()).unwrap();

    assert_eq!(all_rows(&*store, "other").len(), 1);
    assert_eq!(store.set_count(), 2);
}
