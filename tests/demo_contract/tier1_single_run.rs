//! Tier 1: one run against an empty store

use crate::test_utils::*;
use scoreboard::{run_demo, MemberKind, RankedSetStore, Score, Scoreboard};

#[test]
fn tier1_exactly_two_members() {
    let (store, config) = fresh();
    run_demo(&store, &config).unwrap();

    assert_eq!(store.cardinality("scoreboard").unwrap(), 2);
}

#[test]
fn tier1_benign_member_score() {
    let (store, config) = fresh();
    run_demo(&store, &config).unwrap();

    assert_eq!(
        store.score("scoreboard", BENIGN_MEMBER).unwrap(),
        Some(Score::from(1336))
    );
}

#[test]
fn tier1_payload_member_is_serialized_array() {
    let (store, config) = fresh();
    let report = run_demo(&store, &config).unwrap();

    assert_eq!(report.payload_member, PAYLOAD_MEMBER);
    assert_eq!(
        store.score("scoreboard", PAYLOAD_MEMBER).unwrap(),
        Some(Score::ZERO)
    );
}

#[test]
fn tier1_benign_ranks_first() {
    let (store, config) = fresh();
    let report = run_demo(&store, &config).unwrap();

    let members: Vec<&str> = report.rows.iter().map(|r| r.member.as_str()).collect();
    assert_eq!(members, vec![BENIGN_MEMBER, PAYLOAD_MEMBER]);
    assert_eq!(report.rows, all_rows(&store, "scoreboard"));
}

#[test]
fn tier1_payload_round_trips_as_structured_data() {
    let (store, config) = fresh();
    run_demo(&store, &config).unwrap();

    let board = Scoreboard::new(&store, "scoreboard");
    let audited = board.audit(100).unwrap();
    match &audited[1].kind {
        MemberKind::Structured(value) => {
            assert_eq!(value[0], "test");
            assert_eq!(value[1], 1337);
            assert_eq!(value[2], "pwned");
        }
        MemberKind::Plain => panic!("payload member should decode to an array"),
    }
}

#[test]
fn tier1_reply_shape() {
    let (store, config) = fresh();
    let report = run_demo(&store, &config).unwrap();

    assert_eq!(
        report.reply(),
        vec![BENIGN_MEMBER, "1336", PAYLOAD_MEMBER, "0"]
    );
}
