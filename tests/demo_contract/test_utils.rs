//! Shared helpers for the demo contract tests

use scoreboard::{DemoConfig, InMemoryStore, RangeQuery, RankedSetStore, ScoredMember};

/// Member text the default payload serializes to
pub const PAYLOAD_MEMBER: &str = r#"["test",1337,"pwned"]"#;

/// Benign member of the default configuration
pub const BENIGN_MEMBER: &str = "FizzBuzz101";

/// Fresh empty store plus the default configuration
pub fn fresh() -> (InMemoryStore, DemoConfig) {
    (InMemoryStore::new(), DemoConfig::default())
}

/// Every row of a key, highest score first
pub fn all_rows<S: RankedSetStore>(store: &S, key: &str) -> Vec<ScoredMember> {
    store
        .rev_range_with_scores(key, RangeQuery::all())
        .expect("range query")
}
