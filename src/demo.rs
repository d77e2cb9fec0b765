//! The scoreboard injection demonstration
//!
//! Two inserts and one query, each awaited before the next:
//!
//! 1. add the benign member with its score
//! 2. serialize the payload sequence and add the text as a member
//! 3. read the top `limit` members, highest score first, with scores
//!
//! Nothing is validated and nothing is retried. The first store error
//! aborts the run.

use crate::config::DemoConfig;
use scoreboard_core::{Result, Score, ScoredMember};
use scoreboard_primitives::{audit_rows, Scoreboard};
use scoreboard_storage::RankedSetStore;
use std::fmt;
use tracing::info;

/// Outcome of one demonstration run
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    /// Rows returned by the top-N query, in rank order
    pub rows: Vec<ScoredMember>,
    /// Member text produced by serializing the payload
    pub payload_member: String,
    /// Whether the benign member was new
    pub benign_added: bool,
    /// Whether the payload member was new
    pub payload_added: bool,
    /// Rows whose member decodes to a JSON array or object
    pub structured_members: usize,
}

impl DemoReport {
    /// The raw WITHSCORES reply: member, score, member, score, ...
    pub fn reply(&self) -> Vec<String> {
        self.rows
            .iter()
            .flat_map(|row| [row.member.clone(), row.score.to_string()])
            .collect()
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reply = self.reply();
        if reply.is_empty() {
            return f.write_str("[]");
        }
        f.write_str("[ ")?;
        for (i, item) in reply.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}'", item.replace('\\', "\\\\").replace('\'', "\\'"))?;
        }
        f.write_str(" ]")
    }
}

/// Run the demonstration against a store
pub fn run_demo<S: RankedSetStore>(store: S, config: &DemoConfig) -> Result<DemoReport> {
    let benign_score = Score::new(config.benign_score)?;
    let payload_score = Score::new(config.payload_score)?;
    let board = Scoreboard::new(store, config.key.as_str());

    let benign_added = board.submit(&config.benign_member, benign_score)?;
    info!(
        target: "scoreboard::demo",
        key = %config.key,
        member = %config.benign_member,
        score = %benign_score,
        added = benign_added,
        "benign entry submitted"
    );

    let (payload_member, payload_added) = board.submit_payload(&config.payload, payload_score)?;
    info!(
        target: "scoreboard::demo",
        key = %config.key,
        member = %payload_member,
        score = %payload_score,
        added = payload_added,
        "payload entry submitted"
    );

    let rows = board.top(config.limit)?;
    let structured_members = audit_rows(board.key(), rows.clone())
        .iter()
        .filter(|entry| entry.kind.is_structured())
        .count();
    info!(
        target: "scoreboard::demo",
        rows = rows.len(),
        structured_members,
        "top entries read back"
    );

    Ok(DemoReport {
        rows,
        payload_member,
        benign_added,
        payload_added,
        structured_members,
    })
}
