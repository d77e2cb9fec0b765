//! Process-local ranked-set store
//!
//! Sharded by key: a DashMap from set name to [`RankedSet`]. Reads of
//! different keys never contend and writes lock only the target key.
//!
//! Used wherever a real server is not wanted: tests and `--in-memory` runs.

use crate::ranked_set::RankedSet;
use crate::store::RankedSetStore;
use dashmap::DashMap;
use scoreboard_core::{RangeQuery, Result, Score, ScoredMember};
use tracing::debug;

/// In-memory ranked-set store
///
/// # Thread Safety
///
/// All operations take `&self` and are safe to call from many threads;
/// each key's set is guarded by its DashMap shard.
pub struct InMemoryStore {
    sets: DashMap<String, RankedSet>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            sets: DashMap::new(),
        }
    }

    /// Number of non-empty sets
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// Total members across all sets
    pub fn total_members(&self) -> usize {
        self.sets.iter().map(|entry| entry.value().len()).sum()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("set_count", &self.set_count())
            .field("total_members", &self.total_members())
            .finish()
    }
}

impl RankedSetStore for InMemoryStore {
    fn add(&self, key: &str, member: &str, score: Score) -> Result<bool> {
        let added = self
            .sets
            .entry(key.to_string())
            .or_insert_with(RankedSet::new)
            .insert(member, score);
        debug!(target: "scoreboard::store", key, member, %score, added, "ZADD (memory)");
        Ok(added)
    }

    fn rev_range_with_scores(&self, key: &str, range: RangeQuery) -> Result<Vec<ScoredMember>> {
        let rows = self
            .sets
            .get(key)
            .map(|set| set.rev_range(range))
            .unwrap_or_default();
        debug!(
            target: "scoreboard::store",
            key,
            start = range.start,
            stop = range.stop,
            rows = rows.len(),
            "ZREVRANGE (memory)"
        );
        Ok(rows)
    }

    fn cardinality(&self, key: &str) -> Result<usize> {
        Ok(self.sets.get(key).map(|set| set.len()).unwrap_or(0))
    }

    fn score(&self, key: &str, member: &str) -> Result<Option<Score>> {
        Ok(self.sets.get(key).and_then(|set| set.score(member)))
    }
}
