//! Scoreboard primitive
//!
//! Stateless facade over a [`RankedSetStore`], bound to one set key.
//!
//! # Design
//!
//! Scoreboard holds only the store handle and the key name. Two
//! Scoreboards over the same store and key see the same data. Member text
//! is never validated: usernames go to the store verbatim.
//!
//! # Example
//!
//! ```ignore
//! let board = Scoreboard::new(InMemoryStore::new(), "scoreboard");
//! board.submit("FizzBuzz101", Score::from(1336))?;
//! let top = board.top(100)?;
//! ```

use crate::audit::{audit_rows, AuditedMember};
use crate::injection::{flatten_zadd_args, ZaddArg};
use scoreboard_core::{serialize_payload, PayloadItem, RangeQuery, Result, Score, ScoredMember};
use scoreboard_storage::RankedSetStore;
use tracing::debug;

/// Scoreboard primitive
#[derive(Debug, Clone)]
pub struct Scoreboard<S> {
    store: S,
    key: String,
}

impl<S: RankedSetStore> Scoreboard<S> {
    /// Bind a store to a set key
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Key of the underlying ranked set
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Submit a username with a score
    ///
    /// Overwrites the score of an existing username. Returns true if the
    /// username is new.
    pub fn submit(&self, username: &str, score: Score) -> Result<bool> {
        self.store.add(&self.key, username, score)
    }

    /// Serialize a sequence and submit the resulting text as one username
    ///
    /// Returns the stored member text and whether it was new.
    pub fn submit_payload(&self, items: &[PayloadItem], score: Score) -> Result<(String, bool)> {
        let member = serialize_payload(items)?;
        debug!(target: "scoreboard::primitives", key = %self.key, member = %member, "serialized payload");
        let added = self.submit(&member, score)?;
        Ok((member, added))
    }

    /// Submit arguments the way an array-flattening client would send them
    ///
    /// Every pair is validated before the first is written. Returns the
    /// number of new members.
    pub fn submit_flattened(&self, args: &[ZaddArg]) -> Result<usize> {
        let pairs = flatten_zadd_args(args)?;
        let mut added = 0;
        for (score, member) in &pairs {
            if self.submit(member, *score)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// The `n` highest-ranked members with their scores
    pub fn top(&self, n: usize) -> Result<Vec<ScoredMember>> {
        self.store.rev_range_with_scores(&self.key, RangeQuery::top(n))
    }

    /// Number of members
    pub fn len(&self) -> Result<usize> {
        self.store.cardinality(&self.key)
    }

    /// Check if the scoreboard has no members
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Score of one member
    pub fn score_of(&self, member: &str) -> Result<Option<Score>> {
        self.store.score(&self.key, member)
    }

    /// Top `n` rows, each classified by how a JSON consumer would read it
    ///
    /// Logs a warning for every structured member.
    pub fn audit(&self, n: usize) -> Result<Vec<AuditedMember>> {
        Ok(audit_rows(&self.key, self.top(n)?))
    }
}
