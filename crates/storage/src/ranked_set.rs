//! In-memory ranked set
//!
//! # Design
//!
//! - FxHashMap: member -> score, O(1) score lookup and update
//! - BTreeSet<(Score, member)>: order index, ascending
//!
//! A reverse walk over the order index yields score-descending,
//! member-descending order, the order a reverse range query returns.

use rustc_hash::FxHashMap;
use scoreboard_core::{RangeQuery, Score, ScoredMember};
use std::collections::BTreeSet;

/// A single named sorted set
#[derive(Debug, Default, Clone)]
pub struct RankedSet {
    scores: FxHashMap<String, Score>,
    order: BTreeSet<(Score, String)>,
}

impl RankedSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Add a member or update its score
    ///
    /// Returns true if the member is new.
    pub fn insert(&mut self, member: &str, score: Score) -> bool {
        match self.scores.insert(member.to_string(), score) {
            Some(old) => {
                if old != score {
                    self.order.remove(&(old, member.to_string()));
                    self.order.insert((score, member.to_string()));
                }
                false
            }
            None => {
                self.order.insert((score, member.to_string()));
                true
            }
        }
    }

    /// Score of a member
    pub fn score(&self, member: &str) -> Option<Score> {
        self.scores.get(member).copied()
    }

    /// Members in descending order within the rank range
    pub fn rev_range(&self, range: RangeQuery) -> Vec<ScoredMember> {
        let Some((first, last)) = range.resolve(self.len()) else {
            return Vec::new();
        };
        self.order
            .iter()
            .rev()
            .skip(first)
            .take(last - first + 1)
            .map(|(score, member)| ScoredMember::new(member.clone(), *score))
            .collect()
    }
}
