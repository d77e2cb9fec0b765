//! Store abstraction over ranked-set backends

use scoreboard_core::{RangeQuery, Result, Score, ScoredMember};
use std::sync::Arc;

/// Operations on named ranked sets
///
/// Every method is a single independent round-trip. Implementations do not
/// validate member text: any string is a valid member.
pub trait RankedSetStore {
    /// Add a member or update its score
    ///
    /// Returns true when the member was not present before. The set is
    /// created implicitly on first insert.
    fn add(&self, key: &str, member: &str, score: Score) -> Result<bool>;

    /// Members in descending score order with their scores
    ///
    /// Ties are ordered by member text, descending. A missing key yields
    /// an empty result.
    fn rev_range_with_scores(&self, key: &str, range: RangeQuery) -> Result<Vec<ScoredMember>>;

    /// Number of members, 0 for a missing key
    fn cardinality(&self, key: &str) -> Result<usize>;

    /// Score of a single member
    fn score(&self, key: &str, member: &str) -> Result<Option<Score>>;
}

impl<T: RankedSetStore + ?Sized> RankedSetStore for &T {
    fn add(&self, key: &str, member: &str, score: Score) -> Result<bool> {
        (**self).add(key, member, score)
    }

    fn rev_range_with_scores(&self, key: &str, range: RangeQuery) -> Result<Vec<ScoredMember>> {
        (**self).rev_range_with_scores(key, range)
    }

    fn cardinality(&self, key: &str) -> Result<usize> {
        (**self).cardinality(key)
    }

    fn score(&self, key: &str, member: &str) -> Result<Option<Score>> {
        (**self).score(key, member)
    }
}

impl<T: RankedSetStore + ?Sized> RankedSetStore for Arc<T> {
    fn add(&self, key: &str, member: &str, score: Score) -> Result<bool> {
        (**self).add(key, member, score)
    }

    fn rev_range_with_scores(&self, key: &str, range: RangeQuery) -> Result<Vec<ScoredMember>> {
        (**self).rev_range_with_scores(key, range)
    }

    fn cardinality(&self, key: &str) -> Result<usize> {
        (**self).cardinality(key)
    }

    fn score(&self, key: &str, member: &str) -> Result<Option<Score>> {
        (**self).score(key, member)
    }
}
