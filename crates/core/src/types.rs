//! Value types for ranked-set operations
//!
//! - Score: sorted-set score, never NaN, totally ordered
//! - ScoredMember: a (member, score) row as returned by a range query
//! - RangeQuery: inclusive rank bounds, negative indices count from the end

use crate::error::{Result, ScoreboardError};
use std::cmp::Ordering;
use std::fmt;

/// Sorted-set score
///
/// Wraps an `f64` that is guaranteed not to be NaN, which makes a total
/// order available. Negative zero is normalized to zero.
///
/// Display follows the store's textual reply format: integral values have
/// no fractional part (`1336`), infinities render as `inf` / `-inf`.
#[derive(Debug, Clone, Copy)]
pub struct Score(f64);

impl Score {
    /// Zero score
    pub const ZERO: Score = Score(0.0);

    /// Create a score, rejecting NaN
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(ScoreboardError::InvalidScore {
                value: value.to_string(),
            });
        }
        // -0.0 and 0.0 must compare equal under total_cmp
        Ok(Score(if value == 0.0 { 0.0 } else { value }))
    }

    /// Parse a score from its textual form
    ///
    /// Accepts anything `f64` parses plus the store spellings `inf`,
    /// `+inf` and `-inf`.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let value = match trimmed.to_ascii_lowercase().as_str() {
            "inf" | "+inf" => f64::INFINITY,
            "-inf" => f64::NEG_INFINITY,
            _ => trimmed
                .parse::<f64>()
                .map_err(|_| ScoreboardError::InvalidScore {
                    value: text.to_string(),
                })?,
        };
        Score::new(value).map_err(|_| ScoreboardError::InvalidScore {
            value: text.to_string(),
        })
    }

    /// Get the raw value
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Score(value as f64)
    }
}

impl TryFrom<f64> for Score {
    type Error = ScoreboardError;

    fn try_from(value: f64) -> Result<Self> {
        Score::new(value)
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_infinite() {
            f.write_str(if v > 0.0 { "inf" } else { "-inf" })
        } else if v.fract() == 0.0 && v.abs() < 1e17 {
            write!(f, "{}", v as i64)
        } else {
            write!(f, "{}", v)
        }
    }
}

/// A member with its score, as returned by a WITHSCORES range query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMember {
    /// Member text, stored verbatim
    pub member: String,
    /// Member score
    pub score: Score,
}

impl ScoredMember {
    /// Create a new row
    pub fn new(member: impl Into<String>, score: Score) -> Self {
        Self {
            member: member.into(),
            score,
        }
    }
}

/// Inclusive rank range for a range query
///
/// Indices are zero-based ranks in query order. Negative indices count
/// from the end (`-1` is the last element). Out-of-range bounds are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeQuery {
    /// First rank (inclusive)
    pub start: i64,
    /// Last rank (inclusive)
    pub stop: i64,
}

impl RangeQuery {
    /// Create a range from raw bounds
    pub fn new(start: i64, stop: i64) -> Self {
        Self { start, stop }
    }

    /// The first `n` ranks
    ///
    /// `top(0)` selects nothing (a naive `0..=-1` would select everything).
    pub fn top(n: usize) -> Self {
        if n == 0 {
            return Self { start: 1, stop: 0 };
        }
        Self {
            start: 0,
            stop: i64::try_from(n - 1).unwrap_or(i64::MAX),
        }
    }

    /// Every rank
    pub fn all() -> Self {
        Self { start: 0, stop: -1 }
    }

    /// Resolve against a collection length
    ///
    /// Returns inclusive `(first, last)` positions, or None when the range
    /// selects nothing.
    pub fn resolve(&self, len: usize) -> Option<(usize, usize)> {
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        let mut start = if self.start < 0 {
            len.saturating_add(self.start)
        } else {
            self.start
        };
        let mut stop = if self.stop < 0 {
            len.saturating_add(self.stop)
        } else {
            self.stop
        };
        if start < 0 {
            start = 0;
        }
        if start > stop || start >= len {
            return None;
        }
        if stop >= len {
            stop = len - 1;
        }
        Some((start as usize, stop as usize))
    }
}
