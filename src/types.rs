//! Public types for the scoreboard API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Core value types
// ============================================================================

pub use scoreboard_core::{PayloadItem, RangeQuery, Score, ScoredMember};

// Errors
pub use scoreboard_core::{Result, ScoreboardError};

// ============================================================================
// Stores
// ============================================================================

pub use scoreboard_storage::{InMemoryStore, RankedSetStore, RedisStore};

// ============================================================================
// Primitives
// ============================================================================

pub use scoreboard_primitives::{
    classify_member, flatten_zadd_args, AuditedMember, MemberKind, Scoreboard, ZaddArg,
};
