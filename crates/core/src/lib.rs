//! Core types for the scoreboard demonstration
//!
//! This crate defines the foundational types shared by every other crate:
//! - Score: NaN-free, totally ordered sorted-set score
//! - ScoredMember: one row of a ranked-set query
//! - RangeQuery: inclusive rank bounds with store index semantics
//! - PayloadItem: element of a heterogeneous serialized payload
//! - ScoreboardError: error type for all operations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod payload;
pub mod types;

pub use error::{Result, ScoreboardError};
pub use payload::{serialize_payload, PayloadItem};
pub use types::{RangeQuery, Score, ScoredMember};
