//! Ranked-set storage for the scoreboard demonstration
//!
//! This crate provides the [`RankedSetStore`] trait and two backends:
//! - InMemoryStore: process-local sharded store, stands in for the server in tests
//! - RedisStore: blocking client for a Redis-compatible server
//!
//! Both backends follow sorted-set semantics: add-or-update on insert,
//! descending range queries with ties broken by member text.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;
pub mod ranked_set;
pub mod redis_store;
pub mod store;

pub use memory::InMemoryStore;
pub use ranked_set::RankedSet;
pub use redis_store::RedisStore;
pub use store::RankedSetStore;
