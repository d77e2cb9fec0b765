//! Primitives layer for the scoreboard demonstration
//!
//! - Scoreboard: stateless facade binding a store to one ranked-set key
//! - injection: how an argument-flattening client rewrites an array member
//! - audit: detection of member text that deserializes to structured data

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod audit;
pub mod injection;
pub mod scoreboard;

pub use audit::{audit_rows, classify_member, AuditedMember, MemberKind};
pub use injection::{flatten_zadd_args, ZaddArg};
pub use scoreboard::Scoreboard;
