//! Scoreboard injection demonstration
//!
//! Shows that a sorted-set scoreboard accepts any text as a username,
//! including a serialized array, and that a consumer decoding member text
//! gets attacker-shaped data back.
//!
//! # Quick Start
//!
//! ```ignore
//! use scoreboard::{run_demo, DemoConfig, RedisStore};
//!
//! let store = RedisStore::connect(scoreboard::DEFAULT_URL)?;
//! let report = run_demo(&store, &DemoConfig::default())?;
//! println!("{}", report);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod demo;
mod types;

pub use config::{DemoConfig, DEFAULT_KEY, DEFAULT_LIMIT, DEFAULT_URL};
pub use demo::{run_demo, DemoReport};
pub use types::*;
