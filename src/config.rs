//! Demo configuration
//!
//! [`DemoConfig::default`] reproduces the fixed demonstration: local store,
//! `scoreboard` key, one benign entry and one serialized-array entry, top
//! 100 query. A TOML file can override any field; the CLI layers flags on
//! top of that.

use scoreboard_core::{PayloadItem, Result, ScoreboardError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use scoreboard_storage::redis_store::DEFAULT_URL;

/// Default ranked-set key
pub const DEFAULT_KEY: &str = "scoreboard";

/// Default number of rows returned by the query
pub const DEFAULT_LIMIT: usize = 100;

/// Parameters of one demonstration run
///
/// Use the builder methods to override fields:
///
/// ```ignore
/// use scoreboard::DemoConfig;
///
/// let config = DemoConfig::new().key("weekly").limit(10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Store connection URL
    pub url: String,
    /// Ranked-set key
    pub key: String,
    /// Plain-text member inserted first
    pub benign_member: String,
    /// Score of the plain-text member
    pub benign_score: f64,
    /// Sequence serialized into the second member
    pub payload: Vec<PayloadItem>,
    /// Score of the serialized member
    pub payload_score: f64,
    /// Number of rows to read back
    pub limit: usize,
}

impl DemoConfig {
    /// Create a config with the demonstration defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the ranked-set key
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Set the number of rows read back
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Parse a TOML document; missing fields keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ScoreboardError::Config {
            reason: e.to_string(),
        })
    }

    /// Load a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ScoreboardError::Config {
            reason: format!("{}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&text)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            key: DEFAULT_KEY.to_string(),
            benign_member: "FizzBuzz101".to_string(),
            benign_score: 1336.0,
            payload: vec![
                PayloadItem::Text("test".to_string()),
                PayloadItem::Number(1337),
                PayloadItem::Text("pwned".to_string()),
            ],
            payload_score: 0.0,
            limit: DEFAULT_LIMIT,
        }
    }
}
