//! Redis-backed ranked-set store
//!
//! Uses the blocking `redis` client. The connection is opened eagerly in
//! [`RedisStore::connect`] so an unreachable server fails before any
//! command is issued. No pooling, no retries: client defaults apply.

use crate::store::RankedSetStore;
use parking_lot::Mutex;
use redis::{Client, Commands, Connection, RedisError};
use scoreboard_core::{RangeQuery, Result, Score, ScoreboardError, ScoredMember};
use tracing::{debug, info};

/// Default server address
pub const DEFAULT_URL: &str = "redis://127.0.0.1:6379/";

/// Ranked-set store on a Redis-compatible server
pub struct RedisStore {
    url: String,
    conn: Mutex<Connection>,
}

impl RedisStore {
    /// Open a connection
    ///
    /// # Errors
    ///
    /// `ScoreboardError::Connection` if the URL is malformed or the server
    /// cannot be reached.
    pub fn connect(url: &str) -> Result<Self> {
        let client = Client::open(url).map_err(|e| connection_error(url, e))?;
        let conn = client
            .get_connection()
            .map_err(|e| connection_error(url, e))?;
        info!(target: "scoreboard::store", url, "connected");
        Ok(Self {
            url: url.to_string(),
            conn: Mutex::new(conn),
        })
    }

    /// URL this store is connected to
    pub fn url(&self) -> &str {
        &self.url
    }

    fn command_error(&self, command: &str, key: &str, err: RedisError) -> ScoreboardError {
        if err.is_connection_dropped() || err.is_connection_refusal() {
            connection_error(&self.url, err)
        } else {
            ScoreboardError::store(format!("{} {}", command, key), err)
        }
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").field("url", &self.url).finish()
    }
}

fn connection_error(url: &str, err: RedisError) -> ScoreboardError {
    ScoreboardError::Connection {
        url: url.to_string(),
        reason: err.to_string(),
    }
}

fn to_score(value: f64) -> Result<Score> {
    Score::new(value).map_err(|_| ScoreboardError::Store {
        message: format!("server returned invalid score {}", value),
        source: None,
    })
}

impl RankedSetStore for RedisStore {
    fn add(&self, key: &str, member: &str, score: Score) -> Result<bool> {
        let mut conn = self.conn.lock();
        let added: i64 = conn
            .zadd(key, member, score.value())
            .map_err(|e| self.command_error("ZADD", key, e))?;
        debug!(target: "scoreboard::store", key, member, %score, added, "ZADD");
        Ok(added > 0)
    }

    fn rev_range_with_scores(&self, key: &str, range: RangeQuery) -> Result<Vec<ScoredMember>> {
        let mut conn = self.conn.lock();
        let raw: Vec<(String, f64)> = conn
            .zrevrange_withscores(key, range.start as isize, range.stop as isize)
            .map_err(|e| self.command_error("ZREVRANGE", key, e))?;
        debug!(
            target: "scoreboard::store",
            key,
            start = range.start,
            stop = range.stop,
            rows = raw.len(),
            "ZREVRANGE WITHSCORES"
        );
        raw.into_iter()
            .map(|(member, score)| Ok(ScoredMember::new(member, to_score(score)?)))
            .collect()
    }

    fn cardinality(&self, key: &str) -> Result<usize> {
        let mut conn = self.conn.lock();
        conn.zcard(key)
            .map_err(|e| self.command_error("ZCARD", key, e))
    }

    fn score(&self, key: &str, member: &str) -> Result<Option<Score>> {
        let mut conn = self.conn.lock();
        let raw: Option<f64> = conn
            .zscore(key, member)
            .map_err(|e| self.command_error("ZSCORE", key, e))?;
        raw.map(to_score).transpose()
    }
}
