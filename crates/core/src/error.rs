//! Error types for scoreboard operations
//!
//! A single error enum covers the store, payload encoding and configuration.
//! Library crates return [`Result`]; the binary wraps it with context.

use thiserror::Error;

/// Result type alias for scoreboard operations
pub type Result<T> = std::result::Result<T, ScoreboardError>;

/// Error type for all scoreboard operations
#[derive(Debug, Error)]
pub enum ScoreboardError {
    /// The store could not be reached or refused the handshake
    #[error("cannot connect to store at {url}: {reason}")]
    Connection {
        /// Connection URL that was attempted
        url: String,
        /// Underlying failure description
        reason: String,
    },

    /// The store rejected a command or returned a malformed reply
    #[error("store error: {message}")]
    Store {
        /// What was being done when the error occurred
        message: String,
        /// Underlying client error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A score is NaN or not a number at all
    #[error("invalid score: {value}")]
    InvalidScore {
        /// Offending textual value
        value: String,
    },

    /// A flattened argument list does not form score/member pairs
    #[error("syntax error: {reason}")]
    SyntaxError {
        /// Why the argument list was rejected
        reason: String,
    },

    /// Payload could not be encoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file is unreadable or malformed
    #[error("config error: {reason}")]
    Config {
        /// Description of the problem
        reason: String,
    },
}

impl ScoreboardError {
    /// Build a store error wrapping a client error
    pub fn store<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ScoreboardError::Store {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// True for errors caused by an unreachable store
    pub fn is_connection(&self) -> bool {
        matches!(self, ScoreboardError::Connection { .. })
    }
}
