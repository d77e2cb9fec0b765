//! Argument flattening
//!
//! Some store clients expand array arguments into consecutive protocol
//! arguments. A "username" that is an array then stops being one member:
//!
//! ```text
//! ZADD scoreboard 0 ["test", 1337, "pwned"]
//!   -> ZADD scoreboard 0 test 1337 pwned
//!   -> (0, "test"), (1337, "pwned")
//! ```
//!
//! The submitter of the array chooses the score of its second member.

use scoreboard_core::{PayloadItem, Result, Score, ScoreboardError};

/// One argument of an add command before flattening
#[derive(Debug, Clone, PartialEq)]
pub enum ZaddArg {
    /// Numeric score argument
    Score(f64),
    /// Plain member argument
    Member(String),
    /// Array argument, expanded in place
    Array(Vec<PayloadItem>),
}

impl ZaddArg {
    fn push_tokens(&self, out: &mut Vec<String>) {
        match self {
            ZaddArg::Score(s) => out.push(s.to_string()),
            ZaddArg::Member(m) => out.push(m.clone()),
            ZaddArg::Array(items) => out.extend(items.iter().map(PayloadItem::to_arg)),
        }
    }
}

/// Expand arrays and pair the resulting tokens as `score member`
///
/// # Errors
///
/// - `SyntaxError` if there are no tokens or an odd number of them
/// - `InvalidScore` if a score position does not parse as a number
///
/// All pairs are validated before any is returned.
pub fn flatten_zadd_args(args: &[ZaddArg]) -> Result<Vec<(Score, String)>> {
    let mut tokens = Vec::new();
    for arg in args {
        arg.push_tokens(&mut tokens);
    }

    if tokens.is_empty() || tokens.len() % 2 != 0 {
        return Err(ScoreboardError::SyntaxError {
            reason: format!(
                "expected score/member pairs, got {} argument(s)",
                tokens.len()
            ),
        });
    }

    tokens
        .chunks(2)
        .map(|pair| Ok((Score::parse(&pair[0])?, pair[1].clone())))
        .collect()
}
