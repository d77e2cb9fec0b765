//! Member audit
//!
//! A consumer that deserializes member text trusts whatever the submitter
//! wrote. This module reports which members would come back as structured
//! values rather than plain labels.

use scoreboard_core::ScoredMember;
use serde_json::Value as JsonValue;
use tracing::warn;

/// How a member's text would be interpreted by a JSON-decoding consumer
#[derive(Debug, Clone, PartialEq)]
pub enum MemberKind {
    /// Plain label, or a bare JSON scalar
    Plain,
    /// Decodes to a JSON array or object
    Structured(JsonValue),
}

impl MemberKind {
    /// True for structured members
    pub fn is_structured(&self) -> bool {
        matches!(self, MemberKind::Structured(_))
    }
}

/// A query row together with its classification
#[derive(Debug, Clone, PartialEq)]
pub struct AuditedMember {
    /// The row as stored
    pub row: ScoredMember,
    /// Interpretation of the member text
    pub kind: MemberKind,
}

/// Classify member text
///
/// Only arrays and objects count as structured: `"42"` or `"true"` are
/// still plain labels to any reasonable consumer.
pub fn classify_member(text: &str) -> MemberKind {
    match serde_json::from_str::<JsonValue>(text) {
        Ok(value @ (JsonValue::Array(_) | JsonValue::Object(_))) => MemberKind::Structured(value),
        _ => MemberKind::Plain,
    }
}

/// Classify query rows, logging a warning for each structured member
pub fn audit_rows(key: &str, rows: Vec<ScoredMember>) -> Vec<AuditedMember> {
    rows.into_iter()
        .map(|row| {
            let kind = classify_member(&row.member);
            if kind.is_structured() {
                warn!(
                    target: "scoreboard::audit",
                    key,
                    member = %row.member,
                    score = %row.score,
                    "member decodes to structured data"
                );
            }
            AuditedMember { row, kind }
        })
        .collect()
}
