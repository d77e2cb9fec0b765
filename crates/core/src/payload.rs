//! Serialized member payloads
//!
//! A payload is a heterogeneous sequence (text and numbers) encoded into a
//! single text value so it can be stored where only text is accepted.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One element of a heterogeneous payload sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayloadItem {
    /// Integer element
    Number(i64),
    /// Floating-point element
    Float(f64),
    /// Text element
    Text(String),
}

impl PayloadItem {
    /// Textual form used when the item becomes a protocol argument
    pub fn to_arg(&self) -> String {
        match self {
            PayloadItem::Number(n) => n.to_string(),
            PayloadItem::Float(f) => f.to_string(),
            PayloadItem::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for PayloadItem {
    fn from(s: &str) -> Self {
        PayloadItem::Text(s.to_string())
    }
}

impl From<String> for PayloadItem {
    fn from(s: String) -> Self {
        PayloadItem::Text(s)
    }
}

impl From<i64> for PayloadItem {
    fn from(n: i64) -> Self {
        PayloadItem::Number(n)
    }
}

impl From<f64> for PayloadItem {
    fn from(f: f64) -> Self {
        PayloadItem::Float(f)
    }
}

/// Encode a sequence as compact JSON array text
///
/// `["test", 1337, "pwned"]` becomes `["test",1337,"pwned"]`.
pub fn serialize_payload(items: &[PayloadItem]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}
