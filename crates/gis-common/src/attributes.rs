//! Feature attribute maps consumed by the renderer classifier.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribute values as returned by feature services: string, number or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Number(f64),
    Null,
}

/// A feature's attributes, keyed by field name. Read-only at
/// classification time.
pub type Attributes = HashMap<String, AttributeValue>;

impl AttributeValue {
    /// Coerce this value to the string form used in unique-value composite
    /// keys. Integer-valued numbers render without a fractional part, so a
    /// numeric column value `42` produces the key `"42"`.
    ///
    /// Lookup keys in renderer definitions are built server-side; this
    /// coercion assumes the server stringified values the same way. That
    /// assumption is not verified anywhere and a mismatch silently falls
    /// through to the renderer's default symbol.
    pub fn as_key_string(&self) -> String {
        match self {
            AttributeValue::String(s) => s.clone(),
            AttributeValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            AttributeValue::Null => "null".to_string(),
        }
    }

    /// Numeric view of this value, if it has one. Numeric strings parse;
    /// anything else is None.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            AttributeValue::String(s) => s.trim().parse().ok(),
            AttributeValue::Null => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Number(n)
    }
}
