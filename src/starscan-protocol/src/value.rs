//! Comparable values.
//!
//! A dataset is homogeneous: every item compares either as a number or
//! as a case-folded string. `Value` carries both kinds and defines the
//! total order the halving scan relies on.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A value used for equality and ordering during a scan.
///
/// Text values are expected to be lower-cased at construction time;
/// [`Value::text`] does the folding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric comparison (sector frequencies, roll numbers, custom numbers).
    Number(f64),
    /// Case-folded string comparison (contact names, custom words).
    Text(String),
}

impl Value {
    /// Builds a text value, folding case so comparisons are case-insensitive.
    pub fn text(s: impl AsRef<str>) -> Self {
        Value::Text(s.as_ref().to_lowercase())
    }

    /// Builds a numeric value.
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// True if this is a numeric value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            // Mixed kinds never occur within one dataset; define an
            // arbitrary but total order so Ord stays lawful.
            (Value::Number(_), Value::Text(_)) => Ordering::Less,
            (Value::Text(_), Value::Number(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_order_numerically() {
        assert!(Value::number(4.0) < Value::number(10.0));
        assert_eq!(Value::number(8.0), Value::number(8.0));
    }

    #[test]
    fn text_is_case_folded_at_construction() {
        assert_eq!(Value::text("Alice"), Value::text("ALICE"));
        assert!(Value::text("bob") < Value::text("Charlie"));
    }

    #[test]
    fn display_trims_integral_floats() {
        assert_eq!(Value::number(42.0).to_string(), "42");
        assert_eq!(Value::number(4.5).to_string(), "4.5");
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_string(&Value::number(8.0)).unwrap(), "8.0");
        assert_eq!(
            serde_json::to_string(&Value::text("Eve")).unwrap(),
            "\"eve\""
        );
    }
}
