//! Attribute value kinds and scalar values
//!
//! An attribute carries exactly one scalar of one of five kinds. The kind is
//! fixed when the attribute is decoded and never changes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The closed set of attribute value kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// `bool`
    Boolean,
    /// 64-bit signed integer
    Long,
    /// 64-bit floating point
    Double,
    /// Unicode string
    String,
    /// Civil date and time with millisecond precision
    DateTime,
}

impl ValueKind {
    /// Every value kind, in wire order
    pub const ALL: [ValueKind; 5] = [
        ValueKind::Boolean,
        ValueKind::Long,
        ValueKind::Double,
        ValueKind::String,
        ValueKind::DateTime,
    ];

    /// Lowercase name used in messages and logs
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Long => "long",
            ValueKind::Double => "double",
            ValueKind::String => "string",
            ValueKind::DateTime => "datetime",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scalar value held by an attribute
///
/// Equality is bit-exact for doubles: `NaN` equals a `NaN` with the same
/// bit pattern and `0.0` differs from `-0.0`. This keeps `Eq` and `Hash`
/// consistent so values can be used as map keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeValue {
    /// Boolean value
    Boolean(bool),
    /// Long value
    Long(i64),
    /// Double value
    Double(f64),
    /// String value
    String(String),
    /// Date-time value, already converted to civil time
    DateTime(NaiveDateTime),
}

impl AttributeValue {
    /// Kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            AttributeValue::Boolean(_) => ValueKind::Boolean,
            AttributeValue::Long(_) => ValueKind::Long,
            AttributeValue::Double(_) => ValueKind::Double,
            AttributeValue::String(_) => ValueKind::String,
            AttributeValue::DateTime(_) => ValueKind::DateTime,
        }
    }

    /// The boolean, if this is a Boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer, if this is a Long value
    pub fn as_long(&self) -> Option<i64> {
        match self {
            AttributeValue::Long(n) => Some(*n),
            _ => None,
        }
    }

    /// The float, if this is a Double value
    pub fn as_double(&self) -> Option<f64> {
        match self {
            AttributeValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// The string, if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The civil timestamp, if this is a DateTime value
    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            AttributeValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl PartialEq for AttributeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttributeValue::Boolean(a), AttributeValue::Boolean(b)) => a == b,
            (AttributeValue::Long(a), AttributeValue::Long(b)) => a == b,
            (AttributeValue::Double(a), AttributeValue::Double(b)) => a.to_bits() == b.to_bits(),
            (AttributeValue::String(a), AttributeValue::String(b)) => a == b,
            (AttributeValue::DateTime(a), AttributeValue::DateTime(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for AttributeValue {}

impl Hash for AttributeValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            AttributeValue::Boolean(b) => b.hash(state),
            AttributeValue::Long(n) => n.hash(state),
            AttributeValue::Double(d) => d.to_bits().hash(state),
            AttributeValue::String(s) => s.hash(state),
            AttributeValue::DateTime(dt) => dt.hash(state),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Boolean(b) => write!(f, "{}", b),
            AttributeValue::Long(n) => write!(f, "{}", n),
            AttributeValue::Double(d) => write!(f, "{}", d),
            AttributeValue::String(s) => write!(f, "\"{}\"", s),
            AttributeValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3f")),
        }
    }
}

// From implementations for common types
impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Boolean(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Long(n)
    }
}

impl From<f64> for AttributeValue {
    fn from(d: f64) -> Self {
        AttributeValue::Double(d)
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<NaiveDateTime> for AttributeValue {
    fn from(dt: NaiveDateTime) -> Self {
        AttributeValue::DateTime(dt)
    }
}
