use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Wire-level type of a field, before any logical conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalType {
    /// Carries no bytes on the wire
    Null,
    /// Signed 64-bit integer, zig-zag varint on the wire
    Long,
}

/// A single field value held by a record.
///
/// Fields with a registered logical type hold the logical variant
/// (e.g. [`Value::Timestamp`]); all other fields hold the physical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// Absent value
    Null,
    /// 64-bit signed integer
    Long(i64),
    /// Instant, the logical form of `timestamp-micros`
    Timestamp(Timestamp),
}

impl Value {
    /// Returns true for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Long(_) => "long",
            Value::Timestamp(_) => "timestamp",
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Long(i64::from(v))
    }
}

impl From<Timestamp> for Value {
    fn from(ts: Timestamp) -> Self {
        Value::Timestamp(ts)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
