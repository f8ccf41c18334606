//! Calendar instant used as the logical value of `timestamp-micros` fields.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const NANOS_PER_MICRO: u32 = 1_000;
const MICROS_PER_SECOND: i64 = 1_000_000;

/// An instant relative to the Unix epoch, split into whole seconds and a
/// nanosecond adjustment in `0..1_000_000_000`.
///
/// Negative instants keep a non-negative `nanos`: half a second before the
/// epoch is `seconds = -1, nanos = 500_000_000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "TimestampParts")]
pub struct Timestamp {
    seconds: i64,
    nanos: u32,
}

/// Serialized form of [`Timestamp`]; loaded through [`Timestamp::new`].
#[derive(Deserialize)]
struct TimestampParts {
    seconds: i64,
    nanos: u32,
}

impl From<TimestampParts> for Timestamp {
    fn from(parts: TimestampParts) -> Self {
        Timestamp::new(parts.seconds, parts.nanos)
    }
}

impl Timestamp {
    /// Creates an instant, carrying whole seconds out of `nanos`.
    pub fn new(seconds: i64, nanos: u32) -> Self {
        Self {
            seconds: seconds.saturating_add(i64::from(nanos / NANOS_PER_SECOND)),
            nanos: nanos % NANOS_PER_SECOND,
        }
    }

    /// Instant `micros` microseconds after the epoch.
    pub fn from_micros(micros: i64) -> Self {
        Self {
            seconds: micros.div_euclid(MICROS_PER_SECOND),
            nanos: micros.rem_euclid(MICROS_PER_SECOND) as u32 * NANOS_PER_MICRO,
        }
    }

    /// Microseconds since the epoch, truncating sub-microsecond precision.
    ///
    /// Returns `None` if the instant lies outside the `i64` microsecond range.
    pub fn to_micros(&self) -> Option<i64> {
        let micros = i128::from(self.seconds) * i128::from(MICROS_PER_SECOND)
            + i128::from(self.nanos / NANOS_PER_MICRO);
        i64::try_from(micros).ok()
    }

    /// Drops the sub-microsecond part of `nanos`.
    pub fn truncate_to_micros(&self) -> Self {
        Self {
            seconds: self.seconds,
            nanos: self.nanos - self.nanos % NANOS_PER_MICRO,
        }
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    /// Converts to a chrono UTC datetime, if chrono can represent it.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.nanos)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        // Leap seconds surface as nanos >= 1e9; `new` folds them into seconds.
        Timestamp::new(dt.timestamp(), dt.timestamp_subsec_nanos())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => write!(f, "{}.{:09}s", self.seconds, self.nanos),
        }
    }
}
