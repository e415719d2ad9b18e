//! Point-in-time values
//!
//! [`Timestamp`] is a UTC instant at nanosecond resolution. [`ServerTimestamp`]
//! is a write whose final time the server has not assigned yet: it carries a
//! local estimate for ordering plus the previously committed value.

use core::fmt;

#[cfg(feature = "temporal")]
use chrono::{DateTime, Utc};

use crate::error::{ValueError, ValueResult};

/// 0001-01-01T00:00:00Z
const MIN_SECONDS: i64 = -62_135_596_800;
/// 9999-12-31T23:59:59Z
const MAX_SECONDS: i64 = 253_402_300_799;
const MAX_NANOS: i32 = 999_999_999;

/// A UTC instant: seconds since the Unix epoch plus a non-negative
/// nanosecond fraction.
///
/// Negative `seconds` with a fraction still count `nanos` forward in time, so
/// the derived order (seconds, then nanos) is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

impl Timestamp {
    /// The Unix epoch
    pub const ORIGIN: Self = Self {
        seconds: 0,
        nanos: 0,
    };

    /// Create a validated timestamp.
    pub fn new(seconds: i64, nanos: i32) -> ValueResult<Self> {
        if !(0..=MAX_NANOS).contains(&nanos) {
            return Err(ValueError::invalid_timestamp(
                seconds,
                nanos,
                "nanos must be within [0, 999999999]",
            ));
        }
        if !(MIN_SECONDS..=MAX_SECONDS).contains(&seconds) {
            return Err(ValueError::invalid_timestamp(
                seconds,
                nanos,
                "seconds must be within 0001-01-01 and 9999-12-31",
            ));
        }
        Ok(Self { seconds, nanos })
    }

    /// The current wall-clock time
    #[cfg(feature = "temporal")]
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            seconds: now.timestamp(),
            nanos: subsec_nanos(&now),
        }
    }

    #[inline]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    #[inline]
    pub const fn nanos(&self) -> i32 {
        self.nanos
    }

    /// Convert to a chrono `DateTime<Utc>`
    #[cfg(feature = "temporal")]
    pub fn to_datetime(&self) -> DateTime<Utc> {
        // Always `Some`: the validated range is inside chrono's.
        DateTime::<Utc>::from_timestamp(self.seconds, self.nanos as u32)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// ISO-8601 rendering with nanosecond precision,
    /// e.g. `1912-04-14T23:40:00.000000000Z`
    #[cfg(feature = "temporal")]
    pub fn to_iso8601(&self) -> String {
        self.to_datetime()
            .format("%Y-%m-%dT%H:%M:%S%.9fZ")
            .to_string()
    }
}

#[cfg(feature = "temporal")]
impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = ValueError;

    fn try_from(value: DateTime<Utc>) -> Result<Self, Self::Error> {
        Self::new(value.timestamp(), subsec_nanos(&value))
    }
}

/// Sub-second part of `value`, folding a leap second into the last
/// representable nanosecond of the preceding second.
#[cfg(feature = "temporal")]
fn subsec_nanos(value: &DateTime<Utc>) -> i32 {
    value.timestamp_subsec_nanos().min(MAX_NANOS as u32) as i32
}

#[cfg(feature = "temporal")]
impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.to_datetime()
    }
}

impl fmt::Display for Timestamp {
    #[cfg(feature = "temporal")]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }

    #[cfg(not(feature = "temporal"))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp(seconds={}, nanos={})", self.seconds, self.nanos)
    }
}

/// Pending server-assigned timestamp.
///
/// Only `local` takes part in ordering; `previous` is kept so the
/// committed value can be shown until the server resolves the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ServerTimestamp {
    local: Timestamp,
    previous: Timestamp,
}

impl ServerTimestamp {
    pub const fn new(local: Timestamp, previous: Timestamp) -> Self {
        Self { local, previous }
    }

    /// Local estimate of the write time
    #[inline]
    pub const fn local(&self) -> Timestamp {
        self.local
    }

    /// Previously committed value of the field
    #[inline]
    pub const fn previous(&self) -> Timestamp {
        self.previous
    }
}

impl fmt::Display for ServerTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ServerTimestamp(local={}, previous={})",
            self.local, self.previous
        )
    }
}
