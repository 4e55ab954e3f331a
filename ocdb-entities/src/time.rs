use std::fmt;

use time::OffsetDateTime;

/// A point in time with millisecond precision.
///
/// Stored as milliseconds since the Unix epoch, matching the
/// precision of timestamps assigned by the issue store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_milliseconds(milliseconds: i64) -> Self {
        Self(milliseconds)
    }

    pub const fn into_milliseconds(self) -> i64 {
        self.0
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds * 1_000)
    }

    pub const fn into_seconds(self) -> i64 {
        self.0 / 1_000
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
            .expect("timestamp within the representable range")
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", OffsetDateTime::from(*self))
    }
}
