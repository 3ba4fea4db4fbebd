use crate::SECONDS_PER_MINUTE;

use chrono::{DateTime, Offset, TimeZone, Utc};

/// Source of the current time.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// The zone whose offset stamps identities created "now".
pub trait LocalZone {
    /// Offset from UTC in minutes, evaluated at `when_millis`.
    fn offset_minutes_at(&self, when_millis: i64) -> i32;
}

/// Any chrono zone (`Local`, `Utc`, `FixedOffset`, tz databases) can act as
/// the local zone. Instants chrono cannot represent evaluate to offset 0.
impl<Tz: TimeZone> LocalZone for Tz {
    fn offset_minutes_at(&self, when_millis: i64) -> i32 {
        DateTime::from_timestamp_millis(when_millis)
            .map(|when| offset_minutes_at(self, &when))
            .unwrap_or(0)
    }
}

/// Offset of `zone` at `when`, in whole minutes east of UTC.
pub(crate) fn offset_minutes_at<Tz: TimeZone>(zone: &Tz, when: &DateTime<Utc>) -> i32 {
    zone.offset_from_utc_datetime(&when.naive_utc())
        .fix()
        .local_minus_utc()
        / SECONDS_PER_MINUTE
}
