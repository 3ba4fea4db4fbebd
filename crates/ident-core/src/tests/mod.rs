
use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub(crate) const AUTHOR_NAME: &str = "A U Thor";
pub(crate) const AUTHOR_EMAIL: &str = "author@example.com";
pub(crate) const AUTHOR_WHEN_MILLIS: i64 = 1_142_878_449_000;
pub(crate) const AUTHOR_TZ_OFFSET: i32 = -300;

pub(crate) const MINUTES_PER_HOUR: i32 = 60;
const SECONDS_PER_MINUTE: i32 = 60;

/// A zone that switches from a standard to a summer offset at one instant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DaylightZone {
    pub(crate) switch_at: DateTime<Utc>,
    pub(crate) standard_minutes: i32,
    pub(crate) summer_minutes: i32,
}

impl DaylightZone {
    /// Central European rules for 2024: +01:00, then +02:00 from 31 March 01:00 UTC.
    pub(crate) fn central_europe_2024() -> Self {
        Self {
            switch_at: "2024-03-31T01:00:00Z".parse().unwrap(),
            standard_minutes: MINUTES_PER_HOUR,
            summer_minutes: 2 * MINUTES_PER_HOUR,
        }
    }

    fn offset_at(&self, utc: &NaiveDateTime) -> FixedOffset {
        let minutes = if utc.and_utc() < self.switch_at {
            self.standard_minutes
        } else {
            self.summer_minutes
        };
        FixedOffset::east_opt(minutes * SECONDS_PER_MINUTE).unwrap()
    }
}

impl TimeZone for DaylightZone {
    type Offset = FixedOffset;

    fn from_offset(offset: &Self::Offset) -> Self {
        let minutes = offset.local_minus_utc() / SECONDS_PER_MINUTE;
        Self {
            switch_at: DateTime::<Utc>::MIN_UTC,
            standard_minutes: minutes,
            summer_minutes: minutes,
        }
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<Self::Offset> {
        let noon = local.and_hms_opt(12, 0, 0).unwrap();
        self.offset_from_local_datetime(&noon)
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<Self::Offset> {
        LocalResult::Single(self.offset_at(local))
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> Self::Offset {
        let noon = utc.and_hms_opt(12, 0, 0).unwrap();
        self.offset_from_utc_datetime(&noon)
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> Self::Offset {
        self.offset_at(utc)
    }
}
