use crate::clock::offset_minutes_at;
use crate::{
    Clock, CommitterSource, CoreError, GmtZoneResolver, LocalZone, MILLIS_PER_SECOND,
    Result as CoreErrorResult, encoding,
};

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

const DISPLAY_DATE_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";

/// Who authored or committed something, and when.
///
/// Name and email are kept exactly as given, surrounding whitespace included;
/// they are only cleaned up when rendered with [`PersonIdent::to_external_string`].
///
/// Two identities are equal when name, email and the timestamp truncated to
/// whole seconds match. The timezone offset takes no part in equality or
/// hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonIdent {
    name: String,
    email_address: String,
    when_millis: i64,
    tz_offset: i32,
}

impl PersonIdent {
    /// Build an identity from literal values.
    ///
    /// # Arguments
    /// * `when_millis` - Milliseconds since the Unix epoch
    /// * `tz_offset` - Minutes east of UTC, negative west of it
    pub fn new(
        name: impl Into<String>,
        email_address: impl Into<String>,
        when_millis: i64,
        tz_offset: i32,
    ) -> Self {
        Self {
            name: name.into(),
            email_address: email_address.into(),
            when_millis,
            tz_offset,
        }
    }

    /// Build an identity from values that may be missing.
    ///
    /// Fails with [`CoreError::InvalidArgument`] if `name` or `email_address`
    /// is `None`.
    #[track_caller]
    pub fn try_new(
        name: Option<String>,
        email_address: Option<String>,
        when_millis: i64,
        tz_offset: i32,
    ) -> CoreErrorResult<Self> {
        let Some(name) = name else {
            return Err(CoreError::invalid_argument(
                "name of person ident must not be absent",
            ));
        };
        let Some(email_address) = email_address else {
            return Err(CoreError::invalid_argument(
                "email address of person ident must not be absent",
            ));
        };

        Ok(Self::new(name, email_address, when_millis, tz_offset))
    }

    /// Build an identity stamped with the clock's current time, in the local
    /// zone's offset at that instant.
    pub fn now(
        name: impl Into<String>,
        email_address: impl Into<String>,
        clock: &impl Clock,
        zone: &impl LocalZone,
    ) -> Self {
        let when_millis = clock.now_millis();
        Self::new(
            name,
            email_address,
            when_millis,
            zone.offset_minutes_at(when_millis),
        )
    }

    /// Build the default committer identity from `source`, stamped now.
    #[track_caller]
    pub fn from_committer(
        source: &impl CommitterSource,
        clock: &impl Clock,
        zone: &impl LocalZone,
    ) -> CoreErrorResult<Self> {
        let when_millis = clock.now_millis();
        Self::try_new(
            source.committer_name(),
            source.committer_email(),
            when_millis,
            zone.offset_minutes_at(when_millis),
        )
    }

    /// Copy with both time fields replaced.
    pub fn with_offset_and_time(&self, when_millis: i64, tz_offset: i32) -> Self {
        Self::new(
            self.name.clone(),
            self.email_address.clone(),
            when_millis,
            tz_offset,
        )
    }

    /// Copy at `when`, taking the offset `zone` has at that instant.
    pub fn with_zone_at_instant<Tz: TimeZone>(&self, when: DateTime<Utc>, zone: &Tz) -> Self {
        self.with_offset_and_time(when.timestamp_millis(), offset_minutes_at(zone, &when))
    }

    /// Copy at `when`, keeping this identity's offset.
    pub fn with_time_keep_offset(&self, when: DateTime<Utc>) -> Self {
        self.with_offset_and_time(when.timestamp_millis(), self.tz_offset)
    }

    /// Copy stamped with the clock's current time in the local zone.
    pub fn with_current_time(&self, clock: &impl Clock, zone: &impl LocalZone) -> Self {
        let when_millis = clock.now_millis();
        self.with_offset_and_time(when_millis, zone.offset_minutes_at(when_millis))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    /// Milliseconds since the Unix epoch.
    pub fn when_millis(&self) -> i64 {
        self.when_millis
    }

    /// The timestamp as a point in time.
    ///
    /// Saturates at chrono's limits for millisecond values more than about
    /// 262,000 years from the epoch.
    pub fn when(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.when_millis).unwrap_or(if self.when_millis < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }

    /// Minutes east of UTC; negative west of UTC.
    pub fn time_zone_offset(&self) -> i32 {
        self.tz_offset
    }

    /// The declared zone as a fixed offset.
    pub fn time_zone(&self) -> FixedOffset {
        encoding::timezone_object(self.tz_offset, &GmtZoneResolver)
    }

    /// Format for storage in an object header.
    pub fn to_external_string(&self) -> String {
        encoding::to_external_string(self)
    }

    fn when_seconds(&self) -> i64 {
        self.when_millis / MILLIS_PER_SECOND
    }
}

impl PartialEq for PersonIdent {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.email_address == other.email_address
            && self.when_seconds() == other.when_seconds()
    }
}

impl Eq for PersonIdent {}

impl Hash for PersonIdent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.email_address.hash(state);
        self.when_seconds().hash(state);
    }
}

impl fmt::Display for PersonIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let local = self.when().with_timezone(&self.time_zone());
        write!(
            f,
            "PersonIdent[{}, {}, {}]",
            self.name,
            self.email_address,
            local.format(DISPLAY_DATE_FORMAT)
        )
    }
}
