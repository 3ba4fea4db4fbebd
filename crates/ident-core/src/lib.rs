pub mod clock;
pub mod committer_source;
pub mod encoding;
pub mod error;
pub mod person_ident;
pub mod zone;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, LocalZone, SystemClock};
pub use committer_source::CommitterSource;
pub use encoding::{
    format_timezone, sanitize, timezone_object, to_external_string, write_sanitized,
    write_timezone,
};
pub use error::{CoreError, Result};
pub use person_ident::PersonIdent;
pub use zone::{GmtZoneResolver, ZoneResolver};

const MILLIS_PER_SECOND: i64 = 1000;
const MINUTES_PER_HOUR: u32 = 60;
const SECONDS_PER_MINUTE: i32 = 60;
const GMT_ZONE_PREFIX: &str = "GMT";
