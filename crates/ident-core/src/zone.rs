use crate::{GMT_ZONE_PREFIX, SECONDS_PER_MINUTE};

use chrono::{FixedOffset, Offset, Utc};

const UTC_ZONE_PREFIX: &str = "UTC";
const MAX_HOURS: i32 = 23;
const MAX_MINUTES: i32 = 59;

/// Looks up a zone handle from a textual zone id.
pub trait ZoneResolver {
    /// Returns `None` when the id is not recognised.
    fn resolve(&self, zone_id: &str) -> Option<FixedOffset>;
}

/// Resolves custom fixed-offset ids such as `GMT`, `GMT+0530`, `GMT-5` or
/// `UTC+05:30`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GmtZoneResolver;

impl ZoneResolver for GmtZoneResolver {
    fn resolve(&self, zone_id: &str) -> Option<FixedOffset> {
        let rest = zone_id
            .strip_prefix(GMT_ZONE_PREFIX)
            .or_else(|| zone_id.strip_prefix(UTC_ZONE_PREFIX))?;

        if rest.is_empty() {
            return Some(Utc.fix());
        }

        let (sign, digits) = match rest.split_at_checked(1)? {
            ("+", digits) => (1, digits),
            ("-", digits) => (-1, digits),
            _ => return None,
        };
        let (hours, minutes) = parse_hours_minutes(digits)?;
        if hours > MAX_HOURS || minutes > MAX_MINUTES {
            return None;
        }

        FixedOffset::east_opt(sign * (hours * 60 + minutes) * SECONDS_PER_MINUTE)
    }
}

/// Accepts `H`, `HH`, `HMM`, `HHMM`, `H:MM` and `HH:MM`.
fn parse_hours_minutes(text: &str) -> Option<(i32, i32)> {
    if let Some((hours, minutes)) = text.split_once(':') {
        if hours.len() > 2 || minutes.len() != 2 {
            return None;
        }
        return Some((parse_digits(hours)?, parse_digits(minutes)?));
    }

    match text.len() {
        1 | 2 => Some((parse_digits(text)?, 0)),
        3 | 4 => {
            let (hours, minutes) = text.split_at_checked(text.len() - 2)?;
            Some((parse_digits(hours)?, parse_digits(minutes)?))
        }
        _ => None,
    }
}

fn parse_digits(text: &str) -> Option<i32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
