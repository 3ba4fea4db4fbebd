//! Canonical text encoding of a [`PersonIdent`].
//!
//! The canonical line is `<name> <<email>> <epoch-seconds> <±HHMM>`, the form
//! stored in commit and tag headers. Nothing here parses; every function is
//! total over its inputs.

use crate::{GMT_ZONE_PREFIX, MILLIS_PER_SECOND, MINUTES_PER_HOUR, PersonIdent, ZoneResolver};

use std::fmt::Write;

use chrono::{FixedOffset, Offset, Utc};

/// Append `text` to `out` with padding and line-breaking characters removed.
///
/// Characters at or below U+0020 are trimmed from both ends (ASCII trim, not
/// Unicode whitespace). Of what remains, `\n`, `<` and `>` are dropped and
/// everything else is copied in order.
pub fn write_sanitized(out: &mut String, text: &str) {
    let trimmed = text.trim_matches(|c: char| c <= ' ');
    out.extend(trimmed.chars().filter(|&c| !matches!(c, '\n' | '<' | '>')));
}

/// Sanitize `text` for embedding in a canonical line.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    write_sanitized(&mut out, text);
    out
}

/// Append `offset` (minutes east of UTC) to `out` as `+HHMM` or `-HHMM`.
pub fn write_timezone(out: &mut String, offset: i32) {
    let sign = if offset < 0 { '-' } else { '+' };
    let offset = offset.unsigned_abs();
    let hours = offset / MINUTES_PER_HOUR;
    let minutes = offset % MINUTES_PER_HOUR;

    out.push(sign);
    // Writing into a String cannot fail.
    let _ = write!(out, "{hours:02}{minutes:02}");
}

/// Format `offset` (minutes east of UTC) as `+HHMM` or `-HHMM`.
pub fn format_timezone(offset: i32) -> String {
    let mut out = String::with_capacity(5);
    write_timezone(&mut out, offset);
    out
}

/// Resolve the fixed-offset zone `GMT±HHMM` for `offset`.
///
/// Ids the resolver does not accept fall back to UTC.
pub fn timezone_object(offset: i32, resolver: &impl ZoneResolver) -> FixedOffset {
    let mut zone_id = String::with_capacity(8);
    zone_id.push_str(GMT_ZONE_PREFIX);
    write_timezone(&mut zone_id, offset);

    resolver.resolve(&zone_id).unwrap_or_else(|| Utc.fix())
}

/// Render `ident` in canonical form.
pub fn to_external_string(ident: &PersonIdent) -> String {
    let mut out = String::new();
    write_sanitized(&mut out, ident.name());
    out.push_str(" <");
    write_sanitized(&mut out, ident.email_address());
    out.push_str("> ");
    let _ = write!(out, "{}", ident.when_millis() / MILLIS_PER_SECOND);
    out.push(' ');
    write_timezone(&mut out, ident.time_zone_offset());
    out
}
