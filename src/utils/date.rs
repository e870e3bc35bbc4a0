//! Front matter date parsing and feed/JSON-LD formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Parse a front matter date.
///
/// Accepts `YYYY-MM-DD` (midnight UTC), RFC 3339 with any offset, and a bare
/// `YYYY-MM-DDTHH:MM:SS` (taken as UTC). Returns `None` for anything else.
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// ISO 8601 with millisecond precision and a `Z` suffix: `2024-01-15T00:00:00.000Z`.
pub fn to_iso(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// RFC 2822, as required by rss `<pubDate>`.
pub fn to_rfc2822(dt: &DateTime<Utc>) -> String {
    dt.to_rfc2822()
}
