use chrono::{DateTime, SecondsFormat, Utc};
use std::cmp::Ordering;

/// Formats a timestamp the way browsers print `Date.toISOString()`.
pub fn to_iso_string(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_iso_string() -> String {
    to_iso_string(Utc::now())
}

/// Parses an ISO-8601 / RFC 3339 `created_at` value.
///
/// Returns `None` for absent, empty or unparseable input.
pub fn parse_created_at(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .ok()
}

/// Newest-first ordering on raw `created_at` values.
///
/// Undated entries sort after every dated one and compare equal to each other,
/// so a stable sort keeps their relative order.
pub fn newest_first(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (parse_created_at(left), parse_created_at(right)) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
