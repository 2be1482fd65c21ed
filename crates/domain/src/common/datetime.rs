//! Timestamp formatting shared by every emitted item.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Formats a timestamp as ISO-8601 UTC with millisecond precision and a `Z`
/// suffix, e.g. `2025-06-15T10:30:00.000Z`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use randorg_domain::common::format_iso_millis;
///
/// let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
/// assert_eq!(format_iso_millis(&dt), "2024-01-15T10:30:00.000Z");
/// ```
pub fn format_iso_millis(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for `#[serde(serialize_with = "...")]` on timestamp fields.
pub fn serialize_iso_millis<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_iso_millis(dt))
}
