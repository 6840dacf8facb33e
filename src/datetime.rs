//! The canonical date format used on the OpenAQ wire.
//!
//! Every date the API consumes or produces is ISO-8601 with the `T`
//! separator, a UTC offset, and fractional seconds, e.g.
//! `2018-07-14T19:44:31.904Z`. This module is the single formatter for both
//! directions: query-parameter encoding calls [`format`], and response
//! models use the module as a `#[serde(with = "crate::datetime")]` target.
//!
//! Values are [`chrono::DateTime<Utc>`], so a timezone-naive datetime can
//! never reach the encoder.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Formats a datetime to the canonical wire representation, with
/// millisecond precision and the `Z` designator.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let date = Utc.with_ymd_and_hms(2018, 7, 14, 19, 44, 31).unwrap();
/// assert_eq!(openaq::datetime::format(&date), "2018-07-14T19:44:31.000Z");
/// ```
pub fn format(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a datetime from the canonical wire representation.
///
/// The offset is mandatory; a timezone-naive string is rejected. Whatever
/// offset the string carries, the result is normalized to UTC.
pub fn parse(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|date| date.with_timezone(&Utc))
}

/// Serializes a datetime through [`format`], for use with `#[serde(with)]`.
pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(date))
}

/// Deserializes a datetime through [`parse`], for use with `#[serde(with)]`.
///
/// A string that does not match the canonical format fails with an error
/// naming the offending value; serde_json extends it with the location in
/// the document.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse(&value).map_err(|_| de::Error::custom(format_args!("invalid date: {}", value)))
}
