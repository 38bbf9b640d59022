//! Serde helpers for calendar dates submitted by the web client.
//!
//! Date pickers send either a bare `YYYY-MM-DD` or a full RFC 3339 timestamp;
//! both collapse to the calendar date. Empty strings count as "not set".

use chrono::{DateTime, NaiveDate};
use serde::{de::Error, Deserialize, Deserializer};

/// Parse a calendar date from either accepted form.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => parse_calendar_date(value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date: {}", value))),
    }
}
